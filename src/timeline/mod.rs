/*!
 * Timeline Module
 * Compression and chart geometry for execution traces
 */

pub mod compress;
pub mod gantt;

pub use compress::{compress, expand, TimelineBlock};
pub use gantt::{GanttChart, GanttSegment};
