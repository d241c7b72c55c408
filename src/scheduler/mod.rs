/*!
 * Scheduler Module
 * Single-server CPU scheduling over a validated process batch
 */

pub mod fcfs;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::{schedule, Fcfs};
pub use traits::SchedulingAlgorithm;
pub use types::{ProcessInput, Schedule, ScheduleResult, TimelineUnit};
