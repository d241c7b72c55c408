/*!
 * FCFS Scheduling Simulator
 * Validation, scheduling, timeline compression and metrics for a
 * First-Come-First-Served CPU scheduling demo
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod scheduler;
pub mod simulation;
pub mod timeline;
pub mod validation;

// Re-exports
pub use crate::core::{
    Field, ProcessId, Result, SimulatorConfig, SimulatorError, Ticks, ValidationError,
};
pub use metrics::{aggregate, utilization, AverageTimes, Utilization};
pub use monitoring::init_tracing;
pub use scheduler::{schedule, Fcfs, ProcessInput, Schedule, ScheduleResult, SchedulingAlgorithm, TimelineUnit};
pub use simulation::{render_report, simulate, SimulationResponse, SimulationSession};
pub use timeline::{compress, expand, GanttChart, GanttSegment, TimelineBlock};
pub use validation::{validate, RawProcessRow};
