/*!
 * Simulation Module
 * Validate → schedule → compress → aggregate, as one request
 */

pub mod report;
pub mod session;

use crate::core::config::SimulatorConfig;
use crate::core::errors::ValidationError;
use crate::core::types::Ticks;
use crate::metrics::{aggregate, utilization};
use crate::scheduler::{Fcfs, ProcessInput, ScheduleResult, SchedulingAlgorithm, TimelineUnit};
use crate::timeline::{compress, GanttChart, TimelineBlock};
use crate::validation::{validate, RawProcessRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use report::render_report;
pub use session::SimulationSession;

/// Everything a view needs to display one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub timeline: Vec<TimelineUnit>,
    pub compressed_timeline: Vec<TimelineBlock>,
    pub gantt: GanttChart,
    /// Per-process outcomes in input order
    pub results: Vec<ScheduleResult>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub makespan: Ticks,
    pub idle_time: Ticks,
    pub cpu_utilization: f64,
}

/// One-shot FCFS simulation over raw rows
pub fn simulate(
    rows: &[RawProcessRow],
    config: &SimulatorConfig,
) -> Result<SimulationResponse, ValidationError> {
    let processes = validate(rows, config)?;
    simulate_with(&Fcfs, &processes)
}

/// Run an already validated batch through `algorithm`
pub fn simulate_with(
    algorithm: &dyn SchedulingAlgorithm,
    processes: &[ProcessInput],
) -> Result<SimulationResponse, ValidationError> {
    let schedule = algorithm.schedule(processes);
    let averages = aggregate(&schedule.results).ok_or(ValidationError::EmptyBatch)?;
    let usage = utilization(&schedule.timeline);
    let compressed_timeline = compress(&schedule.timeline);
    let gantt = GanttChart::from_blocks(&compressed_timeline);

    let mut results = schedule.results;
    restore_input_order(&mut results, processes);

    Ok(SimulationResponse {
        timeline: schedule.timeline,
        compressed_timeline,
        gantt,
        results,
        avg_waiting: averages.avg_waiting,
        avg_turnaround: averages.avg_turnaround,
        makespan: usage.makespan,
        idle_time: usage.idle_time,
        cpu_utilization: usage.cpu_utilization,
    })
}

/// Sort results back into the order the rows were entered
fn restore_input_order(results: &mut [ScheduleResult], processes: &[ProcessInput]) {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(processes.len());
    for (index, process) in processes.iter().enumerate() {
        positions.entry(process.id.as_str()).or_insert(index);
    }
    results.sort_by_key(|r| positions.get(r.id.as_str()).copied().unwrap_or(usize::MAX));
}
