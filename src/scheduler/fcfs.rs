/*!
 * First-Come-First-Served Scheduling
 * Non-preemptive, single server, ties broken by process id
 */

use super::traits::SchedulingAlgorithm;
use super::types::{ProcessInput, Schedule, ScheduleResult, TimelineUnit};
use crate::core::types::Ticks;
use std::iter;
use tracing::debug;

/// FCFS policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn schedule(&self, processes: &[ProcessInput]) -> Schedule {
        schedule(processes)
    }
}

/// Run FCFS over a validated batch
///
/// Results come back in execution order (arrival time, then id).
pub fn schedule(processes: &[ProcessInput]) -> Schedule {
    let mut ordered: Vec<&ProcessInput> = processes.iter().collect();
    ordered.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.id.cmp(&b.id))
    });

    let total: usize = processes.iter().map(|p| p.burst_time as usize).sum();
    let mut timeline = Vec::with_capacity(total);
    let mut results = Vec::with_capacity(ordered.len());
    let mut clock: Ticks = 0;

    for process in ordered {
        if process.arrival_time > clock {
            let idle = (process.arrival_time - clock) as usize;
            timeline.extend(iter::repeat(TimelineUnit::Idle).take(idle));
            clock = process.arrival_time;
        }

        let start_time = clock;
        timeline.extend(
            iter::repeat(TimelineUnit::Process(process.id.clone()))
                .take(process.burst_time as usize),
        );
        let completion_time = clock + process.burst_time;
        clock = completion_time;

        let turnaround_time = completion_time - process.arrival_time;
        results.push(ScheduleResult {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        });
    }

    debug!(
        processes = results.len(),
        makespan = clock,
        "fcfs schedule computed"
    );

    Schedule { timeline, results }
}
