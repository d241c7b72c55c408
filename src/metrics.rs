/*!
 * Schedule Metrics
 * Aggregate performance figures over a computed schedule
 */

use crate::core::types::Ticks;
use crate::scheduler::{ScheduleResult, TimelineUnit};
use serde::{Deserialize, Serialize};

/// Mean waiting and turnaround time across a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageTimes {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

/// Arithmetic means of waiting and turnaround time
///
/// Returns `None` for an empty batch.
pub fn aggregate(results: &[ScheduleResult]) -> Option<AverageTimes> {
    if results.is_empty() {
        return None;
    }

    let count = results.len() as f64;
    let (waiting, turnaround) = results.iter().fold((0u64, 0u64), |(w, t), r| {
        (w + r.waiting_time as u64, t + r.turnaround_time as u64)
    });

    Some(AverageTimes {
        avg_waiting: waiting as f64 / count,
        avg_turnaround: turnaround as f64 / count,
    })
}

/// Timeline occupancy figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilization {
    pub makespan: Ticks,
    pub idle_time: Ticks,
    /// Busy share of the makespan, 0.0..=1.0
    pub cpu_utilization: f64,
}

pub fn utilization(timeline: &[TimelineUnit]) -> Utilization {
    let makespan = timeline.len() as Ticks;
    let idle_time = timeline.iter().filter(|u| u.is_idle()).count() as Ticks;
    let cpu_utilization = if makespan == 0 {
        0.0
    } else {
        (makespan - idle_time) as f64 / makespan as f64
    };

    Utilization {
        makespan,
        idle_time,
        cpu_utilization,
    }
}
