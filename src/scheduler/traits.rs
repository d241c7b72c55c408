/*!
 * Scheduler Traits
 * Interface between the session and a scheduling policy
 */

use super::types::{ProcessInput, Schedule};

/// A single-server scheduling policy
///
/// Implementations are pure: the same input always yields the same schedule,
/// and input is assumed to have passed validation already.
pub trait SchedulingAlgorithm: Send + Sync {
    /// Short policy name used in logs and reports
    fn name(&self) -> &'static str;

    /// Compute the schedule for a non-empty, validated batch
    fn schedule(&self, processes: &[ProcessInput]) -> Schedule;
}
