/*!
 * Simulator Limits and Constants
 *
 * Centralized location for input bounds and display labels.
 */

use super::types::Ticks;

// =============================================================================
// INPUT BOUNDS
// =============================================================================

/// Largest arrival or burst time accepted from a form row
/// Keeps a single run O(processes × 500) in the worst case
pub const DEFAULT_MAX_TIME_UNIT: Ticks = 500;

/// Earliest valid arrival time
pub const MIN_ARRIVAL_TIME: i64 = 0;

/// Smallest valid burst time
/// A zero-length burst would leave no trace on the timeline
pub const MIN_BURST_TIME: i64 = 1;

// =============================================================================
// LABELS
// =============================================================================

/// Sentinel label for a time unit with nothing running
pub const IDLE_LABEL: &str = "IDLE";

/// Prefix for positionally assigned process ids ("P1", "P2", ...)
pub const ID_PREFIX: &str = "P";

// =============================================================================
// RENDERING
// =============================================================================

/// Default character width of the text Gantt bar
pub const DEFAULT_GANTT_WIDTH: usize = 60;

/// Environment variable overriding the maximum time unit
pub const MAX_TIME_UNIT_ENV: &str = "FCFS_MAX_TIME_UNIT";

/// Environment variable switching tracing output to JSON
pub const TRACE_JSON_ENV: &str = "FCFS_TRACE_JSON";
