/*!
 * Core Types
 * Common types used across the simulator
 */

use super::limits::ID_PREFIX;

/// Discrete simulation time (one unit = one timeline slot)
pub type Ticks = u32;

/// Process identifier as typed into the form ("P1", "P2", ...)
pub type ProcessId = String;

/// Common result type for simulator operations
pub type Result<T> = std::result::Result<T, super::errors::SimulatorError>;

/// Positional label for the row at `index` (zero-based)
#[inline]
pub fn positional_id(index: usize) -> ProcessId {
    format!("{}{}", ID_PREFIX, index + 1)
}
