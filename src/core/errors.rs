/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{ProcessId, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric field of a process row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Arrival,
    Burst,
}

impl Field {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival time",
            Self::Burst => "burst time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input validation errors with serialization support
///
/// The first violated rule rejects the whole batch; no partial schedule
/// is ever produced.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Process in row {position} has an empty identifier")]
    #[diagnostic(
        code(validation::invalid_identifier),
        help("Every process needs a non-blank id such as P1, P2, ...")
    )]
    InvalidIdentifier { position: usize },

    #[error("Process id {id} is used by more than one row")]
    #[diagnostic(
        code(validation::duplicate_identifier),
        help("Each process needs its own id; rename or remove the repeated row.")
    )]
    DuplicateIdentifier { id: ProcessId },

    #[error("Process {id} needs both an arrival time and a burst time")]
    #[diagnostic(
        code(validation::incomplete_process),
        help("Fill in both fields, or clear both to skip the row.")
    )]
    IncompleteProcess { id: ProcessId },

    #[error("Process {id}: {field} '{value}' is not a valid integer")]
    #[diagnostic(
        code(validation::invalid_numeric),
        help("Use whole numbers only, without decimals or units.")
    )]
    InvalidNumeric {
        id: ProcessId,
        field: Field,
        value: String,
    },

    #[error("Process {id}: {field} {value} is out of range")]
    #[diagnostic(
        code(validation::out_of_range),
        help("Arrival time must be at least 0 and burst time at least 1.")
    )]
    OutOfRange {
        id: ProcessId,
        field: Field,
        value: i64,
    },

    #[error("Process {id}: {field} {value} exceeds the maximum of {max}")]
    #[diagnostic(
        code(validation::value_too_large),
        help("Reduce the value or raise FCFS_MAX_TIME_UNIT.")
    )]
    ValueTooLarge {
        id: ProcessId,
        field: Field,
        value: i64,
        max: Ticks,
    },

    #[error("At least one process is required")]
    #[diagnostic(
        code(validation::empty_batch),
        help("Enter an arrival time and a burst time for at least one process.")
    )]
    EmptyBatch,
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(simulator::io_error),
        help("Check that the input file exists and is readable.")
    )]
    Io(String),

    #[error("Malformed input: {0}")]
    #[diagnostic(
        code(simulator::malformed_input),
        help("Input must be a JSON array of {{\"id\", \"arrivalTime\", \"burstTime\"}} rows.")
    )]
    Json(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(simulator::configuration_error),
        help("Invalid configuration. Review environment variables.")
    )]
    Configuration(String),
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimulatorError {
    fn from(err: serde_json::Error) -> Self {
        SimulatorError::Json(err.to_string())
    }
}
