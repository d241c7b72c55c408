/*!
 * Simulator Configuration
 *
 * Input bounds shared by validation and the session.
 */

use super::errors::SimulatorError;
use super::limits::{DEFAULT_MAX_TIME_UNIT, MAX_TIME_UNIT_ENV};
use super::types::{Result, Ticks};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Upper bound for arrival and burst times (default: 500)
    pub max_time_unit: Ticks,
}

impl SimulatorConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            max_time_unit: DEFAULT_MAX_TIME_UNIT,
        }
    }

    /// Create configuration with a custom maximum time unit
    pub fn with_max_time_unit(max_time_unit: Ticks) -> Result<Self> {
        if max_time_unit == 0 {
            return Err(SimulatorError::Configuration(
                "max time unit must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_time_unit })
    }

    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - FCFS_MAX_TIME_UNIT: maximum arrival/burst time (default: 500)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(MAX_TIME_UNIT_ENV) {
            None => Ok(Self::new()),
            Some(raw) => {
                let max = raw.trim().parse::<Ticks>().map_err(|e| {
                    SimulatorError::Configuration(format!(
                        "{}='{}' is not a valid time unit: {}",
                        MAX_TIME_UNIT_ENV, raw, e
                    ))
                })?;
                Self::with_max_time_unit(max)
            }
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
