/*!
 * Simulation Session
 * Mutable form state feeding the pure scheduling pipeline
 */

use super::{simulate_with, SimulationResponse};
use crate::core::config::SimulatorConfig;
use crate::core::errors::ValidationError;
use crate::core::types::positional_id;
use crate::scheduler::{Fcfs, SchedulingAlgorithm};
use crate::validation::{validate, RawProcessRow};
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Form rows plus the outcome of the latest run
///
/// New rows get positional ids ("P1".."Pn"), and every id is regenerated
/// whenever a row is removed. The form never drops below one row.
pub struct SimulationSession {
    config: SimulatorConfig,
    algorithm: Box<dyn SchedulingAlgorithm>,
    rows: Vec<RawProcessRow>,
    response: Option<SimulationResponse>,
    error: Option<String>,
}

impl SimulationSession {
    /// Create a session with a single empty row
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_algorithm(config, Box::new(Fcfs))
    }

    pub fn with_algorithm(config: SimulatorConfig, algorithm: Box<dyn SchedulingAlgorithm>) -> Self {
        Self {
            config,
            algorithm,
            rows: vec![RawProcessRow::new(positional_id(0))],
            response: None,
            error: None,
        }
    }

    /// Create a session pre-filled with `rows`
    ///
    /// Ids are kept as given until the first row removal.
    pub fn with_rows(config: SimulatorConfig, rows: Vec<RawProcessRow>) -> Self {
        let mut session = Self::new(config);
        if !rows.is_empty() {
            session.rows = rows;
        }
        session
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn rows(&self) -> &[RawProcessRow] {
        &self.rows
    }

    /// Latest successful response, if the last run succeeded
    pub fn response(&self) -> Option<&SimulationResponse> {
        self.response.as_ref()
    }

    /// Message of the last failed run
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Append an empty row, returning its index
    ///
    /// The row gets the first positional id from `P{n+1}` upward that no
    /// existing row uses, so ids loaded through `with_rows` are never repeated.
    pub fn add_row(&mut self) -> usize {
        let index = self.rows.len();
        let id = (index..)
            .map(positional_id)
            .find(|candidate| self.rows.iter().all(|row| row.id.trim() != candidate.as_str()))
            .unwrap_or_else(|| positional_id(index));
        self.rows.push(RawProcessRow::new(id));
        index
    }

    /// Remove the row at `index` and renumber the rest
    ///
    /// Refuses to remove the last remaining row.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        self.renumber();
        true
    }

    pub fn set_arrival(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.arrival_time = Some(value.into());
                true
            }
            None => false,
        }
    }

    pub fn set_burst(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.burst_time = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Validate and schedule the current rows
    ///
    /// On failure the previous response is discarded so a stale chart is
    /// never shown next to an error.
    pub fn run(&mut self) -> Result<&SimulationResponse, ValidationError> {
        let trace_id = Uuid::new_v4();
        let span = info_span!(
            "simulation",
            trace_id = %trace_id,
            policy = self.algorithm.name(),
            rows = self.rows.len()
        );
        let _entered = span.enter();

        let snapshot = self.rows.clone();
        let outcome = validate(&snapshot, &self.config)
            .and_then(|processes| simulate_with(self.algorithm.as_ref(), &processes));

        match outcome {
            Ok(response) => {
                info!(
                    processes = response.results.len(),
                    makespan = response.makespan,
                    avg_waiting = response.avg_waiting,
                    avg_turnaround = response.avg_turnaround,
                    "simulation complete"
                );
                self.error = None;
                Ok(self.response.insert(response))
            }
            Err(err) => {
                warn!(error = %err, "simulation rejected");
                self.response = None;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn renumber(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.id = positional_id(index);
        }
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}
