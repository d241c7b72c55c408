/*!
 * Scheduler Types
 * Value types flowing in and out of a scheduling run
 */

use crate::core::limits::IDLE_LABEL;
use crate::core::types::{ProcessId, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One validated process descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInput {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl ProcessInput {
    pub fn new(id: impl Into<ProcessId>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// Occupant of a single time unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimelineUnit {
    /// Nothing ready to run
    Idle,
    /// Process running during this unit
    Process(ProcessId),
}

impl TimelineUnit {
    #[inline(always)]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Display label ("IDLE" or the process id)
    #[inline]
    pub fn label(&self) -> &str {
        match self {
            Self::Idle => IDLE_LABEL,
            Self::Process(id) => id,
        }
    }

    /// Parse from a label; "IDLE" is reserved for the sentinel
    pub fn from_label(label: &str) -> Self {
        if label == IDLE_LABEL {
            Self::Idle
        } else {
            Self::Process(label.to_string())
        }
    }
}

impl fmt::Display for TimelineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TimelineUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TimelineUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}

/// Outcome of one process in a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

/// Full output of a scheduling run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// One entry per time unit from 0 to the makespan
    pub timeline: Vec<TimelineUnit>,
    /// Per-process outcomes in execution order
    pub results: Vec<ScheduleResult>,
}

impl Schedule {
    /// Time at which the last process completes
    #[inline]
    pub fn makespan(&self) -> Ticks {
        self.timeline.len() as Ticks
    }
}
