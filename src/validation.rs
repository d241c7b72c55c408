/*!
 * Process Input Validation
 * Coerces raw form rows into a validated batch
 */

use crate::core::config::SimulatorConfig;
use crate::core::errors::{Field, ValidationError};
use crate::core::limits::{MIN_ARRIVAL_TIME, MIN_BURST_TIME};
use crate::core::types::{ProcessId, Ticks};
use crate::scheduler::ProcessInput;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One form row exactly as entered
///
/// Absent and whitespace-only fields both count as "not present".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProcessRow {
    pub id: ProcessId,
    #[serde(default, deserialize_with = "field_text")]
    pub arrival_time: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub burst_time: Option<String>,
}

impl RawProcessRow {
    pub fn new(id: impl Into<ProcessId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn filled(id: impl Into<ProcessId>, arrival: impl ToString, burst: impl ToString) -> Self {
        Self {
            id: id.into(),
            arrival_time: Some(arrival.to_string()),
            burst_time: Some(burst.to_string()),
        }
    }

    /// Neither numeric field present
    pub fn is_blank(&self) -> bool {
        present(&self.arrival_time).is_none() && present(&self.burst_time).is_none()
    }
}

/// Accept JSON strings, numbers or null for a numeric form field
fn field_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        UInt(u64),
        Float(f64),
        Text(String),
    }

    // Debug keeps the fractional part ("2.0"), so floats stay non-integers
    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Int(n) => n.to_string(),
        Raw::UInt(n) => n.to_string(),
        Raw::Float(n) => format!("{:?}", n),
        Raw::Text(s) => s,
    }))
}

/// Validate a batch of rows
///
/// Rules are checked in row order and the first violation rejects the
/// whole batch. Fully blank rows are skipped.
pub fn validate(
    rows: &[RawProcessRow],
    config: &SimulatorConfig,
) -> ValidationResult<Vec<ProcessInput>> {
    validate_identifiers(rows)?;

    let mut processes = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(process) = validate_row(row, config)? {
            processes.push(process);
        }
    }

    if processes.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    Ok(processes)
}

/// Every row must carry a non-blank id, unique within the batch
fn validate_identifiers(rows: &[RawProcessRow]) -> ValidationResult<()> {
    if let Some(index) = rows.iter().position(|row| row.id.trim().is_empty()) {
        return Err(ValidationError::InvalidIdentifier {
            position: index + 1,
        });
    }

    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let id = row.id.trim();
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateIdentifier { id: id.to_string() });
        }
    }

    Ok(())
}

/// Validate a single row; `Ok(None)` means the row is skipped
fn validate_row(
    row: &RawProcessRow,
    config: &SimulatorConfig,
) -> ValidationResult<Option<ProcessInput>> {
    let id = row.id.trim();

    match (present(&row.arrival_time), present(&row.burst_time)) {
        (None, None) => Ok(None),
        (Some(_), None) | (None, Some(_)) => Err(ValidationError::IncompleteProcess {
            id: id.to_string(),
        }),
        (Some(arrival), Some(burst)) => {
            let arrival_time = parse_field(id, Field::Arrival, arrival, config)?;
            let burst_time = parse_field(id, Field::Burst, burst, config)?;
            Ok(Some(ProcessInput::new(id, arrival_time, burst_time)))
        }
    }
}

/// Parse and range-check one numeric field
fn parse_field(
    id: &str,
    field: Field,
    text: &str,
    config: &SimulatorConfig,
) -> ValidationResult<Ticks> {
    let value = match text.parse::<i64>() {
        Ok(value) => value,
        // Well-formed integer past i64: saturate so range checks classify it
        Err(_) if is_integer_literal(text) => {
            if text.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
        Err(_) => {
            return Err(ValidationError::InvalidNumeric {
                id: id.to_string(),
                field,
                value: text.to_string(),
            })
        }
    };

    let min = match field {
        Field::Arrival => MIN_ARRIVAL_TIME,
        Field::Burst => MIN_BURST_TIME,
    };
    if value < min {
        return Err(ValidationError::OutOfRange {
            id: id.to_string(),
            field,
            value,
        });
    }

    if value > i64::from(config.max_time_unit) {
        return Err(ValidationError::ValueTooLarge {
            id: id.to_string(),
            field,
            value,
            max: config.max_time_unit,
        });
    }

    Ok(value as Ticks)
}

/// Optional sign followed by at least one ASCII digit
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Trimmed field text, or `None` when absent or blank
#[inline]
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
