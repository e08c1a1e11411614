//! Validation of raw dialog input.
//!
//! Column width and row height dialogs share one rule set; only the label
//! shown to the user differs.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which table dimension a value is being entered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ColumnWidth,
    RowHeight,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::ColumnWidth => f.write_str("column width"),
            Dimension::RowHeight => f.write_str("row height"),
        }
    }
}

/// Outcome of validating one raw input, shaped for dialog consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => ValidationResult::ok(),
            Err(e) => ValidationResult::invalid(&e),
        }
    }
}

/// Parse a raw value as a positive, finite number.
///
/// Rules apply in order: missing or blank, not a number, not positive.
pub fn parse_positive(raw: Option<&str>, dimension: Dimension) -> Result<f64, ValidationError> {
    let trimmed = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::Required(dimension)),
    };

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(dimension))?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber(dimension));
    }

    if value <= 0.0 {
        return Err(ValidationError::NotPositive(dimension));
    }

    Ok(value)
}

/// Validate a raw value for the given dimension
pub fn validate(raw: Option<&str>, dimension: Dimension) -> ValidationResult {
    parse_positive(raw, dimension).into()
}

/// Validate a raw column width (centimeters)
pub fn validate_col_width(raw: Option<&str>) -> ValidationResult {
    validate(raw, Dimension::ColumnWidth)
}

/// Validate a raw row height (centimeters)
pub fn validate_row_height(raw: Option<&str>) -> ValidationResult {
    validate(raw, Dimension::RowHeight)
}
