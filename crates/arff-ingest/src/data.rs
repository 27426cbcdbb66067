//! Data section parsing: one numeric row per line.

use thiserror::Error;

/// A data line that does not form a numeric row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("'{token}' is not a number")]
    NotANumber { token: String },

    #[error("'{token}' is not a finite number")]
    NonFinite { token: String },

    #[error("expected {expected} values, found {found}")]
    RowWidth { expected: usize, found: usize },
}

/// Parses a single value. Non-numeric and non-finite tokens are rejected.
pub fn parse_value(token: &str) -> Result<f64, DataError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(DataError::NonFinite {
            token: token.to_string(),
        }),
        Err(_) => Err(DataError::NotANumber {
            token: token.to_string(),
        }),
    }
}

/// Converts every token of a data line to `f64`, keeping column order.
pub fn parse_row(tokens: &[&str]) -> Result<Vec<f64>, DataError> {
    tokens.iter().map(|token| parse_value(token)).collect()
}
