//! Error types for rating calculations
//!
//! Coefficient validation failures are reported through [`RatingError`] so
//! callers can match on them; configuration and command-line code uses the
//! anyhow-based [`Result`] alias.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Errors raised while computing or configuring rating updates
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("'{field}' must be in range [0;1], got '{value}'")]
    InvalidCoefficient { field: &'static str, value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    /// Name of the offending coefficient, if this is a coefficient error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RatingError::InvalidCoefficient { field, .. } => Some(*field),
            RatingError::ConfigurationError { .. } => None,
        }
    }
}
