//! Input validation shared by every engine entrypoint.
//!
//! Presentation layers usually clamp inputs to slider ranges, but the engine does not rely
//! on that: non-finite values and out-of-domain parameters are rejected here rather than
//! propagating NaN into reports.

use thiserror::Error;

/// Invalid input to an engine function.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be > 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within [0, 1] (got {value})")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
}

impl ParameterError {
    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonFinite { field, .. }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::ProbabilityOutOfRange { field, .. } => field,
        }
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { field, value });
    }
    Ok(value)
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ParameterError::NotPositive { field, value });
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ParameterError::Negative { field, value });
    }
    Ok(value)
}

pub(crate) fn ensure_probability(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = ensure_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ParameterError::ProbabilityOutOfRange { field, value });
    }
    Ok(value)
}
