//! Validation utilities for AirSense inputs

use thiserror::Error;

/// Largest forecast horizon the generator accepts (one week of hourly points)
pub const MAX_FORECAST_HORIZON: u32 = 168;

/// Data-validation failures raised by the shared logic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("AQI value must be a finite number")]
    NonFiniteAqi,

    #[error("Forecast horizon must be between 1 and {max} hours, got {got}")]
    InvalidHorizon { got: i64, max: u32 },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown dashboard mode: {0}")]
    UnknownMode(String),

    #[error("Unknown dashboard view: {0}")]
    UnknownView(String),
}

impl ValidationError {
    /// Name of the offending input, for error payloads
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFiniteAqi => "value",
            ValidationError::InvalidHorizon { .. } => "hours",
            ValidationError::UnknownCity(_) => "city",
            ValidationError::UnknownMode(_) => "mode",
            ValidationError::UnknownView(_) => "view",
        }
    }
}

/// Reject NaN and infinities
pub fn validate_aqi(aqi: f64) -> Result<(), ValidationError> {
    if !aqi.is_finite() {
        return Err(ValidationError::NonFiniteAqi);
    }
    Ok(())
}

/// Validate a forecast horizon and narrow it to `u32`
pub fn validate_horizon(hours: i64) -> Result<u32, ValidationError> {
    if hours <= 0 || hours > i64::from(MAX_FORECAST_HORIZON) {
        return Err(ValidationError::InvalidHorizon {
            got: hours,
            max: MAX_FORECAST_HORIZON,
        });
    }
    Ok(hours as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_aqi() {
        assert!(validate_aqi(0.0).is_ok());
        assert!(validate_aqi(-5.0).is_ok());
        assert!(validate_aqi(1e9).is_ok());
        assert_eq!(validate_aqi(f64::NAN), Err(ValidationError::NonFiniteAqi));
        assert_eq!(validate_aqi(f64::INFINITY), Err(ValidationError::NonFiniteAqi));
    }

    #[test]
    fn test_validate_horizon_valid() {
        assert_eq!(validate_horizon(1), Ok(1));
        assert_eq!(validate_horizon(24), Ok(24));
        assert_eq!(validate_horizon(72), Ok(72));
        assert_eq!(validate_horizon(168), Ok(168));
    }

    #[test]
    fn test_validate_horizon_invalid() {
        assert!(validate_horizon(0).is_err());
        assert!(validate_horizon(-3).is_err());
        assert!(validate_horizon(169).is_err());
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(ValidationError::NonFiniteAqi.field(), "value");
        assert_eq!(validate_horizon(0).unwrap_err().field(), "hours");
        assert_eq!(ValidationError::UnknownCity("x".into()).field(), "city");
        assert_eq!(ValidationError::UnknownMode("x".into()).field(), "mode");
        assert_eq!(ValidationError::UnknownView("x".into()).field(), "view");
    }
}
