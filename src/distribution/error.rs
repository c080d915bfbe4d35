//! Sampling error types

use thiserror::Error;

/// Errors raised by the sampler core
///
/// Parameter errors are raised before any engine is touched, so a failed call
/// never consumes entropy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// Parameters fall outside the mathematical domain of the distribution
    #[error("invalid parameter for {distribution}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },

    /// The proactive sampler could not obtain a positive inner normal draw
    #[error("proactive draw produced no positive normal sample after {attempts} attempt(s)")]
    NonPositiveDraw { attempts: u32 },
}

impl SampleError {
    /// Build an `InvalidParameter` error
    pub fn invalid(distribution: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: reason.into(),
        }
    }

    /// Returns true for parameter-domain errors
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Fail unless `value` is a finite real
pub(crate) fn require_finite(
    distribution: &'static str,
    name: &str,
    value: f64,
) -> Result<(), SampleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SampleError::invalid(
            distribution,
            format!("{} must be finite, got {}", name, value),
        ))
    }
}

/// Fail unless `value` is a finite real strictly greater than zero
pub(crate) fn require_positive(
    distribution: &'static str,
    name: &str,
    value: f64,
) -> Result<(), SampleError> {
    require_finite(distribution, name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SampleError::invalid(
            distribution,
            format!("{} must be > 0, got {}", name, value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SampleError::invalid("exponential", "lambda must be > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter for exponential: lambda must be > 0, got 0"
        );
        assert!(err.is_invalid_parameter());

        let err = SampleError::NonPositiveDraw { attempts: 3 };
        assert!(!err.is_invalid_parameter());
        assert!(err.to_string().contains("3 attempt"));
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", "rate", 0.5).is_ok());
        assert!(require_positive("x", "rate", 0.0).is_err());
        assert!(require_positive("x", "rate", -1.0).is_err());
        assert!(require_positive("x", "rate", f64::NAN).is_err());
        assert!(require_positive("x", "rate", f64::INFINITY).is_err());
    }
}
