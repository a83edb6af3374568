//! # Claim Amount
//!
//! The monetary value of a claim (цена иска), in whole or fractional
//! currency units. Construction rejects negative and non-finite values,
//! so the fee pipeline never has to re-check them.
//!
//! Amounts are not rounded here or anywhere in the engine; rounding is a
//! presentation concern.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A finite, non-negative claim amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ClaimAmount(f64);

impl ClaimAmount {
    /// Validate and wrap an amount.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value >= 0.0 {
            // Normalise -0.0 so it never leaks into divisions or output.
            Ok(Self(value + 0.0))
        } else {
            Err(ValidationError::InvalidClaimAmount(value))
        }
    }

    /// The inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ClaimAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClaimAmount> for f64 {
    fn from(amount: ClaimAmount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for ClaimAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(ClaimAmount::new(0.0).unwrap().value(), 0.0);
        assert_eq!(ClaimAmount::new(15_000.0).unwrap().value(), 15_000.0);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let amount = ClaimAmount::new(-0.0).unwrap();
        assert!(amount.value().is_sign_positive());
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            ClaimAmount::new(-1.0),
            Err(ValidationError::InvalidClaimAmount(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ClaimAmount::new(f64::NAN).is_err());
        assert!(ClaimAmount::new(f64::INFINITY).is_err());
        assert!(ClaimAmount::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: ClaimAmount = serde_json::from_str("50000").unwrap();
        assert_eq!(ok.value(), 50_000.0);
        assert!(serde_json::from_str::<ClaimAmount>("-10").is_err());
    }
}
