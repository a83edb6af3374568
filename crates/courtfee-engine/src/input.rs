//! # Calculation Input

use serde::{Deserialize, Serialize};

use courtfee_core::{ClaimAmount, CourtType, ExemptionId, ValidationError};

/// A fee calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Claim amount, already validated as finite and non-negative.
    pub claim_amount: ClaimAmount,
    /// Jurisdiction the claim is filed in.
    pub court_type: CourtType,
    /// Optional exemption category.
    #[serde(default)]
    pub exemption: Option<ExemptionId>,
}

impl CalculationInput {
    /// Build a request without exemption, validating the amount.
    pub fn new(claim_amount: f64, court_type: CourtType) -> Result<Self, ValidationError> {
        Ok(Self {
            claim_amount: ClaimAmount::new(claim_amount)?,
            court_type,
            exemption: None,
        })
    }

    /// Attach an exemption category.
    pub fn with_exemption(mut self, exemption: impl Into<ExemptionId>) -> Self {
        self.exemption = Some(exemption.into());
        self
    }
}
