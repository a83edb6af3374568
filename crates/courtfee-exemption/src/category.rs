//! # Exemption Categories
//!
//! ```text
//! exempt      discount = base_fee
//! fixed       discount = min(amount, base_fee)
//! percentage  discount = min(base_fee × rate, base_fee)
//! ```

use serde::{Deserialize, Serialize};

use courtfee_core::{CourtType, ExemptionId, ValidationError};

/// How a category reduces the base fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountRule {
    /// Subtract a fixed amount, at most the whole fee.
    Fixed {
        /// Amount subtracted.
        amount: f64,
    },
    /// Subtract a share of the fee.
    ///
    /// No statutory category uses this today.
    Percentage {
        /// Share in `[0, 1]`.
        rate: f64,
    },
    /// Waive the fee entirely.
    Exempt,
}

impl DiscountRule {
    /// The snake_case identifier of the kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Percentage { .. } => "percentage",
            Self::Exempt => "exempt",
        }
    }

    /// Discount on `base_fee`, clamped to `[0, base_fee]`.
    pub fn discount_on(&self, base_fee: f64) -> f64 {
        let raw = match *self {
            Self::Fixed { amount } => amount,
            Self::Percentage { rate } => base_fee * rate,
            Self::Exempt => base_fee,
        };
        raw.clamp(0.0, base_fee.max(0.0))
    }
}

/// A statutory eligibility category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExemptionCategory {
    /// Stable identifier.
    pub id: ExemptionId,
    /// Display name.
    pub name: String,
    /// Who qualifies.
    pub description: String,
    /// Discount rule.
    pub discount: DiscountRule,
    /// Court types the category is valid in.
    pub applicable_courts: Vec<CourtType>,
    /// Legal citation.
    pub legal_basis: String,
}

impl ExemptionCategory {
    /// Whether the category may be used for a calculation in `court`.
    pub fn applies_to(&self, court: CourtType) -> bool {
        self.applicable_courts.contains(&court)
    }

    /// Discount this category grants on `base_fee` in `court`.
    pub fn discount_for(&self, court: CourtType, base_fee: f64) -> Result<f64, ValidationError> {
        if !self.applies_to(court) {
            return Err(ValidationError::ExemptionNotApplicable {
                exemption: self.id.to_string(),
                court,
            });
        }
        let discount = self.discount.discount_on(base_fee);
        tracing::trace!(
            exemption = %self.id,
            kind = self.discount.kind(),
            base_fee,
            discount,
            "applied exemption"
        );
        Ok(discount)
    }
}
