//! # Calculation Result
//!
//! A fresh value per call. Nothing here is rounded.

use serde::{Deserialize, Serialize};

use courtfee_core::{CourtType, ExemptionId};

/// Role of a breakdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Fee from the tariff tier.
    BaseFee,
    /// Reduction granted by an exemption. Amount is negative.
    Exemption,
    /// Amount payable.
    FinalFee,
}

/// One line of the itemization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Role of the line.
    pub kind: LineKind,
    /// Display label.
    pub description: String,
    /// Signed amount.
    pub amount: f64,
    /// Formula text, when the line comes from a rule.
    pub formula: Option<String>,
    /// Legal citation, when the line comes from a rule.
    pub legal_basis: Option<String>,
}

/// Outcome of a fee calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Jurisdiction of the calculation.
    pub court_type: CourtType,
    /// Claim amount the fee was computed for.
    pub claim_amount: f64,
    /// Zero-based index of the matched tariff tier.
    pub tier_index: usize,
    /// Exemption category applied, if any.
    pub exemption: Option<ExemptionId>,
    /// Fee before exemptions.
    pub base_fee: f64,
    /// Reduction granted by the exemption, `0` without one.
    pub exemption_discount: f64,
    /// `base_fee − exemption_discount`; never negative.
    pub final_fee: f64,
    /// `final_fee / claim_amount`, or `0` for claims below one kopeck.
    pub effective_rate: f64,
    /// Ordered line items.
    pub breakdown: Vec<BreakdownItem>,
    /// Citations used, de-duplicated, in first-use order.
    pub legal_references: Vec<String>,
}

impl CalculationResult {
    /// Whether the claimant pays nothing.
    pub fn is_fully_exempt(&self) -> bool {
        self.final_fee == 0.0
    }
}
