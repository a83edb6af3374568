//! # Fee Rules
//!
//! One tier of a tariff schedule.
//!
//! ```text
//! percentage   fee = amount × rate
//! progressive  fee = fixed_part + (amount − excess_over) × rate
//! fixed        fee = amount of the tier
//! ```
//!
//! The tier's `minimum_fee` and `maximum_fee`, when present, then act as
//! floor and ceiling ("но не менее", "но не более").

use serde::{Deserialize, Serialize};

/// Formula kind of a tier, carrying its statutory parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeeType {
    /// A share of the whole claim amount.
    Percentage {
        /// Rate in `[0, 1]`.
        rate: f64,
    },
    /// A fixed part plus a marginal rate on the excess over a threshold.
    Progressive {
        /// Cumulative fee at the threshold, as printed in the statute.
        fixed_part: f64,
        /// Marginal rate in `[0, 1]`.
        rate: f64,
        /// Statutory threshold the marginal rate applies above.
        excess_over: f64,
    },
    /// A flat fee regardless of the amount within the tier.
    Fixed {
        /// The flat fee.
        amount: f64,
    },
}

impl FeeType {
    /// The snake_case identifier of the kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Percentage { .. } => "percentage",
            Self::Progressive { .. } => "progressive",
            Self::Fixed { .. } => "fixed",
        }
    }
}

/// A single tier of a tariff schedule.
///
/// The range `[min_amount, max_amount]` is inclusive on both ends;
/// `max_amount = None` marks the open-ended top tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRule {
    /// Lowest claim amount of the tier, inclusive.
    pub min_amount: f64,
    /// Highest claim amount of the tier, inclusive. `None` for the top tier.
    #[serde(default)]
    pub max_amount: Option<f64>,
    /// Formula kind and parameters.
    pub fee_type: FeeType,
    /// Floor applied after the formula.
    #[serde(default)]
    pub minimum_fee: Option<f64>,
    /// Ceiling applied after the formula.
    #[serde(default)]
    pub maximum_fee: Option<f64>,
    /// Human-readable formula. Display only.
    pub formula: String,
    /// Legal citation. Display only.
    pub legal_basis: String,
}

impl FeeRule {
    /// Create a rule without floor or ceiling.
    pub fn new(
        min_amount: f64,
        max_amount: Option<f64>,
        fee_type: FeeType,
        formula: impl Into<String>,
        legal_basis: impl Into<String>,
    ) -> Self {
        Self {
            min_amount,
            max_amount,
            fee_type,
            minimum_fee: None,
            maximum_fee: None,
            formula: formula.into(),
            legal_basis: legal_basis.into(),
        }
    }

    /// Set the floor.
    pub fn with_minimum_fee(mut self, fee: f64) -> Self {
        self.minimum_fee = Some(fee);
        self
    }

    /// Set the ceiling.
    pub fn with_maximum_fee(mut self, fee: f64) -> Self {
        self.maximum_fee = Some(fee);
        self
    }

    /// Whether the tier has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        self.max_amount.is_none()
    }

    /// Whether `amount` lies within `[min_amount, max_amount]`.
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min_amount && self.max_amount.map_or(true, |max| amount <= max)
    }

    /// Evaluate the tier's formula at `amount`, then apply floor and ceiling.
    ///
    /// The caller is responsible for having picked the tier that covers
    /// `amount`; this function does not check the range.
    pub fn fee_for(&self, amount: f64) -> f64 {
        let raw = match self.fee_type {
            FeeType::Percentage { rate } => amount * rate,
            FeeType::Progressive {
                fixed_part,
                rate,
                excess_over,
            } => fixed_part + (amount - excess_over) * rate,
            FeeType::Fixed { amount: fee } => fee,
        };
        let floored = self.minimum_fee.map_or(raw, |floor| raw.max(floor));
        self.maximum_fee.map_or(floored, |ceiling| floored.min(ceiling))
    }
}
