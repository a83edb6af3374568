//! # Statutory Engine
//!
//! A process-wide [`FeeEngine`] over the built-in tables, built on first
//! use and never mutated. The free functions here are the in-process
//! contract consumed by calculator front ends.

use std::sync::OnceLock;

use courtfee_core::{ClaimAmount, ConfigurationError, CourtType, FeeError};
use courtfee_exemption::ExemptionCategory;
use courtfee_tariff::FeeRule;

use crate::engine::FeeEngine;
use crate::input::CalculationInput;
use crate::result::CalculationResult;

static STATUTORY: OnceLock<Result<FeeEngine, ConfigurationError>> = OnceLock::new();

/// The shared engine over the built-in statutory tables.
pub fn statutory_engine() -> Result<&'static FeeEngine, ConfigurationError> {
    STATUTORY
        .get_or_init(|| {
            let engine = FeeEngine::statutory();
            if let Err(e) = &engine {
                tracing::error!(error = %e, "statutory tables failed validation");
            }
            engine
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// The statutory tier covering `amount` in `court_type`.
pub fn find_applicable_rule(
    amount: f64,
    court_type: CourtType,
) -> Result<&'static FeeRule, FeeError> {
    let amount = ClaimAmount::new(amount)?;
    Ok(statutory_engine()?.find_applicable_rule(amount, court_type)?)
}

/// Statutory exemption categories valid in `court_type`.
pub fn get_available_exemptions(
    court_type: CourtType,
) -> Result<Vec<&'static ExemptionCategory>, FeeError> {
    Ok(statutory_engine()?.available_exemptions(court_type))
}

/// Calculate the fee for `input` under the statutory tables.
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, FeeError> {
    statutory_engine()?.calculate(input)
}
