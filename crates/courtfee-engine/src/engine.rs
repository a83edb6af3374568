//! # Fee Engine
//!
//! Owns exactly one [`TariffSchedule`] per [`CourtType`] and an
//! [`ExemptionCatalog`], and runs the calculation pipeline over them.
//!
//! ## Failure Order
//!
//! All caller input is checked before any table is consulted: an unknown
//! or inapplicable exemption is reported as a validation error even when
//! the tables would also have failed. A calculation either fully succeeds
//! or returns an error; there are no partial results.

use std::collections::BTreeMap;

use courtfee_core::{ClaimAmount, ConfigurationError, CourtType, FeeError, ValidationError};
use courtfee_exemption::{statutory_catalog, ExemptionCatalog, ExemptionCategory};
use courtfee_tariff::{statutory_schedules, FeeRule, TariffSchedule};

use crate::breakdown::{assemble, AppliedExemption};
use crate::input::CalculationInput;
use crate::result::CalculationResult;

/// Claims below one kopeck report an effective rate of 0; dividing by them
/// overflows to infinity for subnormal amounts.
const SMALLEST_RATED_CLAIM: f64 = 0.01;

/// The court fee calculator.
#[derive(Debug, Clone)]
pub struct FeeEngine {
    schedules: BTreeMap<CourtType, TariffSchedule>,
    catalog: ExemptionCatalog,
}

impl FeeEngine {
    /// Assemble an engine, requiring exactly one schedule per court type.
    pub fn new(
        schedules: Vec<TariffSchedule>,
        catalog: ExemptionCatalog,
    ) -> Result<Self, ConfigurationError> {
        let mut by_court = BTreeMap::new();
        for schedule in schedules {
            let court = schedule.court();
            if by_court.insert(court, schedule).is_some() {
                return Err(ConfigurationError::DuplicateSchedule { court });
            }
        }
        if let Some(court) = CourtType::all().iter().find(|c| !by_court.contains_key(*c)) {
            return Err(ConfigurationError::MissingSchedule { court: *court });
        }
        Ok(Self {
            schedules: by_court,
            catalog,
        })
    }

    /// Engine over the built-in statutory tables.
    pub fn statutory() -> Result<Self, ConfigurationError> {
        Self::new(statutory_schedules()?, statutory_catalog()?)
    }

    /// The schedule for `court`.
    pub fn schedule(&self, court: CourtType) -> Result<&TariffSchedule, ConfigurationError> {
        self.schedules
            .get(&court)
            .ok_or(ConfigurationError::MissingSchedule { court })
    }

    /// Schedules in `CourtType` order.
    pub fn schedules(&self) -> impl Iterator<Item = &TariffSchedule> {
        self.schedules.values()
    }

    /// The exemption catalog.
    pub fn catalog(&self) -> &ExemptionCatalog {
        &self.catalog
    }

    /// The single tier covering `amount` in `court`.
    pub fn find_applicable_rule(
        &self,
        amount: ClaimAmount,
        court: CourtType,
    ) -> Result<&FeeRule, ConfigurationError> {
        self.schedule(court)?.find_rule(amount)
    }

    /// Exemption categories valid in `court`.
    pub fn available_exemptions(&self, court: CourtType) -> Vec<&ExemptionCategory> {
        self.catalog.available_for(court)
    }

    /// Run the full pipeline for one request.
    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, FeeError> {
        let court = input.court_type;
        let amount = input.claim_amount;

        let category = match &input.exemption {
            Some(id) => {
                let category = self.catalog.require(id.as_str())?;
                if !category.applies_to(court) {
                    return Err(ValidationError::ExemptionNotApplicable {
                        exemption: id.to_string(),
                        court,
                    }
                    .into());
                }
                Some(category)
            }
            None => None,
        };

        let tier = self.schedule(court)?.lookup(amount)?;
        let base_fee = tier.rule.fee_for(amount.value());

        let applied = match category {
            Some(category) => Some(AppliedExemption {
                category,
                discount: category.discount_for(court, base_fee)?,
            }),
            None => None,
        };
        let exemption_discount = applied.map_or(0.0, |a| a.discount);
        let final_fee = base_fee - exemption_discount;
        let effective_rate = if amount.value() < SMALLEST_RATED_CLAIM {
            0.0
        } else {
            final_fee / amount.value()
        };

        let breakdown = assemble(tier.rule, applied, base_fee, final_fee);

        tracing::debug!(
            court = %court,
            amount = amount.value(),
            tier = tier.index,
            base_fee,
            exemption_discount,
            final_fee,
            "calculated court fee"
        );

        Ok(CalculationResult {
            court_type: court,
            claim_amount: amount.value(),
            tier_index: tier.index,
            exemption: input.exemption.clone(),
            base_fee,
            exemption_discount,
            final_fee,
            effective_rate,
            breakdown: breakdown.items,
            legal_references: breakdown.legal_references,
        })
    }
}
