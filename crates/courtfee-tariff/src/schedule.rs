//! # Tariff Schedules
//!
//! An ordered ladder of [`FeeRule`]s for one court type.
//!
//! ## Invariants
//!
//! Enforced by [`TariffSchedule::new`]; a schedule value that exists has
//! passed all of them.
//!
//! - At least one tier; the first tier starts at 0.
//! - Tiers ascend and are contiguous in whole currency units: each tier
//!   starts strictly above the previous maximum and at most one unit above
//!   it ("до 20 000" followed by "от 20 001").
//! - Exactly the last tier is open-ended.
//! - Rates lie in `[0, 1]`; fees and bounds are finite and non-negative;
//!   floor does not exceed ceiling; a progressive threshold does not exceed
//!   its tier's minimum.
//!
//! ## Lookup
//!
//! Linear scan in ascending order; the first tier whose range covers the
//! amount wins. An amount strictly between one tier's maximum and the next
//! tier's minimum (20 000.50) belongs to the upper tier, since statutory
//! bounds are written in whole units.

use std::path::Path;

use serde::{Deserialize, Serialize};

use courtfee_core::{read_table, ClaimAmount, ConfigurationError, CourtType, FeeError};

use crate::rule::{FeeRule, FeeType};

/// Largest gap between consecutive tiers that lookup bridges.
const WHOLE_UNIT: f64 = 1.0;

/// Raw schedule as stored in a table file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// Court type the schedule applies to.
    pub court: CourtType,
    /// Tiers in ascending order.
    pub rules: Vec<FeeRule>,
}

/// A validated tariff schedule for one court type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffSchedule {
    court: CourtType,
    rules: Vec<FeeRule>,
}

/// The tier selected for an amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMatch<'a> {
    /// Zero-based position of the tier in its schedule.
    pub index: usize,
    /// The matched rule.
    pub rule: &'a FeeRule,
}

impl TariffSchedule {
    /// Validate and build a schedule.
    pub fn new(court: CourtType, rules: Vec<FeeRule>) -> Result<Self, ConfigurationError> {
        if rules.is_empty() {
            return Err(ConfigurationError::EmptySchedule { court });
        }
        let invalid = |index: usize, reason: String| ConfigurationError::InvalidTier {
            court,
            index,
            reason,
        };

        let last = rules.len() - 1;
        for (index, rule) in rules.iter().enumerate() {
            check_rule(rule).map_err(|reason| invalid(index, reason))?;

            if index == 0 && rule.min_amount != 0.0 {
                return Err(invalid(
                    index,
                    format!("first tier must start at 0, starts at {}", rule.min_amount),
                ));
            }
            if index > 0 {
                let Some(previous_max) = rules[index - 1].max_amount else {
                    return Err(invalid(index - 1, "only the last tier may be open-ended".into()));
                };
                if rule.min_amount <= previous_max {
                    return Err(invalid(
                        index,
                        format!(
                            "overlaps previous tier: starts at {} but previous tier ends at {}",
                            rule.min_amount, previous_max
                        ),
                    ));
                }
                if rule.min_amount - previous_max > WHOLE_UNIT {
                    return Err(invalid(
                        index,
                        format!(
                            "gap before tier: previous tier ends at {} but this tier starts at {}",
                            previous_max, rule.min_amount
                        ),
                    ));
                }
            }
            if index == last && !rule.is_open_ended() {
                return Err(invalid(index, "last tier must be open-ended".into()));
            }
        }

        Ok(Self { court, rules })
    }

    /// Validate a raw document.
    pub fn from_document(document: ScheduleDocument) -> Result<Self, ConfigurationError> {
        Self::new(document.court, document.rules)
    }

    /// Court type of the schedule.
    pub fn court(&self) -> CourtType {
        self.court
    }

    /// Tiers in ascending order.
    pub fn rules(&self) -> &[FeeRule] {
        &self.rules
    }

    /// Find the single tier covering `amount`.
    pub fn lookup(&self, amount: ClaimAmount) -> Result<TierMatch<'_>, ConfigurationError> {
        let value = amount.value();
        let mut previous_max: Option<f64> = None;

        for (index, rule) in self.rules.iter().enumerate() {
            let bridged = previous_max
                .is_some_and(|max| value > max && rule.min_amount - max <= WHOLE_UNIT);
            let above_floor = value >= rule.min_amount || bridged;
            let below_ceiling = rule.max_amount.map_or(true, |max| value <= max);

            if above_floor && below_ceiling {
                tracing::trace!(
                    court = %self.court,
                    index,
                    kind = rule.fee_type.kind(),
                    amount = value,
                    "matched tariff tier"
                );
                return Ok(TierMatch { index, rule });
            }
            previous_max = rule.max_amount;
        }

        Err(ConfigurationError::NoMatchingTier {
            court: self.court,
            amount: value,
        })
    }

    /// The rule covering `amount`.
    pub fn find_rule(&self, amount: ClaimAmount) -> Result<&FeeRule, ConfigurationError> {
        self.lookup(amount).map(|m| m.rule)
    }

    /// Base fee for `amount`, before any exemption.
    pub fn base_fee(&self, amount: ClaimAmount) -> Result<f64, ConfigurationError> {
        let rule = self.find_rule(amount)?;
        Ok(rule.fee_for(amount.value()))
    }

    /// Tier hand-overs where the fee drops: the fee at a tier's maximum
    /// exceeds the fee at the next tier's minimum.
    ///
    /// A valid schedule may still contain such steps; they are reported,
    /// not rejected.
    pub fn boundary_steps(&self) -> Vec<BoundaryStep> {
        self.rules
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                let upper_bound = pair[0].max_amount?;
                let fee_at_max = pair[0].fee_for(upper_bound);
                let fee_at_next = pair[1].fee_for(pair[1].min_amount);
                (fee_at_max > fee_at_next).then_some(BoundaryStep {
                    index,
                    upper_bound,
                    fee_at_max,
                    fee_at_next,
                })
            })
            .collect()
    }
}

/// A downward fee step between tier `index` and tier `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryStep {
    /// Lower tier of the pair.
    pub index: usize,
    /// Maximum of the lower tier.
    pub upper_bound: f64,
    /// Fee at `upper_bound`.
    pub fee_at_max: f64,
    /// Fee at the next tier's minimum.
    pub fee_at_next: f64,
}

/// Per-tier checks that do not depend on neighbours.
fn check_rule(rule: &FeeRule) -> Result<(), String> {
    non_negative("min_amount", rule.min_amount)?;
    if let Some(max) = rule.max_amount {
        non_negative("max_amount", max)?;
        if max < rule.min_amount {
            return Err(format!("max_amount {max} is below min_amount {}", rule.min_amount));
        }
    }

    match rule.fee_type {
        FeeType::Percentage { rate } => unit_rate(rate)?,
        FeeType::Progressive {
            fixed_part,
            rate,
            excess_over,
        } => {
            unit_rate(rate)?;
            non_negative("fixed_part", fixed_part)?;
            non_negative("excess_over", excess_over)?;
            if excess_over > rule.min_amount {
                return Err(format!(
                    "excess_over {excess_over} is above min_amount {}",
                    rule.min_amount
                ));
            }
        }
        FeeType::Fixed { amount } => non_negative("fixed amount", amount)?,
    }

    if let Some(floor) = rule.minimum_fee {
        non_negative("minimum_fee", floor)?;
    }
    if let Some(ceiling) = rule.maximum_fee {
        non_negative("maximum_fee", ceiling)?;
    }
    if let (Some(floor), Some(ceiling)) = (rule.minimum_fee, rule.maximum_fee) {
        if floor > ceiling {
            return Err(format!("minimum_fee {floor} exceeds maximum_fee {ceiling}"));
        }
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must be finite and non-negative, got {value}"))
    }
}

fn unit_rate(rate: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(format!("rate must lie in [0, 1], got {rate}"))
    }
}

/// Load and validate every schedule in a YAML or JSON file.
///
/// The file holds a sequence of `{ court, rules }` documents, at most one
/// per court type.
pub fn load_schedules(path: &Path) -> Result<Vec<TariffSchedule>, FeeError> {
    let documents: Vec<ScheduleDocument> = read_table(path)?;
    let mut schedules: Vec<TariffSchedule> = Vec::with_capacity(documents.len());
    for document in documents {
        let schedule = TariffSchedule::from_document(document)?;
        let court = schedule.court();
        if schedules.iter().any(|s| s.court() == court) {
            return Err(ConfigurationError::DuplicateSchedule { court }.into());
        }
        schedules.push(schedule);
    }
    tracing::debug!(path = %path.display(), count = schedules.len(), "loaded tariff schedules");
    Ok(schedules)
}
