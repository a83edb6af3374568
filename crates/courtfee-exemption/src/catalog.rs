//! # Exemption Catalog
//!
//! A validated, ordered collection of [`ExemptionCategory`] values.
//!
//! ## Invariants
//!
//! - Identifiers are unique and non-empty.
//! - Every category applies to at least one court type.
//! - `fixed` amounts are finite and non-negative; `percentage` rates lie in
//!   `[0, 1]`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use courtfee_core::{read_table, ConfigurationError, CourtType, FeeError, ValidationError};

use crate::category::{DiscountRule, ExemptionCategory};

/// A validated exemption catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExemptionCatalog {
    categories: Vec<ExemptionCategory>,
}

impl ExemptionCatalog {
    /// Validate and build a catalog. Order is preserved.
    pub fn new(categories: Vec<ExemptionCategory>) -> Result<Self, ConfigurationError> {
        let mut seen = BTreeSet::new();
        for category in &categories {
            let invalid = |reason: String| ConfigurationError::InvalidExemption {
                id: category.id.to_string(),
                reason,
            };
            if category.id.as_str().is_empty() {
                return Err(invalid("identifier is empty".into()));
            }
            if !seen.insert(category.id.clone()) {
                return Err(invalid("duplicate identifier".into()));
            }
            if category.applicable_courts.is_empty() {
                return Err(invalid("applies to no court type".into()));
            }
            match category.discount {
                DiscountRule::Fixed { amount } if !(amount.is_finite() && amount >= 0.0) => {
                    return Err(invalid(format!(
                        "fixed discount must be finite and non-negative, got {amount}"
                    )));
                }
                DiscountRule::Percentage { rate } if !(0.0..=1.0).contains(&rate) => {
                    return Err(invalid(format!(
                        "percentage discount must lie in [0, 1], got {rate}"
                    )));
                }
                _ => {}
            }
        }
        Ok(Self { categories })
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[ExemptionCategory] {
        &self.categories
    }

    /// Look up a category by identifier.
    pub fn get(&self, id: &str) -> Option<&ExemptionCategory> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Look up a category, failing with a validation error if absent.
    pub fn require(&self, id: &str) -> Result<&ExemptionCategory, ValidationError> {
        self.get(id)
            .ok_or_else(|| ValidationError::UnknownExemption(id.to_string()))
    }

    /// Categories valid in `court`, in catalog order.
    pub fn available_for(&self, court: CourtType) -> Vec<&ExemptionCategory> {
        self.categories
            .iter()
            .filter(|c| c.applies_to(court))
            .collect()
    }
}

/// Load and validate a catalog from a YAML or JSON file holding a sequence
/// of categories.
pub fn load_catalog(path: &Path) -> Result<ExemptionCatalog, FeeError> {
    let categories: Vec<ExemptionCategory> = read_table(path)?;
    let catalog = ExemptionCatalog::new(categories)?;
    tracing::debug!(
        path = %path.display(),
        count = catalog.categories().len(),
        "loaded exemption catalog"
    );
    Ok(catalog)
}
