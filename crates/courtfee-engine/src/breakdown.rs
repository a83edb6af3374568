//! # Breakdown Assembly
//!
//! Turns the pipeline outputs into display lines. No computation happens
//! here beyond negating the discount.

use courtfee_exemption::{DiscountRule, ExemptionCategory};
use courtfee_tariff::FeeRule;

use crate::result::{BreakdownItem, LineKind};

/// An exemption together with the discount it produced.
#[derive(Debug, Clone, Copy)]
pub struct AppliedExemption<'a> {
    /// The category.
    pub category: &'a ExemptionCategory,
    /// Discount granted, in `[0, base_fee]`.
    pub discount: f64,
}

/// Line items and citations for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    /// Ordered line items.
    pub items: Vec<BreakdownItem>,
    /// De-duplicated citations in first-use order.
    pub legal_references: Vec<String>,
}

/// Assemble the itemization: base fee, exemption (when one was selected),
/// final fee.
pub fn assemble(
    rule: &FeeRule,
    exemption: Option<AppliedExemption<'_>>,
    base_fee: f64,
    final_fee: f64,
) -> Breakdown {
    let mut items = Vec::with_capacity(3);
    let mut legal_references: Vec<String> = Vec::new();
    let mut cite = |basis: &str| {
        if !legal_references.iter().any(|r| r == basis) {
            legal_references.push(basis.to_string());
        }
    };

    items.push(BreakdownItem {
        kind: LineKind::BaseFee,
        description: "Государственная пошлина".to_string(),
        amount: base_fee,
        formula: Some(rule.formula.clone()),
        legal_basis: Some(rule.legal_basis.clone()),
    });
    cite(&rule.legal_basis);

    if let Some(applied) = exemption {
        let category = applied.category;
        items.push(BreakdownItem {
            kind: LineKind::Exemption,
            description: format!("Льгота: {}", category.name),
            amount: -applied.discount,
            formula: Some(discount_formula(&category.discount)),
            legal_basis: Some(category.legal_basis.clone()),
        });
        cite(&category.legal_basis);
    }

    items.push(BreakdownItem {
        kind: LineKind::FinalFee,
        description: "Итого к уплате".to_string(),
        amount: final_fee,
        formula: None,
        legal_basis: None,
    });

    Breakdown {
        items,
        legal_references,
    }
}

fn discount_formula(rule: &DiscountRule) -> String {
    match rule {
        DiscountRule::Exempt => "полное освобождение от уплаты".to_string(),
        DiscountRule::Fixed { amount } => format!("уменьшение пошлины на сумму до {amount} ₽"),
        DiscountRule::Percentage { rate } => format!("уменьшение пошлины на {}%", rate * 100.0),
    }
}
