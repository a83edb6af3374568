//! # Exemptions Subcommand
//!
//! Lists exemption categories, all of them or those valid in one court.

use anyhow::Result;
use clap::Args;

use courtfee_core::CourtType;
use courtfee_engine::FeeEngine;
use courtfee_exemption::{DiscountRule, ExemptionCategory};

use crate::config::OutputFormat;
use crate::output::{money, percent, print_json};

/// Arguments for the exemptions subcommand.
#[derive(Args, Debug)]
pub struct ExemptionsArgs {
    /// Only categories valid in this court type.
    #[arg(long, value_parser = crate::parse_court)]
    pub court: Option<CourtType>,
}

/// Execute the exemptions subcommand.
pub fn run_exemptions(
    args: &ExemptionsArgs,
    engine: &FeeEngine,
    output: OutputFormat,
) -> Result<u8> {
    let categories: Vec<&ExemptionCategory> = match args.court {
        Some(court) => engine.available_exemptions(court),
        None => engine.catalog().categories().iter().collect(),
    };
    match output {
        OutputFormat::Json => print_json(&categories)?,
        OutputFormat::Text => print!("{}", render(&categories)),
    }
    Ok(0)
}

/// Render categories as text.
pub fn render(categories: &[&ExemptionCategory]) -> String {
    if categories.is_empty() {
        return "No exemption categories.\n".to_string();
    }
    let mut out = String::new();
    for category in categories {
        let discount = match category.discount {
            DiscountRule::Exempt => "full exemption".to_string(),
            DiscountRule::Fixed { amount } => format!("up to {}", money(amount)),
            DiscountRule::Percentage { rate } => percent(rate),
        };
        let courts = category
            .applicable_courts
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{:<22} {}\n", category.id.as_str(), category.name));
        out.push_str(&format!("{:<22} discount: {discount}; courts: {courts}\n", ""));
        out.push_str(&format!("{:<22} {}\n", "", category.legal_basis));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_arbitration_categories() {
        let engine = FeeEngine::statutory().unwrap();
        let text = render(&engine.available_exemptions(CourtType::Arbitration));
        assert!(text.contains("disabled_1_2"));
        assert!(text.contains("veterans"));
        assert!(!text.contains("pensioners"));
        assert!(text.contains("up to 25 000.00 ₽"));
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(&[]), "No exemption categories.\n");
    }
}
