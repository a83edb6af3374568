//! # Calculate Subcommand
//!
//! ```bash
//! courtfee calculate --amount 2000000 --court general --exemption disabled_1_2
//! ```

use anyhow::{Context, Result};
use clap::Args;

use courtfee_core::CourtType;
use courtfee_engine::{CalculationInput, CalculationResult, FeeEngine};

use crate::config::OutputFormat;
use crate::output::{money, percent, print_json};

/// Arguments for the calculate subcommand.
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Claim amount in rubles.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Court type: general or arbitration.
    #[arg(long, value_parser = crate::parse_court)]
    pub court: CourtType,

    /// Exemption category identifier (see `courtfee exemptions`).
    #[arg(long)]
    pub exemption: Option<String>,
}

/// Execute the calculate subcommand.
pub fn run_calculate(args: &CalculateArgs, engine: &FeeEngine, output: OutputFormat) -> Result<u8> {
    let mut input = CalculationInput::new(args.amount, args.court)?;
    if let Some(exemption) = &args.exemption {
        input = input.with_exemption(exemption.as_str());
    }

    let result = engine
        .calculate(&input)
        .with_context(|| format!("cannot calculate fee for claim of {}", args.amount))?;

    match output {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print!("{}", render(&result)),
    }
    Ok(0)
}

/// Render a result as text.
pub fn render(result: &CalculationResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Court:          {} ({})\n",
        result.court_type,
        result.court_type.title()
    ));
    out.push_str(&format!("Claim amount:   {}\n", money(result.claim_amount)));
    out.push_str(&format!("Tariff tier:    {}\n", result.tier_index + 1));
    out.push('\n');

    for item in &result.breakdown {
        out.push_str(&format!("  {:<40} {:>18}\n", item.description, money(item.amount)));
        if let Some(formula) = &item.formula {
            out.push_str(&format!("      {formula}\n"));
        }
    }

    out.push('\n');
    if result.is_fully_exempt() {
        out.push_str("Final fee:      0.00 ₽ (fully exempt)\n");
    } else {
        out.push_str(&format!("Final fee:      {}\n", money(result.final_fee)));
    }
    out.push_str(&format!("Effective rate: {}\n", percent(result.effective_rate)));

    if !result.legal_references.is_empty() {
        out.push_str("\nLegal basis:\n");
        for reference in &result.legal_references {
            out.push_str(&format!("  - {reference}\n"));
        }
    }
    out
}
