//! # Tiers Subcommand
//!
//! Prints the tariff ladder of one court type.

use anyhow::Result;
use clap::Args;

use courtfee_core::CourtType;
use courtfee_engine::FeeEngine;
use courtfee_tariff::{FeeType, TariffSchedule};

use crate::config::OutputFormat;
use crate::output::{money, percent, print_json};

/// Arguments for the tiers subcommand.
#[derive(Args, Debug)]
pub struct TiersArgs {
    /// Court type: general or arbitration.
    #[arg(long, value_parser = crate::parse_court)]
    pub court: CourtType,
}

/// Execute the tiers subcommand.
pub fn run_tiers(args: &TiersArgs, engine: &FeeEngine, output: OutputFormat) -> Result<u8> {
    let schedule = engine.schedule(args.court)?;
    match output {
        OutputFormat::Json => print_json(schedule)?,
        OutputFormat::Text => print!("{}", render(schedule)),
    }
    Ok(0)
}

/// Render a schedule as text.
pub fn render(schedule: &TariffSchedule) -> String {
    let mut out = format!(
        "{} ({}): {} tiers\n\n",
        schedule.court(),
        schedule.court().title(),
        schedule.rules().len()
    );
    for (index, rule) in schedule.rules().iter().enumerate() {
        let upper = rule
            .max_amount
            .map_or_else(|| "and above".to_string(), |max| format!("to {}", money(max)));
        out.push_str(&format!(
            "{:>2}. from {} {}\n",
            index + 1,
            money(rule.min_amount),
            upper
        ));
        let kind = match rule.fee_type {
            FeeType::Percentage { rate } => format!("percentage {}", percent(rate)),
            FeeType::Progressive { rate, .. } => format!("progressive {}", percent(rate)),
            FeeType::Fixed { amount } => format!("fixed {}", money(amount)),
        };
        out.push_str(&format!("    {kind}: {}\n", rule.formula));
        out.push_str(&format!("    {}\n", rule.legal_basis));
    }
    out
}
