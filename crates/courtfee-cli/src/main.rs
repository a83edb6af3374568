//! # courtfee CLI entry point
//!
//! Parses command-line arguments, installs logging, and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use courtfee_cli::build_engine;
use courtfee_cli::calculate::{run_calculate, CalculateArgs};
use courtfee_cli::config::{CliConfig, Settings};
use courtfee_cli::exemptions::{run_exemptions, ExemptionsArgs};
use courtfee_cli::tiers::{run_tiers, TiersArgs};
use courtfee_cli::validate::run_validate;

/// Court fee calculator.
///
/// Computes the state duty on a claim in general or arbitration courts,
/// applies statutory exemptions, and itemizes the result with its legal
/// basis.
#[derive(Parser, Debug)]
#[command(name = "courtfee", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tariff table file overriding the statutory schedules.
    #[arg(long, global = true)]
    tariffs: Option<PathBuf>,

    /// Exemption table file replacing the statutory catalog.
    #[arg(long, global = true)]
    exemptions: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the fee for a claim.
    Calculate(CalculateArgs),

    /// Show the tariff tiers of a court type.
    Tiers(TiersArgs),

    /// List exemption categories.
    Exemptions(ExemptionsArgs),

    /// Validate tariff and exemption tables (statutory ones when no files
    /// are given).
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("courtfee CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = cli.config.as_deref().map(CliConfig::load).transpose()?;
    let settings = Settings::resolve(config, cli.tariffs, cli.exemptions, cli.json);
    tracing::debug!(?settings, "resolved settings");

    let engine = || build_engine(settings.tariffs.as_deref(), settings.exemptions.as_deref());
    let output = settings.output;

    match cli.command {
        Commands::Calculate(args) => run_calculate(&args, &engine()?, output),
        Commands::Tiers(args) => run_tiers(&args, &engine()?, output),
        Commands::Exemptions(args) => run_exemptions(&args, &engine()?, output),
        Commands::Validate => {
            run_validate(settings.tariffs.as_deref(), settings.exemptions.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtfee_core::CourtType;

    #[test]
    fn cli_parse_calculate() {
        let cli = Cli::try_parse_from([
            "courtfee",
            "calculate",
            "--amount",
            "50000",
            "--court",
            "general",
        ])
        .unwrap();
        if let Commands::Calculate(args) = cli.command {
            assert_eq!(args.amount, 50_000.0);
            assert_eq!(args.court, CourtType::General);
            assert!(args.exemption.is_none());
        } else {
            panic!("expected calculate");
        }
    }

    #[test]
    fn cli_parse_calculate_with_exemption_and_json() {
        let cli = Cli::try_parse_from([
            "courtfee",
            "calculate",
            "--amount",
            "15000",
            "--court",
            "arbitration",
            "--exemption",
            "veterans",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        if let Commands::Calculate(args) = cli.command {
            assert_eq!(args.court, CourtType::Arbitration);
            assert_eq!(args.exemption.as_deref(), Some("veterans"));
        }
    }

    #[test]
    fn cli_parse_rejects_unknown_court() {
        let err = Cli::try_parse_from([
            "courtfee", "calculate", "--amount", "1", "--court", "maritime",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn cli_parse_negative_amount_reaches_engine() {
        let cli = Cli::try_parse_from([
            "courtfee", "calculate", "--amount", "-10", "--court", "general",
        ])
        .unwrap();
        if let Commands::Calculate(args) = cli.command {
            assert_eq!(args.amount, -10.0);
        }
    }

    #[test]
    fn cli_parse_exemptions_optional_court() {
        let cli = Cli::try_parse_from(["courtfee", "exemptions"]).unwrap();
        if let Commands::Exemptions(args) = cli.command {
            assert!(args.court.is_none());
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "courtfee",
            "tiers",
            "--court",
            "general",
            "-vv",
            "--tariffs",
            "t.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.tariffs, Some(PathBuf::from("t.yaml")));
    }

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["courtfee", "validate", "--exemptions", "e.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate));
        assert_eq!(cli.exemptions, Some(PathBuf::from("e.json")));
        assert!(cli.tariffs.is_none());
    }
}
