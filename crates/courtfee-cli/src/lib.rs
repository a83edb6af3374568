//! # courtfee-cli — Court Fee Command-Line Interface
//!
//! Provides the `courtfee` binary.
//!
//! ## Subcommands
//!
//! - `courtfee calculate`: Fee for one claim, with optional exemption.
//! - `courtfee tiers`: The tariff ladder of a court type.
//! - `courtfee exemptions`: Exemption categories, optionally per court.
//! - `courtfee validate`: Check external tariff and exemption files.
//!
//! ```bash
//! courtfee calculate --amount 50000 --court general
//! courtfee calculate --amount 15000 --court general --exemption disabled_1_2 --json
//! courtfee --tariffs tariffs-2025.yaml tiers --court arbitration
//! courtfee validate --tariffs tariffs-2025.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `courtfee-engine`; no fee arithmetic here.
//! - Command output goes to stdout, logs to stderr.

pub mod calculate;
pub mod config;
pub mod exemptions;
pub mod output;
pub mod tiers;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use courtfee_core::{CourtType, ValidationError};
use courtfee_engine::FeeEngine;
use courtfee_exemption::{load_catalog, statutory_catalog};
use courtfee_tariff::{load_schedules, statutory_schedule};

/// Parse a court type argument.
pub fn parse_court(s: &str) -> Result<CourtType, ValidationError> {
    s.parse()
}

/// Build an engine from optional table files, falling back to the
/// statutory tables.
///
/// A tariff file may cover only some court types; the statutory schedule
/// fills in the rest. A court type listed twice in the file is an error.
pub fn build_engine(tariffs: Option<&Path>, exemptions: Option<&Path>) -> Result<FeeEngine> {
    let mut schedules = match tariffs {
        Some(path) => load_schedules(path)
            .with_context(|| format!("failed to load tariff file {}", path.display()))?,
        None => Vec::new(),
    };
    for court in CourtType::all() {
        if !schedules.iter().any(|s| s.court() == *court) {
            schedules.push(statutory_schedule(*court)?);
        }
    }

    let catalog = match exemptions {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load exemption file {}", path.display()))?,
        None => statutory_catalog()?,
    };

    let engine = FeeEngine::new(schedules, catalog)?;
    tracing::debug!(
        custom_tariffs = tariffs.is_some(),
        custom_exemptions = exemptions.is_some(),
        "fee engine ready"
    );
    Ok(engine)
}
