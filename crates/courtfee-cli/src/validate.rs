//! # Validate Subcommand
//!
//! Loads tariff and exemption files through the same validation the engine
//! uses, and reports downward fee steps between tiers as warnings. With no
//! files, the built-in statutory tables are checked.
//!
//! Table files come from the global `--tariffs` and `--exemptions` flags
//! or the config file. Exit code 0 when every table is valid, 2 otherwise.

use std::path::Path;

use anyhow::Result;

use courtfee_core::FeeError;
use courtfee_exemption::{load_catalog, statutory_catalog, ExemptionCatalog};
use courtfee_tariff::{load_schedules, statutory_schedules, TariffSchedule};

/// Outcome of validating one table source.
#[derive(Debug)]
pub struct TableReport {
    /// What was checked.
    pub source: String,
    /// Summary lines for valid tables.
    pub notes: Vec<String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// The failure, if the table is invalid.
    pub error: Option<FeeError>,
}

impl TableReport {
    fn new(source: String) -> Self {
        Self {
            source,
            notes: Vec::new(),
            warnings: Vec::new(),
            error: None,
        }
    }

    /// Whether the table passed.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Execute the validate subcommand.
pub fn run_validate(tariffs: Option<&Path>, exemptions: Option<&Path>) -> Result<u8> {
    let reports = [check_tariffs(tariffs), check_exemptions(exemptions)];

    let mut all_valid = true;
    for report in &reports {
        match &report.error {
            None => println!("OK    {}", report.source),
            Some(e) => {
                all_valid = false;
                println!("FAIL  {}: {e}", report.source);
            }
        }
        for note in &report.notes {
            println!("      {note}");
        }
        for warning in &report.warnings {
            tracing::warn!(source = %report.source, "{warning}");
            println!("      warning: {warning}");
        }
    }

    Ok(if all_valid { 0 } else { 2 })
}

/// Validate a tariff file, or the statutory schedules when `path` is None.
pub fn check_tariffs(path: Option<&Path>) -> TableReport {
    let (source, loaded) = match path {
        Some(p) => (format!("tariffs {}", p.display()), load_schedules(p)),
        None => (
            "tariffs (statutory)".to_string(),
            statutory_schedules().map_err(FeeError::from),
        ),
    };
    let mut report = TableReport::new(source);
    match loaded {
        Ok(schedules) => describe_schedules(&schedules, &mut report),
        Err(e) => report.error = Some(e),
    }
    report
}

/// Validate an exemption file, or the statutory catalog when `path` is None.
pub fn check_exemptions(path: Option<&Path>) -> TableReport {
    let (source, loaded) = match path {
        Some(p) => (format!("exemptions {}", p.display()), load_catalog(p)),
        None => (
            "exemptions (statutory)".to_string(),
            statutory_catalog().map_err(FeeError::from),
        ),
    };
    let mut report = TableReport::new(source);
    match loaded {
        Ok(catalog) => describe_catalog(&catalog, &mut report),
        Err(e) => report.error = Some(e),
    }
    report
}

fn describe_schedules(schedules: &[TariffSchedule], report: &mut TableReport) {
    for schedule in schedules {
        report.notes.push(format!(
            "{} schedule: {} tiers",
            schedule.court(),
            schedule.rules().len()
        ));
        for step in schedule.boundary_steps() {
            report.warnings.push(format!(
                "{} schedule: fee drops from {} to {} after tier {} (at {})",
                schedule.court(),
                step.fee_at_max,
                step.fee_at_next,
                step.index + 1,
                step.upper_bound
            ));
        }
    }
}

fn describe_catalog(catalog: &ExemptionCatalog, report: &mut TableReport) {
    report
        .notes
        .push(format!("{} categories", catalog.categories().len()));
}
