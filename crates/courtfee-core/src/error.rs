//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! ## Design
//!
//! - Validation errors describe bad caller input and are safe to surface
//!   next to a form field.
//! - Configuration errors describe a defective tariff or exemption table.
//!   They name the table and the offending entry.
//! - Load errors describe a table file that could not be read or parsed.

use thiserror::Error;

use crate::court::CourtType;

/// Top-level error type for the court fee engine.
#[derive(Error, Debug)]
pub enum FeeError {
    /// Caller input was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A tariff or exemption table violates its invariants.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An external table file could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

impl FeeError {
    /// Whether the error was caused by caller input rather than by data.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the error indicates a defective table.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Recoverable input errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Claim amount is negative, NaN or infinite.
    #[error("claim amount must be a finite non-negative number, got {0}")]
    InvalidClaimAmount(f64),

    /// The exemption does not list the calculation's court type.
    #[error("exemption {exemption} is not applicable to {court} courts")]
    ExemptionNotApplicable {
        /// Exemption category identifier.
        exemption: String,
        /// Court type of the calculation.
        court: CourtType,
    },

    /// No exemption category with this identifier exists.
    #[error("unknown exemption category: {0:?}")]
    UnknownExemption(String),

    /// Court type string did not parse.
    #[error("unknown court type: {0:?}")]
    UnknownCourtType(String),
}

/// Table defects. Never caused by caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Lookup found no tier for a valid amount.
    #[error("no tariff tier covers amount {amount} in the {court} schedule")]
    NoMatchingTier {
        /// Schedule that was searched.
        court: CourtType,
        /// Amount that fell through.
        amount: f64,
    },

    /// A schedule was built with no tiers.
    #[error("{court} schedule has no tiers")]
    EmptySchedule {
        /// The empty schedule.
        court: CourtType,
    },

    /// An engine was assembled without a schedule for a court type.
    #[error("no tariff schedule for {court} courts")]
    MissingSchedule {
        /// Court type left uncovered.
        court: CourtType,
    },

    /// An engine was assembled with two schedules for one court type.
    #[error("duplicate tariff schedule for {court} courts")]
    DuplicateSchedule {
        /// Court type supplied twice.
        court: CourtType,
    },

    /// A tier violates a schedule invariant.
    #[error("{court} schedule tier {index}: {reason}")]
    InvalidTier {
        /// Schedule holding the tier.
        court: CourtType,
        /// Zero-based tier position.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// An exemption catalog entry violates a catalog invariant.
    #[error("exemption {id:?}: {reason}")]
    InvalidExemption {
        /// Offending category identifier.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Failure reading an external table file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON parse failure.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse failure.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported table format {0:?}; expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}
