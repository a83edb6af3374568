//! # courtfee-tariff — Tiered Tariff Schedules
//!
//! The state duty payable on a claim depends on the claim amount through a
//! short ladder of tiers, one ladder per court type:
//!
//! - **Rule** (`rule.rs`): A single tier. Its amount range, the formula kind
//!   (`percentage`, `progressive`, `fixed`) with its statutory parameters,
//!   optional floor and ceiling, and display-only formula text and citation.
//!
//! - **Schedule** (`schedule.rs`): An ordered, validated list of rules for
//!   one court type. Construction rejects gaps, overlaps and malformed
//!   tiers, so lookup over a `TariffSchedule` can only fail if a table was
//!   built around the validator.
//!
//! - **Statutory tables** (`statutory.rs`): The built-in schedules for
//!   general courts (ст. 333.19 НК РФ) and arbitration courts
//!   (ст. 333.21 НК РФ).
//!
//! ## Statutory Literals
//!
//! Progressive tiers carry their `fixed_part` and `excess_over` exactly as
//! printed in the statute. They are never re-derived from lower tiers.
//!
//! ## Crate Policy
//!
//! - Depends only on `courtfee-core` internally.
//! - Fees are never rounded here.

pub mod rule;
pub mod schedule;
pub mod statutory;

pub use rule::{FeeRule, FeeType};
pub use schedule::{load_schedules, BoundaryStep, ScheduleDocument, TariffSchedule, TierMatch};
pub use statutory::{arbitration_schedule, general_schedule, statutory_schedule, statutory_schedules};
