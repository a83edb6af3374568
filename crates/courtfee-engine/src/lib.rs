//! # courtfee-engine — Court Fee Calculation
//!
//! A pure pipeline over the tariff and exemption tables:
//!
//! ```text
//! CalculationInput ──▶ tier lookup ──▶ base fee ──▶ exemption discount ──▶ breakdown
//! ```
//!
//! - **Engine** (`engine.rs`): `FeeEngine` owns one schedule per court type
//!   and an exemption catalog, and runs the pipeline.
//! - **Input / Result** (`input.rs`, `result.rs`): The request and the
//!   itemized answer.
//! - **Breakdown** (`breakdown.rs`): Display line items and citations,
//!   derived only from the pipeline outputs.
//! - **Statutory engine** (`statutory.rs`): A process-wide engine over the
//!   built-in tables, initialised once, with the free-function entry points
//!   `find_applicable_rule`, `get_available_exemptions` and `calculate`.
//!
//! Every call is independent; nothing is mutated after construction, so one
//! engine can be shared across threads without coordination.

pub mod breakdown;
pub mod engine;
pub mod input;
pub mod result;
pub mod statutory;

pub use engine::FeeEngine;
pub use input::CalculationInput;
pub use result::{BreakdownItem, CalculationResult, LineKind};
pub use statutory::{calculate, find_applicable_rule, get_available_exemptions, statutory_engine};
