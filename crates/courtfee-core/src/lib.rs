//! # courtfee-core — Foundational Types for the Court Fee Engine
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on: the jurisdiction a claim is filed in, the validated claim
//! amount, exemption identifiers, and the error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Single `CourtType` enum.** One definition, exhaustive `match`
//!    everywhere. Adding a jurisdiction forces every tariff table and
//!    exemption filter to handle it.
//!
//! 2. **Validated claim amounts.** `ClaimAmount` can only hold a finite,
//!    non-negative number. Negative amounts are rejected at the boundary,
//!    never inside the fee pipeline.
//!
//! 3. **Two error families.** `ValidationError` is the caller's fault and is
//!    recoverable; `ConfigurationError` means a tariff or exemption table is
//!    defective. They never collapse into one another.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `courtfee-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod amount;
pub mod court;
pub mod error;
pub mod identity;
pub mod table_file;

pub use amount::ClaimAmount;
pub use court::CourtType;
pub use error::{ConfigurationError, FeeError, LoadError, ValidationError};
pub use identity::ExemptionId;
pub use table_file::{parse_table, read_table, TableFormat};
