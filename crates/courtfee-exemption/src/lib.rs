//! # courtfee-exemption — Statutory Fee Exemptions
//!
//! Some claimants pay a reduced state duty or none at all:
//!
//! - **Category** (`category.rs`): An eligibility category with its
//!   discount rule (`fixed`, `percentage`, `exempt`), the court types it is
//!   valid in, and its legal citation.
//!
//! - **Catalog** (`catalog.rs`): A validated set of categories with unique
//!   identifiers, filtered per court type.
//!
//! - **Statutory catalog** (`statutory.rs`): The built-in categories from
//!   ст. 333.36 and ст. 333.37 НК РФ.
//!
//! ## Discount Clamping
//!
//! A discount never exceeds the base fee, so the final fee is never
//! negative.
//!
//! ## Crate Policy
//!
//! - Depends only on `courtfee-core` internally.
//! - Applying a category outside its courts is a validation error, never a
//!   silent no-op.

pub mod catalog;
pub mod category;
pub mod statutory;

pub use catalog::{load_catalog, ExemptionCatalog};
pub use category::{DiscountRule, ExemptionCategory};
pub use statutory::statutory_catalog;
