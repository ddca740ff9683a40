//! # Core data model for variant identifier normalization
//!
//! Shared types for the `varid` crates:
//!
//! - `models` - SPDI coordinates, VCF rows and their grouping keys, rsID helpers
//! - `detect` - classification of raw input into rsID, SPDI, HGVS or VCF
//! - `errors` - the error type shared by every crate in the workspace

pub mod detect;
pub mod errors;
pub mod models;

pub use detect::{VariantInput, detect};
pub use errors::{Result, VariationError};
pub use models::{
    AlleleKey, MISSING, Spdi, VcfExtra, VcfKey, VcfRow, format_rsid, parse_rsid,
};
