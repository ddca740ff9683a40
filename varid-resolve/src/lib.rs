//! # Variant identifier equivalence
//!
//! Given an rsID, SPDI, HGVS expression or VCF record, discover every
//! equivalent SPDI, HGVS expression, rsID and VCF row by querying a
//! [`varid_services::VariationService`].
//!
//! - `resolver` - the lookup chains for each input kind
//! - `resolution` - the ordered, duplicate-free results of one resolution

pub mod resolution;
pub mod resolver;

pub use resolution::{AlleleBuckets, Resolution, ResolutionSummary};
pub use resolver::Resolver;
