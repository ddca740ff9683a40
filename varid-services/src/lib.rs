//! # Client for the NCBI Variation Services API
//!
//! - `service` - the [`VariationService`] trait, one method per lookup identifier
//!   resolution needs
//! - `client` - the blocking HTTP implementation
//! - `mock` - an in-memory implementation for tests and offline use
//! - `models` - typed records and payloads returned by the service
//! - `attributes` - read-only projections over a RefSNP record

pub mod attributes;
pub mod client;
pub mod consts;
pub mod mock;
pub mod models;
pub mod service;
pub mod utils;

pub use client::{VariationClient, VariationClientBuilder};
pub use mock::MockVariationService;
pub use models::{RefSnp, RefSnpDocument, VcfFields};
pub use service::VariationService;
