//! Constants for the variation service client.
//!
//! This module defines environment variable names, the default API location,
//! endpoint path segments and batch settings.

// Environment variable names

/// Environment variable name for setting the Variation Services API root.
///
/// When set, this overrides the default API root
/// (`https://api.ncbi.nlm.nih.gov/variation/v0/`).
///
/// # Example
///
/// ```bash
/// export VARIATION_API=https://mirror.example.org/variation/v0/
/// ```
pub const VARIATION_API_ENV: &str = "VARIATION_API";

/// Environment variable name for the HTTP timeout, in whole seconds.
pub const VARIATION_TIMEOUT_ENV: &str = "VARIATION_TIMEOUT_SECS";

// Defaults

/// Default Variation Services API root.
pub const DEFAULT_API_ROOT: &str = "https://api.ncbi.nlm.nih.gov/variation/v0/";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Assembly used by the batch VCF annotation endpoint unless told otherwise (GRCh37.p13).
pub const DEFAULT_ASSEMBLY: &str = "GCF_000001405.25";

/// Number of VCF data rows posted per batch annotation request.
pub const ANNOTATION_BATCH_SIZE: usize = 1000;

// Endpoint path segments

pub const REFSNP_PATH: &str = "beta/refsnp";
pub const SPDI_PATH: &str = "spdi";
pub const HGVS_PATH: &str = "hgvs";
pub const VCF_PATH: &str = "vcf";
pub const VCF_ANNOTATION_PATH: &str = "vcf/file/set_rsids";

pub const CONTEXTUAL: &str = "contextual";
pub const CONTEXTUALS: &str = "contextuals";
pub const CANONICAL_REPRESENTATIVE: &str = "canonical_representative";
pub const VCF_FIELDS: &str = "vcf_fields";
pub const TO_HGVS: &str = "hgvs";
pub const RSIDS: &str = "rsids";
