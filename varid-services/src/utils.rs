use std::env;
use std::time::Duration;

use super::consts::{DEFAULT_API_ROOT, DEFAULT_TIMEOUT_SECS, VARIATION_API_ENV, VARIATION_TIMEOUT_ENV};

/// Get default Variation Services API root from environment variable
///
/// # Returns
/// - API root, always ending in `/`
pub fn get_default_api_root() -> String {
    let root = env::var(VARIATION_API_ENV).unwrap_or_else(|_| DEFAULT_API_ROOT.to_string());
    normalize_api_root(&root)
}

/// Get default HTTP timeout from environment variable, falling back to the built-in default
pub fn get_default_timeout() -> Duration {
    let secs = env::var(VARIATION_TIMEOUT_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Make sure relative endpoint paths can be appended to the API root.
pub fn normalize_api_root(root: &str) -> String {
    let trimmed = root.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Percent-encode a piece of variant text for use as one URL path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://api.ncbi.nlm.nih.gov/variation/v0", "https://api.ncbi.nlm.nih.gov/variation/v0/")]
    #[case("https://api.ncbi.nlm.nih.gov/variation/v0/", "https://api.ncbi.nlm.nih.gov/variation/v0/")]
    #[case(" http://localhost:8080 ", "http://localhost:8080/")]
    fn test_normalize_api_root(#[case] root: &str, #[case] expected: &str) {
        assert_eq!(normalize_api_root(root), expected);
    }

    #[rstest]
    #[case("NC_000008.11:19962212:C:G", "NC_000008.11%3A19962212%3AC%3AG")]
    #[case("NC_000007.14:g.8644051C>G", "NC_000007.14%3Ag.8644051C%3EG")]
    #[case("G,T", "G%2CT")]
    fn test_encode_segment(#[case] segment: &str, #[case] expected: &str) {
        assert_eq!(encode_segment(segment), expected);
    }
}
