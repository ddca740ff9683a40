//! dbSNP reference SNP cluster identifiers.

use crate::errors::VariationError;

/// Parse an rsID with or without its `rs` prefix, e.g. `rs328` or `328`.
///
/// Zero and leading zeros are rejected.
pub fn parse_rsid(rsid: &str) -> Result<u64, VariationError> {
    let digits = rsid.strip_prefix("rs").unwrap_or(rsid);
    let valid = digits.starts_with(|c: char| ('1'..='9').contains(&c))
        && digits.bytes().all(|b| b.is_ascii_digit());

    if !valid {
        return Err(VariationError::Format(rsid.to_string()));
    }

    digits
        .parse()
        .map_err(|_| VariationError::Format(rsid.to_string()))
}

/// Format a numeric rsID with its `rs` prefix.
pub fn format_rsid(rsid: u64) -> String {
    format!("rs{}", rsid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rs328", 328)]
    #[case("328", 328)]
    #[case("rs121913529", 121913529)]
    fn test_parse_rsid(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_rsid(input).unwrap(), expected);
    }

    #[rstest]
    #[case("rs0328")]
    #[case("0")]
    #[case("rs")]
    #[case("RS328")]
    #[case("rs32a8")]
    #[case("99999999999999999999999")]
    fn test_parse_rsid_rejects(#[case] input: &str) {
        assert!(parse_rsid(input).unwrap_err().is_format());
    }

    #[test]
    fn test_format_rsid() {
        assert_eq!(format_rsid(328), "rs328");
    }
}
