//! Classification of raw input into one of the four variant representations.
//!
//! rsIDs are checked first. The remaining shapes (SPDI, HGVS, VCF line) are
//! each tested as a full match and exactly one of them must apply; an input
//! matching none, or more than one, is a format error.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::VariationError;
use crate::models::{Spdi, VcfRow, parse_rsid};

static RSID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:rs)?[1-9][0-9]*$").expect("valid rsID pattern"));

static SPDI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]+:[^:]+:[^:]+:[^:]+$").expect("valid SPDI pattern"));

static HGVS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]+:[gcmnrp]\.[^:]+$").expect("valid HGVS pattern"));

// CHROM, POS, ID and REF non-empty; ALT non-empty and not starting with `t`.
static VCF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^\t]+\t){4}[^t\t][^\t]*(?:\t.*)?$").expect("valid VCF pattern")
});

/// A classified variant input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantInput {
    RsId(u64),
    Spdi(Spdi),
    Hgvs(String),
    Vcf(VcfRow),
}

impl VariantInput {
    pub fn kind(&self) -> &'static str {
        match self {
            VariantInput::RsId(_) => "rsid",
            VariantInput::Spdi(_) => "spdi",
            VariantInput::Hgvs(_) => "hgvs",
            VariantInput::Vcf(_) => "vcf",
        }
    }
}

impl fmt::Display for VariantInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantInput::RsId(rsid) => write!(f, "rs{}", rsid),
            VariantInput::Spdi(spdi) => write!(f, "{}", spdi),
            VariantInput::Hgvs(hgvs) => write!(f, "{}", hgvs),
            VariantInput::Vcf(row) => write!(f, "{}", row),
        }
    }
}

/// Classify a raw input string.
///
/// # Examples
///
/// ```
/// use varid_core::detect::{detect, VariantInput};
///
/// assert_eq!(detect("rs328").unwrap(), VariantInput::RsId(328));
/// assert!(detect("NC_000008.11:19956017:1.G").unwrap_err().is_format());
/// ```
pub fn detect(input: &str) -> Result<VariantInput, VariationError> {
    if RSID_RE.is_match(input) {
        return parse_rsid(input).map(VariantInput::RsId);
    }

    let is_spdi = SPDI_RE.is_match(input);
    let is_hgvs = HGVS_RE.is_match(input);
    let is_vcf = VCF_RE.is_match(input);

    match (is_spdi, is_hgvs, is_vcf) {
        (true, false, false) => input.parse::<Spdi>().map(VariantInput::Spdi),
        (false, true, false) => Ok(VariantInput::Hgvs(input.to_string())),
        (false, false, true) => VcfRow::parse_line(input).map(VariantInput::Vcf),
        _ => Err(VariationError::Format(input.to_string())),
    }
}

impl FromStr for VariantInput {
    type Err = VariationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        detect(s)
    }
}

impl TryFrom<u64> for VariantInput {
    type Error = VariationError;

    fn try_from(rsid: u64) -> Result<Self, Self::Error> {
        if rsid == 0 {
            return Err(VariationError::Format(rsid.to_string()));
        }
        Ok(VariantInput::RsId(rsid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("rs328", 328)]
    #[case("328", 328)]
    #[case("rs121913529", 121913529)]
    fn test_detect_rsid(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(detect(input).unwrap(), VariantInput::RsId(expected));
    }

    #[test]
    fn test_detect_integer() {
        assert_eq!(VariantInput::try_from(338).unwrap(), VariantInput::RsId(338));
        assert!(VariantInput::try_from(0).unwrap_err().is_format());
    }

    #[rstest]
    #[case("NC_000008.10:19813528:1:G")]
    #[case("NC_000008.11:19962212:C:G")]
    fn test_detect_spdi(#[case] input: &str) {
        match detect(input).unwrap() {
            VariantInput::Spdi(spdi) => assert_eq!(spdi.to_string(), input),
            other => panic!("expected SPDI, got {:?}", other),
        }
    }

    #[rstest]
    #[case("NC_000007.14:g.8644051C>G")]
    #[case("NM_000088.3:c.10A>G")]
    #[case("NP_000079.2:p.Gly4Arg")]
    #[case("NC_012920.1:m.3243A>G")]
    fn test_detect_hgvs(#[case] input: &str) {
        assert_eq!(detect(input).unwrap(), VariantInput::Hgvs(input.to_string()));
    }

    #[test]
    fn test_detect_vcf_keeps_literal_row() {
        let line = "NC_000007.14\t8644051\t.\tC\tG,T\t.\t.\tINFO";
        match detect(line).unwrap() {
            VariantInput::Vcf(row) => {
                assert_eq!(row.to_string(), line);
                assert_eq!(row.extra.info, "INFO");
            }
            other => panic!("expected VCF, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_short_vcf_line() {
        let row = match detect("chr1\t5\t.\tA\tT").unwrap() {
            VariantInput::Vcf(row) => row,
            other => panic!("expected VCF, got {:?}", other),
        };
        assert_eq!(row.to_string(), "chr1\t5\t.\tA\tT\t.\t.\t.");
    }

    #[rstest]
    #[case("NC_000008.11:19956017:1.G")]
    #[case("rs0328")]
    #[case("")]
    #[case("not a variant")]
    #[case("NC_000007.14:x.8644051C>G")]
    #[case("chr1\t5\t.\tA\tta")]
    #[case("chr1\t5\t.\tA\t\t.")]
    #[case("chr1\t5\t.\tA")]
    #[case("NC_000008.11:position:C:G")]
    #[case("chr1\t0100\t.\tA\tT")]
    fn test_detect_rejects(#[case] input: &str) {
        assert_eq!(
            detect(input).unwrap_err(),
            VariationError::Format(input.to_string())
        );
    }

    #[test]
    fn test_detect_rejects_ambiguous_input() {
        // a VCF line whose INFO carries three colons is also SPDI-shaped
        let line = "chr1\t5\t.\tA\tT\t.\t.\tA:B:C:D";
        assert!(detect(line).unwrap_err().is_format());
    }

    #[test]
    fn test_display_round_trips_input() {
        assert_eq!(detect("328").unwrap().to_string(), "rs328");
        assert_eq!(detect("NC_000007.14:g.8644051C>G").unwrap().kind(), "hgvs");
    }
}
