//! VCF data lines and the keys used to group and deduplicate them.

use std::fmt;

use crate::errors::VariationError;

/// Placeholder for an unknown or absent VCF value.
pub const MISSING: &str = ".";

/// Number of fixed columns in a VCF data line (CHROM through INFO).
pub const VCF_FIXED_FIELDS: usize = 8;

/// QUAL, FILTER and INFO of a VCF line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VcfExtra {
    pub qual: String,
    pub filter: String,
    pub info: String,
}

impl Default for VcfExtra {
    fn default() -> Self {
        Self {
            qual: MISSING.to_string(),
            filter: MISSING.to_string(),
            info: MISSING.to_string(),
        }
    }
}

/// A single VCF data line with its eight fixed fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VcfRow {
    pub chrom: String,
    /// 1-based position.
    pub pos: u64,
    pub id: String,
    pub reference: String,
    /// One or more alternate alleles, comma-joined, or `.` for none.
    pub alternate: String,
    pub extra: VcfExtra,
}

impl VcfRow {
    /// Parse a tab-delimited VCF data line.
    ///
    /// Missing trailing fields are filled with `.`; columns past INFO
    /// (FORMAT and samples) are dropped.
    pub fn parse_line(line: &str) -> Result<Self, VariationError> {
        let mut fields: Vec<&str> = line.split('\t').take(VCF_FIXED_FIELDS).collect();
        if fields.len() < 5 {
            return Err(VariationError::Format(line.to_string()));
        }
        fields.resize(VCF_FIXED_FIELDS, MISSING);

        // POS must render back exactly as written, so no sign or zero padding
        let pos = fields[1]
            .parse::<u64>()
            .ok()
            .filter(|pos| pos.to_string() == fields[1])
            .ok_or_else(|| VariationError::Format(line.to_string()))?;

        Ok(VcfRow {
            chrom: fields[0].to_string(),
            pos,
            id: fields[2].to_string(),
            reference: fields[3].to_string(),
            alternate: fields[4].to_string(),
            extra: VcfExtra {
                qual: fields[5].to_string(),
                filter: fields[6].to_string(),
                info: fields[7].to_string(),
            },
        })
    }

    /// The identity of this row: (chrom, pos, ref, alt).
    pub fn key(&self) -> VcfKey {
        VcfKey {
            chrom: self.chrom.clone(),
            pos: self.pos,
            reference: self.reference.clone(),
            alternate: self.alternate.clone(),
        }
    }
}

impl fmt::Display for VcfRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.pos,
            self.id,
            self.reference,
            self.alternate,
            self.extra.qual,
            self.extra.filter,
            self.extra.info
        )
    }
}

/// Identity of an emitted VCF row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VcfKey {
    pub chrom: String,
    pub pos: u64,
    pub reference: String,
    pub alternate: String,
}

/// Grouping key for the alternate alleles of one rsID at one locus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlleleKey {
    pub chrom: String,
    pub pos: u64,
    pub id: String,
    pub reference: String,
}

impl AlleleKey {
    pub fn into_row(self, alternate: String, extra: VcfExtra) -> VcfRow {
        VcfRow {
            chrom: self.chrom,
            pos: self.pos,
            id: self.id,
            reference: self.reference,
            alternate,
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_line_round_trips() {
        let line = "NC_000007.14\t8644051\t.\tC\tG,T\t.\t.\tINFO";
        let row = VcfRow::parse_line(line).unwrap();
        assert_eq!(row.chrom, "NC_000007.14");
        assert_eq!(row.pos, 8644051);
        assert_eq!(row.alternate, "G,T");
        assert_eq!(row.extra.info, "INFO");
        assert_eq!(row.to_string(), line);
    }

    #[test]
    fn test_parse_pads_missing_fields() {
        let row = VcfRow::parse_line("chr1\t5\trs1\tA\tT").unwrap();
        assert_eq!(row.extra, VcfExtra::default());
        assert_eq!(row.to_string(), "chr1\t5\trs1\tA\tT\t.\t.\t.");
    }

    #[test]
    fn test_parse_drops_sample_columns() {
        let row = VcfRow::parse_line("chr1\t5\t.\tA\tT\t50\tPASS\tDP=3\tGT\t0/1").unwrap();
        assert_eq!(row.to_string(), "chr1\t5\t.\tA\tT\t50\tPASS\tDP=3");
    }

    #[test]
    fn test_parse_rejects_non_numeric_position() {
        assert!(VcfRow::parse_line("chr1\tfive\t.\tA\tT").unwrap_err().is_format());
    }

    #[test]
    fn test_parse_rejects_position_that_would_not_render_verbatim() {
        for line in ["chr1\t0100\t.\tA\tT", "chr1\t+100\t.\tA\tT"] {
            assert_eq!(
                VcfRow::parse_line(line).unwrap_err(),
                VariationError::Format(line.to_string())
            );
        }
    }

    #[test]
    fn test_allele_key_into_row() {
        let key = AlleleKey {
            chrom: "NC_000008.11".to_string(),
            pos: 19962213,
            id: "rs328".to_string(),
            reference: "C".to_string(),
        };
        let row = key.into_row("G".to_string(), VcfExtra::default());
        assert_eq!(row.to_string(), "NC_000008.11\t19962213\trs328\tC\tG\t.\t.\t.");
        assert_eq!(row.key().alternate, "G");
    }
}
