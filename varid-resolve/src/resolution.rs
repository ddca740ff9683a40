//! Accumulated results of one resolution.
//!
//! All collections keep first-seen order and ignore later duplicates, so the
//! output of a resolution is deterministic for a given sequence of service
//! answers.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use varid_core::{AlleleKey, Spdi, VcfExtra, VcfKey, VcfRow};

/// Everything discovered while resolving one input.
///
/// Built by the resolver and read-only for callers.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    spdis: IndexSet<Spdi>,
    hgvs: IndexSet<String>,
    rsids: IndexSet<u64>,
    vcf: IndexMap<VcfKey, VcfRow>,
    extra: VcfExtra,
    refsnp_json: Option<String>,
}

impl Resolution {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_spdi(&mut self, spdi: Spdi) -> bool {
        self.spdis.insert(spdi)
    }

    pub(crate) fn add_hgvs(&mut self, hgvs: String) -> bool {
        self.hgvs.insert(hgvs)
    }

    pub(crate) fn add_rsid(&mut self, rsid: u64) -> bool {
        self.rsids.insert(rsid)
    }

    /// Keep the first row seen for its (chrom, pos, ref, alt).
    pub(crate) fn add_vcf_row(&mut self, row: VcfRow) -> bool {
        let key = row.key();
        if self.vcf.contains_key(&key) {
            return false;
        }
        self.vcf.insert(key, row);
        true
    }

    pub(crate) fn set_extra(&mut self, extra: VcfExtra) {
        self.extra = extra;
    }

    pub(crate) fn record_refsnp_json(&mut self, raw: &str) {
        if self.refsnp_json.is_none() {
            self.refsnp_json = Some(raw.to_string());
        }
    }

    /// QUAL, FILTER and INFO shared by every VCF row this resolution emits.
    pub fn extra(&self) -> &VcfExtra {
        &self.extra
    }

    pub fn spdis(&self) -> impl Iterator<Item = &Spdi> {
        self.spdis.iter()
    }

    pub fn hgvs(&self) -> impl Iterator<Item = &str> {
        self.hgvs.iter().map(String::as_str)
    }

    pub fn rsids(&self) -> impl Iterator<Item = u64> + '_ {
        self.rsids.iter().copied()
    }

    pub fn vcf_rows(&self) -> impl Iterator<Item = &VcfRow> {
        self.vcf.values()
    }

    pub fn contains_spdi(&self, spdi: &Spdi) -> bool {
        self.spdis.contains(spdi)
    }

    pub fn contains_rsid(&self, rsid: u64) -> bool {
        self.rsids.contains(&rsid)
    }

    pub fn as_spdi_list(&self) -> Vec<String> {
        self.spdis.iter().map(Spdi::to_string).collect()
    }

    pub fn as_hgvs_list(&self) -> Vec<String> {
        self.hgvs.iter().cloned().collect()
    }

    pub fn as_rsid_list(&self) -> Vec<u64> {
        self.rsids.iter().copied().collect()
    }

    /// VCF rows as tab-joined lines.
    pub fn as_vcf_list(&self) -> Vec<String> {
        self.vcf.values().map(VcfRow::to_string).collect()
    }

    /// Raw JSON of the first RefSNP record fetched, if any was.
    pub fn as_json(&self) -> Option<&str> {
        self.refsnp_json.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.spdis.is_empty() && self.hgvs.is_empty() && self.rsids.is_empty() && self.vcf.is_empty()
    }

    pub fn summary(&self) -> ResolutionSummary {
        ResolutionSummary {
            rsids: self.as_rsid_list(),
            spdis: self.as_spdi_list(),
            hgvs: self.as_hgvs_list(),
            vcf: self.as_vcf_list(),
        }
    }
}

/// Serializable snapshot of a [`Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub rsids: Vec<u64>,
    pub spdis: Vec<String>,
    pub hgvs: Vec<String>,
    pub vcf: Vec<String>,
}

/// Alternate alleles of one rsID grouped by (chrom, pos, id, ref).
#[derive(Debug, Default)]
pub struct AlleleBuckets {
    buckets: IndexMap<AlleleKey, Vec<String>>,
}

impl AlleleBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: AlleleKey, alternate: String) {
        self.buckets.entry(key).or_default().push(alternate);
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// One row per bucket, its ALT the sorted, deduplicated, comma-joined alternates.
    pub fn into_rows(self, extra: &VcfExtra) -> Vec<VcfRow> {
        self.buckets
            .into_iter()
            .map(|(key, mut alternates)| {
                alternates.sort();
                alternates.dedup();
                key.into_row(alternates.join(","), extra.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(pos: u64, reference: &str) -> AlleleKey {
        AlleleKey {
            chrom: "NC_000007.14".to_string(),
            pos,
            id: "rs1".to_string(),
            reference: reference.to_string(),
        }
    }

    #[test]
    fn test_buckets_join_sorted_alternates() {
        let mut buckets = AlleleBuckets::new();
        buckets.push(key(8644051, "C"), "T".to_string());
        buckets.push(key(8644051, "C"), "G".to_string());
        buckets.push(key(8644051, "C"), "T".to_string());
        buckets.push(key(8644060, "A"), "AT".to_string());

        let rows = buckets.into_rows(&VcfExtra::default());
        let lines: Vec<String> = rows.iter().map(VcfRow::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "NC_000007.14\t8644051\trs1\tC\tG,T\t.\t.\t.".to_string(),
                "NC_000007.14\t8644060\trs1\tA\tAT\t.\t.\t.".to_string(),
            ]
        );
    }

    #[test]
    fn test_buckets_carry_inherited_extra() {
        let mut buckets = AlleleBuckets::new();
        buckets.push(key(1, "A"), "G".to_string());
        let extra = VcfExtra {
            qual: "50".to_string(),
            filter: "PASS".to_string(),
            info: "DP=10".to_string(),
        };
        let rows = buckets.into_rows(&extra);
        assert_eq!(rows[0].extra, extra);
    }

    #[test]
    fn test_collections_keep_first_seen_order() {
        let mut resolution = Resolution::new();
        let a: Spdi = "NC_000008.11:19962212:C:G".parse().unwrap();
        let b: Spdi = "NC_000008.11:19962212:C:T".parse().unwrap();
        assert!(resolution.add_spdi(b.clone()));
        assert!(resolution.add_spdi(a.clone()));
        assert!(!resolution.add_spdi(b.clone()));
        assert_eq!(
            resolution.as_spdi_list(),
            vec!["NC_000008.11:19962212:C:T", "NC_000008.11:19962212:C:G"]
        );

        assert!(resolution.add_rsid(328));
        assert!(!resolution.add_rsid(328));
        assert_eq!(resolution.as_rsid_list(), vec![328]);
    }

    #[test]
    fn test_first_vcf_row_wins() {
        let mut resolution = Resolution::new();
        let first = VcfRow::parse_line("chr1\t5\t.\tA\tT\t.\t.\tfirst").unwrap();
        let second = VcfRow::parse_line("chr1\t5\trs9\tA\tT\t.\t.\tsecond").unwrap();
        assert!(resolution.add_vcf_row(first));
        assert!(!resolution.add_vcf_row(second));
        assert_eq!(resolution.as_vcf_list(), vec!["chr1\t5\t.\tA\tT\t.\t.\tfirst"]);
    }

    #[test]
    fn test_refsnp_json_keeps_first_record() {
        let mut resolution = Resolution::new();
        assert!(resolution.as_json().is_none());
        resolution.record_refsnp_json("{\"refsnp_id\":\"1\"}");
        resolution.record_refsnp_json("{\"refsnp_id\":\"2\"}");
        assert_eq!(resolution.as_json(), Some("{\"refsnp_id\":\"1\"}"));
    }
}
