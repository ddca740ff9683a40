//! In-memory variation service for tests and offline use.
//!
//! Unregistered required lookups answer like the real service does for an
//! unknown variant (status 404); unregistered optional lookups answer `None`.

use std::collections::HashMap;
use std::sync::Mutex;

use varid_core::{Result, Spdi, VariationError, VcfKey};

use crate::models::{RefSnpDocument, VcfFields};
use crate::service::VariationService;

/// A [`VariationService`] answering from registered responses.
///
/// # Example
///
/// ```
/// use varid_core::Spdi;
/// use varid_services::{MockVariationService, VariationService};
///
/// let spdi: Spdi = "NC_000008.11:19962212:C:G".parse().unwrap();
/// let service = MockVariationService::new()
///     .with_hgvs(&spdi, "NC_000008.11:g.19962213C>G");
///
/// assert_eq!(service.spdi_to_hgvs(&spdi).unwrap(), "NC_000008.11:g.19962213C>G");
/// assert_eq!(service.calls(), vec!["spdi_to_hgvs NC_000008.11:19962212:C:G"]);
/// ```
#[derive(Debug, Default)]
pub struct MockVariationService {
    refsnps: HashMap<u64, String>,
    contextuals: HashMap<String, Spdi>,
    canonicals: HashMap<String, Spdi>,
    vcf_fields: HashMap<String, VcfFields>,
    hgvs: HashMap<String, String>,
    rsids: HashMap<String, Vec<u64>>,
    hgvs_contextuals: HashMap<String, Vec<Spdi>>,
    vcf_contextuals: HashMap<VcfKey, Vec<Spdi>>,
    annotations: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockVariationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw RefSNP JSON returned for an rsID.
    pub fn with_refsnp(mut self, rsid: u64, raw: impl Into<String>) -> Self {
        self.refsnps.insert(rsid, raw.into());
        self
    }

    pub fn with_contextual(mut self, spdi: &Spdi, contextual: Spdi) -> Self {
        self.contextuals.insert(spdi.to_string(), contextual);
        self
    }

    pub fn with_canonical(mut self, spdi: &Spdi, canonical: Spdi) -> Self {
        self.canonicals.insert(spdi.to_string(), canonical);
        self
    }

    pub fn with_vcf_fields(mut self, spdi: &Spdi, chrom: &str, pos: u64, reference: &str, alt: &str) -> Self {
        self.vcf_fields.insert(
            spdi.to_string(),
            VcfFields {
                chrom: chrom.to_string(),
                pos,
                reference: reference.to_string(),
                alt: alt.to_string(),
            },
        );
        self
    }

    pub fn with_hgvs(mut self, spdi: &Spdi, hgvs: &str) -> Self {
        self.hgvs.insert(spdi.to_string(), hgvs.to_string());
        self
    }

    pub fn with_rsids(mut self, spdi: &Spdi, rsids: Vec<u64>) -> Self {
        self.rsids.insert(spdi.to_string(), rsids);
        self
    }

    pub fn with_hgvs_contextuals(mut self, hgvs: &str, spdis: Vec<Spdi>) -> Self {
        self.hgvs_contextuals.insert(hgvs.to_string(), spdis);
        self
    }

    pub fn with_vcf_contextuals(mut self, key: VcfKey, spdis: Vec<Spdi>) -> Self {
        self.vcf_contextuals.insert(key, spdis);
        self
    }

    pub fn with_annotation(mut self, rows: &str, annotated: &str) -> Self {
        self.annotations.insert(rows.to_string(), annotated.to_string());
        self
    }

    /// Every lookup made so far, in order, as `"<method> <argument>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of lookups made for one method.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(' ').next() == Some(method))
            .count()
    }

    fn record(&self, method: &str, argument: &str) -> String {
        let call = format!("{} {}", method, argument);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
        call
    }

    fn not_found<T>(call: String) -> Result<T> {
        Err(VariationError::RemoteStatus {
            url: format!("mock://{}", call),
            status: 404,
        })
    }
}

impl VariationService for MockVariationService {
    fn refsnp(&self, rsid: u64) -> Result<RefSnpDocument> {
        let call = self.record("refsnp", &rsid.to_string());
        match self.refsnps.get(&rsid) {
            Some(raw) => RefSnpDocument::parse(raw.clone()).map_err(|e| VariationError::Decode {
                url: format!("mock://{}", call),
                reason: e.to_string(),
            }),
            None => Self::not_found(call),
        }
    }

    fn contextual(&self, spdi: &Spdi) -> Result<Spdi> {
        let call = self.record("contextual", &spdi.to_string());
        match self.contextuals.get(&spdi.to_string()) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }

    fn canonical_representative(&self, spdi: &Spdi) -> Result<Spdi> {
        let call = self.record("canonical_representative", &spdi.to_string());
        match self.canonicals.get(&spdi.to_string()) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }

    fn vcf_fields(&self, spdi: &Spdi) -> Result<VcfFields> {
        let call = self.record("vcf_fields", &spdi.to_string());
        match self.vcf_fields.get(&spdi.to_string()) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }

    fn spdi_to_hgvs(&self, spdi: &Spdi) -> Result<String> {
        let call = self.record("spdi_to_hgvs", &spdi.to_string());
        match self.hgvs.get(&spdi.to_string()) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }

    fn spdi_rsids(&self, spdi: &Spdi) -> Result<Option<Vec<u64>>> {
        self.record("spdi_rsids", &spdi.to_string());
        Ok(self.rsids.get(&spdi.to_string()).cloned())
    }

    fn hgvs_contextuals(&self, hgvs: &str) -> Result<Vec<Spdi>> {
        let call = self.record("hgvs_contextuals", hgvs);
        match self.hgvs_contextuals.get(hgvs) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }

    fn vcf_contextuals(&self, key: &VcfKey) -> Result<Option<Vec<Spdi>>> {
        self.record(
            "vcf_contextuals",
            &format!("{}/{}/{}/{}", key.chrom, key.pos, key.reference, key.alternate),
        );
        Ok(self.vcf_contextuals.get(key).cloned())
    }

    fn annotate_vcf(&self, rows: &str, assembly: &str) -> Result<String> {
        let call = self.record("annotate_vcf", assembly);
        match self.annotations.get(rows) {
            Some(found) => Ok(found.clone()),
            None => Self::not_found(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_lookups() {
        let service = MockVariationService::new();
        let spdi: Spdi = "NC_000008.10:19813529:1:G".parse().unwrap();

        assert!(matches!(
            service.contextual(&spdi),
            Err(VariationError::RemoteStatus { status: 404, .. })
        ));
        assert_eq!(service.spdi_rsids(&spdi).unwrap(), None);
        assert_eq!(service.call_count("contextual"), 1);
        assert_eq!(service.call_count("spdi_rsids"), 1);
    }

    #[test]
    fn test_invalid_refsnp_is_decode_error() {
        let service = MockVariationService::new().with_refsnp(1, "{not json");
        assert!(matches!(service.refsnp(1), Err(VariationError::Decode { .. })));
    }
}
