//! The lookups identifier resolution needs from the remote service.

use varid_core::{Result, Spdi, VcfKey};

use crate::models::{RefSnpDocument, VcfFields};

/// Lookups against a variant-resolution service.
///
/// Each call is a single blocking request. Required payloads that come back
/// without data are errors; the two optional lookups answer `None` instead.
pub trait VariationService {
    /// Full RefSNP record for an rsID.
    fn refsnp(&self, rsid: u64) -> Result<RefSnpDocument>;

    /// Locally right-shifted minimal form of an SPDI.
    fn contextual(&self, spdi: &Spdi) -> Result<Spdi>;

    /// Canonical representative SPDI of an SPDI's equivalence class.
    fn canonical_representative(&self, spdi: &Spdi) -> Result<Spdi>;

    fn vcf_fields(&self, spdi: &Spdi) -> Result<VcfFields>;

    fn spdi_to_hgvs(&self, spdi: &Spdi) -> Result<String>;

    /// rsIDs known for a contextual SPDI, `None` when there are none.
    fn spdi_rsids(&self, spdi: &Spdi) -> Result<Option<Vec<u64>>>;

    fn hgvs_contextuals(&self, hgvs: &str) -> Result<Vec<Spdi>>;

    /// Contextual SPDIs for VCF coordinates, `None` when there are none.
    fn vcf_contextuals(&self, key: &VcfKey) -> Result<Option<Vec<Spdi>>>;

    /// Batch-annotate raw VCF data rows with rsIDs.
    fn annotate_vcf(&self, rows: &str, assembly: &str) -> Result<String>;
}

impl<S: VariationService + ?Sized> VariationService for &S {
    fn refsnp(&self, rsid: u64) -> Result<RefSnpDocument> {
        (**self).refsnp(rsid)
    }

    fn contextual(&self, spdi: &Spdi) -> Result<Spdi> {
        (**self).contextual(spdi)
    }

    fn canonical_representative(&self, spdi: &Spdi) -> Result<Spdi> {
        (**self).canonical_representative(spdi)
    }

    fn vcf_fields(&self, spdi: &Spdi) -> Result<VcfFields> {
        (**self).vcf_fields(spdi)
    }

    fn spdi_to_hgvs(&self, spdi: &Spdi) -> Result<String> {
        (**self).spdi_to_hgvs(spdi)
    }

    fn spdi_rsids(&self, spdi: &Spdi) -> Result<Option<Vec<u64>>> {
        (**self).spdi_rsids(spdi)
    }

    fn hgvs_contextuals(&self, hgvs: &str) -> Result<Vec<Spdi>> {
        (**self).hgvs_contextuals(hgvs)
    }

    fn vcf_contextuals(&self, key: &VcfKey) -> Result<Option<Vec<Spdi>>> {
        (**self).vcf_contextuals(key)
    }

    fn annotate_vcf(&self, rows: &str, assembly: &str) -> Result<String> {
        (**self).annotate_vcf(rows, assembly)
    }
}
