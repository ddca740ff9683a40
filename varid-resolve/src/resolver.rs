//! Discovery of every equivalent representation of a variant.
//!
//! Each input kind has its own lookup chain and the chains call into each
//! other: an HGVS expression or VCF record expands into contextual SPDIs, an
//! SPDI expands into its rsIDs when it has any, and an rsID expands into the
//! alleles of its primary top-level placement.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use varid_core::{
    AlleleKey, MISSING, Result, Spdi, VariantInput, VcfRow, detect, format_rsid,
};
use varid_services::VariationService;
use varid_services::models::VcfFields;

use crate::resolution::{AlleleBuckets, Resolution};

/// Resolves variant inputs against a [`VariationService`].
///
/// The resolver holds no per-request state, so one instance can serve any
/// number of independent resolutions.
///
/// # Example
///
/// ```rust,no_run
/// use varid_resolve::Resolver;
/// use varid_services::VariationClient;
///
/// # fn main() -> varid_core::Result<()> {
/// let resolver = Resolver::new(VariationClient::builder().finish()?);
/// let resolution = resolver.resolve_str("rs328")?;
/// for line in resolution.as_vcf_list() {
///     println!("{}", line);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Resolver<S> {
    service: S,
}

impl<S: VariationService> Resolver<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Detect the format of `input` and resolve it.
    pub fn resolve_str(&self, input: &str) -> Result<Resolution> {
        self.resolve(detect(input)?)
    }

    pub fn resolve_rsid(&self, rsid: u64) -> Result<Resolution> {
        self.resolve(VariantInput::try_from(rsid)?)
    }

    pub fn resolve(&self, input: VariantInput) -> Result<Resolution> {
        info!(kind = input.kind(), input = %input, "resolving variant");

        let mut session = Session {
            service: &self.service,
            state: Resolution::new(),
            expanded: HashSet::new(),
            translated: HashSet::new(),
            projected: HashSet::new(),
        };

        match input {
            VariantInput::RsId(rsid) => session.from_rsid(rsid)?,
            VariantInput::Spdi(spdi) => session.from_spdi(spdi)?,
            VariantInput::Hgvs(hgvs) => session.from_hgvs(hgvs)?,
            VariantInput::Vcf(row) => session.from_vcf(row)?,
        }

        Ok(session.state)
    }
}

/// One in-flight resolution.
struct Session<'a, S> {
    service: &'a S,
    state: Resolution,
    // SPDIs whose lookup chain already ran
    expanded: HashSet<Spdi>,
    // SPDIs already translated to HGVS
    translated: HashSet<Spdi>,
    // SPDIs already projected to rsID-less VCF rows
    projected: HashSet<Spdi>,
}

impl<S: VariationService> Session<'_, S> {
    fn from_rsid(&mut self, rsid: u64) -> Result<()> {
        self.state.add_rsid(rsid);

        let doc = self.service.refsnp(rsid)?;
        self.state.record_refsnp_json(&doc.raw);

        let Some(ptlp) = doc.record.primary_placement() else {
            warn!(rsid, "record has no primary top-level placement");
            return Ok(());
        };

        let id = format_rsid(rsid);
        let mut buckets = AlleleBuckets::new();
        let mut no_change: Option<(&Spdi, &str)> = None;

        for allele in &ptlp.alleles {
            let Some(spdi) = allele.spdi() else {
                debug!(rsid, hgvs = %allele.hgvs, "skipping allele without SPDI");
                continue;
            };
            if allele.is_no_change() {
                no_change = Some((spdi, &allele.hgvs));
                continue;
            }

            let fields = self.service.vcf_fields(spdi)?;
            self.state.add_spdi(spdi.clone());
            self.state.add_hgvs(allele.hgvs.clone());

            let alternate = fields.alt.clone();
            buckets.push(allele_key(fields, &id), alternate);
        }

        // nothing else describes the variant: report the reference allele with no alternate
        if self.state.hgvs().next().is_none() {
            if let Some((spdi, hgvs)) = no_change {
                let fields = self.service.vcf_fields(spdi)?;
                self.state.add_spdi(spdi.clone());
                self.state.add_hgvs(hgvs.to_string());
                buckets.push(allele_key(fields, &id), MISSING.to_string());
            }
        }

        let rows = buckets.into_rows(self.state.extra());
        for row in rows {
            self.state.add_vcf_row(row);
        }
        Ok(())
    }

    fn from_spdi(&mut self, spdi: Spdi) -> Result<()> {
        self.state.add_spdi(spdi.clone());
        if !self.expanded.insert(spdi.clone()) {
            return Ok(());
        }

        let contextual = self.service.contextual(&spdi)?;
        self.state.add_spdi(contextual.clone());

        let canonical = self.service.canonical_representative(&spdi)?;
        self.state.add_spdi(canonical);

        let untranslated: Vec<Spdi> = self
            .state
            .spdis()
            .filter(|s| !self.translated.contains(*s))
            .cloned()
            .collect();
        for s in untranslated {
            let hgvs = self.service.spdi_to_hgvs(&s)?;
            self.state.add_hgvs(hgvs);
            self.translated.insert(s);
        }

        match self.service.spdi_rsids(&contextual)? {
            Some(rsids) if !rsids.is_empty() => {
                debug!(spdi = %contextual, ?rsids, "expanding known rsIDs");
                for rsid in rsids {
                    if !self.state.contains_rsid(rsid) {
                        self.from_rsid(rsid)?;
                    }
                }
            }
            _ => {
                warn!(spdi = %contextual, "no known rsIDs, projecting VCF fields directly");
                self.project_vcf_rows()?;
            }
        }
        Ok(())
    }

    /// VCF rows without an rsID for every collected SPDI.
    fn project_vcf_rows(&mut self) -> Result<()> {
        let pending: Vec<Spdi> = self
            .state
            .spdis()
            .filter(|s| !self.projected.contains(*s))
            .cloned()
            .collect();

        for spdi in pending {
            let fields = self.service.vcf_fields(&spdi)?;
            let alternate = if fields.alt == fields.reference {
                MISSING.to_string()
            } else {
                fields.alt.clone()
            };
            let key = allele_key(fields, MISSING);
            let row = key.into_row(alternate, self.state.extra().clone());
            self.state.add_vcf_row(row);
            self.projected.insert(spdi);
        }
        Ok(())
    }

    fn from_hgvs(&mut self, hgvs: String) -> Result<()> {
        let contextuals = self.service.hgvs_contextuals(&hgvs)?;
        self.state.add_hgvs(hgvs);

        for spdi in contextuals {
            self.from_spdi(spdi)?;
        }
        Ok(())
    }

    fn from_vcf(&mut self, row: VcfRow) -> Result<()> {
        self.state.set_extra(row.extra.clone());
        let key = row.key();
        self.state.add_vcf_row(row);

        match self.service.vcf_contextuals(&key)? {
            Some(contextuals) => {
                for spdi in contextuals {
                    self.from_spdi(spdi)?;
                }
            }
            None => {
                debug!(chrom = %key.chrom, pos = key.pos, "no contextual SPDIs for VCF record");
            }
        }
        Ok(())
    }
}

fn allele_key(fields: VcfFields, id: &str) -> AlleleKey {
    AlleleKey {
        chrom: fields.chrom,
        pos: fields.pos,
        id: id.to_string(),
        reference: fields.reference,
    }
}
