//! Records returned by the Variation Services API.
//!
//! Only the parts of the RefSNP document needed for identifier equivalence
//! and the attribute projections are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use varid_core::Spdi;

/// The JSON wrapper around every payload except the RefSNP record.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// VCF projection of a single SPDI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcfFields {
    pub chrom: String,
    pub pos: u64,
    #[serde(rename = "ref")]
    pub reference: String,
    pub alt: String,
}

#[derive(Debug, Deserialize)]
pub struct HgvsPayload {
    pub hgvs: String,
}

#[derive(Debug, Deserialize)]
pub struct RsidsPayload {
    #[serde(default)]
    pub rsids: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SpdisPayload {
    #[serde(default)]
    pub spdis: Vec<Spdi>,
}

/// A RefSNP record together with the exact text it was decoded from.
#[derive(Debug, Clone)]
pub struct RefSnpDocument {
    pub raw: String,
    pub record: RefSnp,
}

impl RefSnpDocument {
    pub fn parse(raw: String) -> Result<Self, serde_json::Error> {
        let record = serde_json::from_str(&raw)?;
        Ok(Self { raw, record })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefSnp {
    pub refsnp_id: String,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub last_update_date: Option<String>,
    #[serde(default)]
    pub citations: Vec<u64>,
    #[serde(default)]
    pub dbsnp1_merges: Vec<MergeEvent>,
    #[serde(default)]
    pub primary_snapshot_data: Option<PrimarySnapshot>,
}

impl RefSnp {
    /// The primary top-level placement, if the record has one.
    pub fn primary_placement(&self) -> Option<&Placement> {
        self.primary_snapshot_data
            .as_ref()?
            .placements_with_allele
            .iter()
            .find(|p| p.is_ptlp)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimarySnapshot {
    #[serde(default)]
    pub variant_type: Option<String>,
    #[serde(default)]
    pub placements_with_allele: Vec<Placement>,
    #[serde(default)]
    pub allele_annotations: Vec<AlleleAnnotation>,
    #[serde(default)]
    pub support: Vec<SupportRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub seq_id: Option<String>,
    #[serde(default)]
    pub is_ptlp: bool,
    #[serde(default)]
    pub placement_annot: Option<PlacementAnnot>,
    #[serde(default)]
    pub alleles: Vec<PlacedAllele>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedAllele {
    pub allele: AlleleBody,
    pub hgvs: String,
}

impl PlacedAllele {
    /// HGVS of the form `...=`: the observed sequence equals the reference.
    pub fn is_no_change(&self) -> bool {
        self.hgvs.ends_with('=')
    }

    /// The allele's SPDI, `None` for frameshifts.
    pub fn spdi(&self) -> Option<&Spdi> {
        self.allele.spdi()
    }
}

/// An allele is an SPDI, except on protein placements where it may be a frameshift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlleleBody {
    Spdi { spdi: Spdi },
    Frameshift { frameshift: Frameshift },
}

impl AlleleBody {
    pub fn spdi(&self) -> Option<&Spdi> {
        match self {
            AlleleBody::Spdi { spdi } => Some(spdi),
            AlleleBody::Frameshift { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frameshift {
    #[serde(default)]
    pub seq_id: String,
    #[serde(default)]
    pub position: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementAnnot {
    #[serde(default)]
    pub seq_id_traits_by_assembly: Vec<SeqIdTrait>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeqIdTrait {
    pub assembly_name: String,
    #[serde(default)]
    pub assembly_accession: Option<String>,
    #[serde(default)]
    pub is_top_level: bool,
    #[serde(default)]
    pub is_chromosome: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlleleAnnotation {
    #[serde(default)]
    pub frequency: Vec<Frequency>,
    #[serde(default)]
    pub clinical: Vec<ClinicalAnnotation>,
    #[serde(default)]
    pub assembly_annotation: Vec<AssemblyAnnotation>,
}

/// Gene annotation of one allele on one sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyAnnotation {
    pub seq_id: String,
    #[serde(default)]
    pub genes: Vec<GeneAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneAnnotation {
    pub locus: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rnas: Vec<RnaAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RnaAnnotation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub codon_aligned_transcript_change: Option<Spdi>,
    #[serde(default)]
    pub protein: Option<ProteinAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinAnnotation {
    pub variant: AlleleBody,
}

/// A former rsID merged into this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeEvent {
    pub merged_rsid: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub merge_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frequency {
    pub study_name: String,
    pub total_count: u64,
    pub allele_count: u64,
    pub observation: Spdi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalAnnotation {
    #[serde(default)]
    pub clinical_significances: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportRecord {
    pub id: SupportId,
    #[serde(default)]
    pub submitter_handle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportId {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
}
