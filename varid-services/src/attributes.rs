//! Read-only projections over a fetched RefSNP record.

use indexmap::IndexMap;
use serde::Serialize;

use varid_core::Spdi;

use crate::models::RefSnp;

/// RefSeq chromosome accessions (without version) and their common names.
const ACCESSION_CHROMOSOMES: [(&str, &str); 25] = [
    ("NC_000001", "1"),
    ("NC_000002", "2"),
    ("NC_000003", "3"),
    ("NC_000004", "4"),
    ("NC_000005", "5"),
    ("NC_000006", "6"),
    ("NC_000007", "7"),
    ("NC_000008", "8"),
    ("NC_000009", "9"),
    ("NC_000010", "10"),
    ("NC_000011", "11"),
    ("NC_000012", "12"),
    ("NC_000013", "13"),
    ("NC_000014", "14"),
    ("NC_000015", "15"),
    ("NC_000016", "16"),
    ("NC_000017", "17"),
    ("NC_000018", "18"),
    ("NC_000019", "19"),
    ("NC_000020", "20"),
    ("NC_000021", "21"),
    ("NC_000022", "22"),
    ("NC_000023", "X"),
    ("NC_000024", "Y"),
    ("NC_012920", "MT"),
];

/// Chromosome name for a versioned RefSeq accession, if it is a primary chromosome.
pub fn chromosome_name(seq_id: &str) -> Option<&'static str> {
    let accession = seq_id.split('.').next().unwrap_or(seq_id);
    ACCESSION_CHROMOSOMES
        .iter()
        .find(|(acc, _)| *acc == accession)
        .map(|(_, chrom)| *chrom)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomePosition {
    pub assembly: String,
    pub assembly_accession: Option<String>,
    /// Chromosome name, or the RefSeq accession when it has none.
    pub chr: String,
    /// 0-based position of the first allele at the primary placement.
    pub pos: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyFrequency {
    /// Total allele number.
    pub an: u64,
    pub maf_allele: String,
    pub maf_count: u64,
    pub maf: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub rsid: String,
    pub submitter_handle: Option<String>,
    pub id_type: String,
    pub id_value: String,
}

/// Coding change of one allele on one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneAllele {
    pub rsid: String,
    pub allele: String,
    pub gene_name: String,
    pub gene_symbol: String,
    pub mrna: Spdi,
    pub protein: Spdi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRecord {
    pub rsid: String,
    pub merged_rsid: String,
    pub revision: Option<String>,
    pub merge_date: Option<String>,
}

pub fn variant_type(rs: &RefSnp) -> Option<&str> {
    rs.primary_snapshot_data.as_ref()?.variant_type.as_deref()
}

/// PubMed ids citing the variant.
pub fn citations(rs: &RefSnp) -> &[u64] {
    &rs.citations
}

/// Inserted sequence of every allele at the primary top-level placement.
pub fn placement_alleles(rs: &RefSnp) -> Vec<&str> {
    rs.primary_placement()
        .map(|ptlp| {
            ptlp.alleles
                .iter()
                .filter_map(|a| a.spdi())
                .map(|spdi| spdi.inserted_sequence.as_str())
                .collect()
        })
        .unwrap_or_default()
}

/// Chromosome and position of the primary placement on a top-level chromosome.
pub fn chromosome_position(rs: &RefSnp) -> Option<ChromosomePosition> {
    let ptlp = rs.primary_placement()?;
    let first = ptlp.alleles.iter().find_map(|a| a.spdi())?;
    let traits = ptlp.placement_annot.as_ref()?;

    traits
        .seq_id_traits_by_assembly
        .iter()
        .find(|t| t.is_top_level && t.is_chromosome)
        .map(|t| ChromosomePosition {
            assembly: t.assembly_name.clone(),
            assembly_accession: t.assembly_accession.clone(),
            chr: chromosome_name(&first.seq_id)
                .map(str::to_string)
                .unwrap_or_else(|| first.seq_id.clone()),
            pos: first.position,
        })
}

/// Minor allele frequency per study.
///
/// The minor allele is the least abundant observed allele, or the second
/// least abundant when more than two alleles were observed.
pub fn minor_allele_frequencies(rs: &RefSnp) -> IndexMap<String, StudyFrequency> {
    let Some(snapshot) = rs.primary_snapshot_data.as_ref() else {
        return IndexMap::new();
    };

    // study -> (allele number, allele -> count)
    let mut studies: IndexMap<&str, (u64, IndexMap<&str, u64>)> = IndexMap::new();
    for annotation in &snapshot.allele_annotations {
        for freq in &annotation.frequency {
            let (_, counts) = studies
                .entry(freq.study_name.as_str())
                .or_insert_with(|| (freq.total_count, IndexMap::new()));
            counts.insert(freq.observation.inserted_sequence.as_str(), freq.allele_count);
        }
    }

    let mut mafs = IndexMap::new();
    for (study, (an, counts)) in studies {
        let mut sorted: Vec<(&str, u64)> = counts.into_iter().collect();
        sorted.sort_by_key(|(_, count)| *count);
        let idx = if sorted.len() > 2 { 1 } else { 0 };
        let Some((allele, count)) = sorted.get(idx).copied() else {
            continue;
        };
        let maf = if an == 0 { 0.0 } else { count as f64 / an as f64 };
        mafs.insert(
            study.to_string(),
            StudyFrequency {
                an,
                maf_allele: allele.to_string(),
                maf_count: count,
                maf,
            },
        );
    }
    mafs
}

/// Clinical significance terms, one list per clinical annotation.
pub fn clinical_significances(rs: &RefSnp) -> Vec<Vec<String>> {
    rs.primary_snapshot_data
        .iter()
        .flat_map(|s| s.allele_annotations.iter())
        .flat_map(|a| a.clinical.iter())
        .map(|c| c.clinical_significances.clone())
        .collect()
}

/// Submitted records (ss and RCV ids) supporting the variant.
pub fn submissions(rs: &RefSnp) -> Vec<Submission> {
    rs.primary_snapshot_data
        .iter()
        .flat_map(|s| s.support.iter())
        .map(|support| Submission {
            rsid: rs.refsnp_id.clone(),
            submitter_handle: support.submitter_handle.clone(),
            id_type: support.id.id_type.clone(),
            id_value: support.id.value.clone(),
        })
        .collect()
}

/// Transcript and protein changes per allele from RefSeq gene annotation.
///
/// Only annotation on `NC_` sequences is used. Allele annotations are in the
/// same order as the alleles of the primary placement.
pub fn gene_alleles(rs: &RefSnp) -> Vec<GeneAllele> {
    let Some(snapshot) = rs.primary_snapshot_data.as_ref() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (allele, annotation) in placement_alleles(rs).into_iter().zip(&snapshot.allele_annotations) {
        let Some(assembly) = annotation.assembly_annotation.first() else {
            continue;
        };
        if !assembly.seq_id.starts_with("NC_") {
            continue;
        }
        for gene in &assembly.genes {
            for rna in &gene.rnas {
                let mrna = rna.codon_aligned_transcript_change.as_ref();
                let protein = rna.protein.as_ref().and_then(|p| p.variant.spdi());
                let (Some(mrna), Some(protein)) = (mrna, protein) else {
                    continue;
                };
                out.push(GeneAllele {
                    rsid: rs.refsnp_id.clone(),
                    allele: allele.to_string(),
                    gene_name: gene.name.clone(),
                    gene_symbol: gene.locus.clone(),
                    mrna: mrna.clone(),
                    protein: protein.clone(),
                });
            }
        }
    }
    out
}

/// rsIDs merged into this record.
pub fn merges(rs: &RefSnp) -> Vec<MergeRecord> {
    rs.dbsnp1_merges
        .iter()
        .map(|m| MergeRecord {
            rsid: rs.refsnp_id.clone(),
            merged_rsid: m.merged_rsid.clone(),
            revision: m.revision.clone(),
            merge_date: m.merge_date.clone(),
        })
        .collect()
}
