use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indexmap::IndexMap;
use serde::Serialize;
use varid_core::parse_rsid;
use varid_services::attributes::{
    self, ChromosomePosition, GeneAllele, MergeRecord, StudyFrequency, Submission,
};
use varid_services::{RefSnp, VariationService};

use crate::client::client_from_matches;

/// Attribute projections of one RefSNP record.
#[derive(Debug, Serialize)]
pub struct RefSnpAttributes<'a> {
    pub refsnp_id: &'a str,
    pub variant_type: Option<&'a str>,
    pub citations: &'a [u64],
    pub alleles: Vec<&'a str>,
    pub position: Option<ChromosomePosition>,
    pub frequencies: IndexMap<String, StudyFrequency>,
    pub clinical_significances: Vec<Vec<String>>,
    pub submissions: Vec<Submission>,
    pub genes: Vec<GeneAllele>,
    pub merges: Vec<MergeRecord>,
}

impl<'a> RefSnpAttributes<'a> {
    pub fn from_record(rs: &'a RefSnp) -> Self {
        Self {
            refsnp_id: &rs.refsnp_id,
            variant_type: attributes::variant_type(rs),
            citations: attributes::citations(rs),
            alleles: attributes::placement_alleles(rs),
            position: attributes::chromosome_position(rs),
            frequencies: attributes::minor_allele_frequencies(rs),
            clinical_significances: attributes::clinical_significances(rs),
            submissions: attributes::submissions(rs),
            genes: attributes::gene_alleles(rs),
            merges: attributes::merges(rs),
        }
    }
}

pub fn run_refsnp(matches: &ArgMatches) -> Result<()> {
    let identifier = matches
        .get_one::<String>("identifier")
        .expect("rsID is required");
    let rsid = parse_rsid(identifier)?;

    let client = client_from_matches(matches)?;
    let doc = client
        .refsnp(rsid)
        .with_context(|| format!("Failed to fetch RefSNP record for '{}'", identifier))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches.get_flag("attributes") {
        serde_json::to_writer_pretty(&mut out, &RefSnpAttributes::from_record(&doc.record))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", doc.raw)?;
    }

    Ok(())
}
