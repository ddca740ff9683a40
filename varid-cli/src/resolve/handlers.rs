use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;
use varid_core::format_rsid;
use varid_resolve::{Resolution, Resolver};

use super::cli::*;
use crate::client::client_from_matches;

pub fn run_resolve(matches: &ArgMatches) -> Result<()> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(FORMAT_ALL);

    let inputs = match (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("file"),
    ) {
        (Some(input), _) => vec![input.to_string()],
        (None, Some(path)) => {
            let file = File::open(path).with_context(|| format!("Failed to open '{}'", path))?;
            read_inputs(BufReader::new(file))?
        }
        (None, None) => unreachable!("clap requires --input or --file"),
    };

    let resolver = Resolver::new(client_from_matches(matches)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    info!(count = inputs.len(), "resolving inputs");
    for input in &inputs {
        let resolution = resolver
            .resolve_str(input)
            .with_context(|| format!("Failed to resolve '{}'", input))?;
        write_resolution(&mut out, input, &resolution, format)?;
    }

    Ok(())
}

/// One variant per non-blank line, line endings stripped.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(line.to_string());
    }
    Ok(inputs)
}

pub fn write_resolution<W: Write>(
    out: &mut W,
    input: &str,
    resolution: &Resolution,
    format: &str,
) -> Result<()> {
    match format {
        FORMAT_SPDI => write_lines(out, resolution.as_spdi_list())?,
        FORMAT_HGVS => write_lines(out, resolution.as_hgvs_list())?,
        FORMAT_RSID => write_lines(out, resolution.rsids().map(format_rsid))?,
        FORMAT_VCF => write_lines(out, resolution.as_vcf_list())?,
        FORMAT_JSON => {
            if let Some(raw) = resolution.as_json() {
                writeln!(out, "{}", raw)?;
            }
        }
        FORMAT_SUMMARY => {
            serde_json::to_writer(&mut *out, &resolution.summary())?;
            writeln!(out)?;
        }
        _ => {
            writeln!(out, "# input\n{}", input)?;
            writeln!(out, "# rsid")?;
            write_lines(out, resolution.rsids().map(format_rsid))?;
            writeln!(out, "# spdi")?;
            write_lines(out, resolution.as_spdi_list())?;
            writeln!(out, "# hgvs")?;
            write_lines(out, resolution.as_hgvs_list())?;
            writeln!(out, "# vcf")?;
            write_lines(out, resolution.as_vcf_list())?;
        }
    }
    Ok(())
}

fn write_lines<W, I>(out: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use varid_services::MockVariationService;

    fn rs328() -> MockVariationService {
        let raw = serde_json::json!({
            "refsnp_id": "328",
            "primary_snapshot_data": {
                "placements_with_allele": [{
                    "seq_id": "NC_000008.11",
                    "is_ptlp": true,
                    "alleles": [{
                        "allele": {"spdi": {
                            "seq_id": "NC_000008.11",
                            "position": 19962212,
                            "deleted_sequence": "C",
                            "inserted_sequence": "G"
                        }},
                        "hgvs": "NC_000008.11:g.19962213C>G"
                    }]
                }]
            }
        });
        let spdi = "NC_000008.11:19962212:C:G".parse().unwrap();
        MockVariationService::new()
            .with_refsnp(328, raw.to_string())
            .with_vcf_fields(&spdi, "NC_000008.11", 19962213, "C", "G")
    }

    fn render(format: &str) -> String {
        let service = rs328();
        let resolution = Resolver::new(&service).resolve_str("rs328").unwrap();
        let mut out = Vec::new();
        write_resolution(&mut out, "rs328", &resolution, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_sections() {
        assert_eq!(render(FORMAT_RSID), "rs328\n");
        assert_eq!(render(FORMAT_SPDI), "NC_000008.11:19962212:C:G\n");
        assert_eq!(render(FORMAT_HGVS), "NC_000008.11:g.19962213C>G\n");
        assert_eq!(render(FORMAT_VCF), "NC_000008.11\t19962213\trs328\tC\tG\t.\t.\t.\n");
    }

    #[test]
    fn test_labelled_sections() {
        assert_eq!(
            render(FORMAT_ALL),
            "# input\nrs328\n# rsid\nrs328\n# spdi\nNC_000008.11:19962212:C:G\n\
             # hgvs\nNC_000008.11:g.19962213C>G\n\
             # vcf\nNC_000008.11\t19962213\trs328\tC\tG\t.\t.\t.\n"
        );
    }

    #[test]
    fn test_summary_is_one_json_line() {
        let rendered = render(FORMAT_SUMMARY);
        let value: serde_json::Value = serde_json::from_str(rendered.trim_end()).unwrap();
        assert_eq!(value["rsids"], serde_json::json!([328]));
        assert_eq!(value["hgvs"][0], "NC_000008.11:g.19962213C>G");
    }

    #[test]
    fn test_raw_record() {
        let value: serde_json::Value = serde_json::from_str(render(FORMAT_JSON).trim_end()).unwrap();
        assert_eq!(value["refsnp_id"], "328");
    }

    #[test]
    fn test_read_inputs_skips_blank_lines() {
        let text = "rs328\n\n  \nNC_000007.14\t8644051\t.\tC\tG\t.\t.\t.\r\n";
        assert_eq!(
            read_inputs(text.as_bytes()).unwrap(),
            vec!["rs328", "NC_000007.14\t8644051\t.\tC\tG\t.\t.\t."]
        );
    }
}
