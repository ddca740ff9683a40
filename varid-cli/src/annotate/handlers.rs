use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::{debug, info};
use varid_services::VariationService;
use varid_services::consts::{ANNOTATION_BATCH_SIZE, DEFAULT_ASSEMBLY};

use crate::client::client_from_matches;

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a VCF file is required");
    let assembly = matches
        .get_one::<String>("assembly")
        .map(String::as_str)
        .unwrap_or(DEFAULT_ASSEMBLY);

    let file = File::open(input).with_context(|| format!("Failed to open '{}'", input))?;
    let reader = BufReader::new(file);

    let writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create '{}'", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let client = client_from_matches(matches)?;
    let batches = annotate_rows(&client, reader, writer, assembly, ANNOTATION_BATCH_SIZE)?;
    info!(batches, "annotation complete");

    Ok(())
}

/// Post the data rows of a VCF in batches of `batch_size`, skipping header
/// lines, and write each annotated batch as returned. Returns the number of
/// batches sent.
pub fn annotate_rows<S, R, W>(
    service: &S,
    reader: R,
    mut writer: W,
    assembly: &str,
    batch_size: usize,
) -> Result<usize>
where
    S: VariationService,
    R: BufRead,
    W: Write,
{
    let mut batch = String::new();
    let mut rows = 0;
    let mut batches = 0;

    for line in reader.lines() {
        let line = line.context("Failed to read VCF line")?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        batch.push_str(&line);
        batch.push('\n');
        rows += 1;

        if rows == batch_size {
            send_batch(service, &batch, assembly, &mut writer, batches)?;
            batches += 1;
            batch.clear();
            rows = 0;
        }
    }

    if rows > 0 {
        send_batch(service, &batch, assembly, &mut writer, batches)?;
        batches += 1;
    }

    writer.flush()?;
    Ok(batches)
}

fn send_batch<S: VariationService, W: Write>(
    service: &S,
    batch: &str,
    assembly: &str,
    writer: &mut W,
    index: usize,
) -> Result<()> {
    debug!(index, bytes = batch.len(), "posting VCF batch");
    let annotated = service
        .annotate_vcf(batch, assembly)
        .with_context(|| format!("Failed to annotate VCF batch {}", index + 1))?;
    writer.write_all(annotated.as_bytes())?;
    if !annotated.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use varid_services::MockVariationService;

    const VCF: &str = "##fileformat=VCFv4.2\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
        NC_000008.11\t19962213\t.\tC\tG\t.\t.\t.\n\
        NC_000007.14\t8644051\t.\tC\tG\t.\t.\t.\n\
        NC_000001.11\t1000\t.\tA\tT\t.\t.\t.\n";

    #[test]
    fn test_rows_are_batched_without_headers() {
        let service = MockVariationService::new()
            .with_annotation(
                "NC_000008.11\t19962213\t.\tC\tG\t.\t.\t.\nNC_000007.14\t8644051\t.\tC\tG\t.\t.\t.\n",
                "NC_000008.11\t19962213\trs328\tC\tG\t.\t.\t.\nNC_000007.14\t8644051\t.\tC\tG\t.\t.\t.",
            )
            .with_annotation(
                "NC_000001.11\t1000\t.\tA\tT\t.\t.\t.\n",
                "NC_000001.11\t1000\t.\tA\tT\t.\t.\t.\n",
            );

        let mut out = Vec::new();
        let batches = annotate_rows(&service, VCF.as_bytes(), &mut out, DEFAULT_ASSEMBLY, 2).unwrap();

        assert_eq!(batches, 2);
        assert_eq!(service.call_count("annotate_vcf"), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NC_000008.11\t19962213\trs328\tC\tG\t.\t.\t.\n\
             NC_000007.14\t8644051\t.\tC\tG\t.\t.\t.\n\
             NC_000001.11\t1000\t.\tA\tT\t.\t.\t.\n"
        );
    }

    #[test]
    fn test_header_only_file_sends_nothing() {
        let service = MockVariationService::new();
        let mut out = Vec::new();
        let batches = annotate_rows(&service, "##fileformat=VCFv4.2\n".as_bytes(), &mut out, DEFAULT_ASSEMBLY, 1000).unwrap();

        assert_eq!(batches, 0);
        assert!(service.calls().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_failed_batch_aborts() {
        let service = MockVariationService::new();
        let mut out = Vec::new();
        let err = annotate_rows(&service, VCF.as_bytes(), &mut out, DEFAULT_ASSEMBLY, 1000).unwrap_err();
        assert!(err.to_string().contains("batch 1"));
    }
}
