use clap::{Arg, ArgGroup, Command};

use crate::client::api_arg;

pub const RESOLVE_CMD: &str = "resolve";

pub const FORMAT_SPDI: &str = "spdi";
pub const FORMAT_HGVS: &str = "hgvs";
pub const FORMAT_RSID: &str = "rsid";
pub const FORMAT_VCF: &str = "vcf";
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_SUMMARY: &str = "summary";
pub const FORMAT_ALL: &str = "all";

pub fn create_resolve_cli() -> Command {
    Command::new(RESOLVE_CMD)
        .about("Resolve an rsID, SPDI, HGVS expression or VCF record into every equivalent representation")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("A single variant, e.g. rs328, NC_000008.11:19962212:C:G or NC_000008.11:g.19962213C>G"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("File with one variant per line"),
        )
        .group(
            ArgGroup::new("source")
                .args(["input", "file"])
                .required(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser([
                    FORMAT_SPDI,
                    FORMAT_HGVS,
                    FORMAT_RSID,
                    FORMAT_VCF,
                    FORMAT_JSON,
                    FORMAT_SUMMARY,
                    FORMAT_ALL,
                ])
                .default_value(FORMAT_ALL)
                .help("What to print for each resolved variant"),
        )
        .arg(api_arg())
}
