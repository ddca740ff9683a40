use clap::{Arg, Command};
use varid_services::consts::DEFAULT_ASSEMBLY;

use crate::client::api_arg;

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Assign rsIDs to the records of a VCF file with the batch annotation service")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .help("VCF file to annotate"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where to write the annotated records (defaults to stdout)"),
        )
        .arg(
            Arg::new("assembly")
                .long("assembly")
                .default_value(DEFAULT_ASSEMBLY)
                .help("Assembly accession the records are placed on"),
        )
        .arg(api_arg())
}
