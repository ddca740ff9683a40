use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use varid_services::VariationClient;

pub const API_ARG: &str = "api";

/// `--api`, shared by every subcommand that talks to the service.
pub fn api_arg() -> Arg {
    Arg::new(API_ARG)
        .long(API_ARG)
        .help("Variation Services API root (defaults to $VARIATION_API, then the public NCBI endpoint)")
}

pub fn client_from_matches(matches: &ArgMatches) -> Result<VariationClient> {
    let mut builder = VariationClient::builder();
    if let Some(api_root) = matches.get_one::<String>(API_ARG) {
        builder = builder.with_api_root(api_root.to_string());
    }
    builder
        .finish()
        .context("Failed to create the variation services client")
}
