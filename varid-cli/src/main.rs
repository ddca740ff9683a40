mod annotate;
mod client;
mod refsnp;
mod resolve;

use anyhow::{Result, anyhow};
use clap::{Arg, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "varid";

    pub const LOG_LEVEL_ARG: &str = "log-level";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find every equivalent rsID, SPDI, HGVS and VCF representation of a variant using NCBI Variation Services.")
        .subcommand_required(true)
        .arg(
            Arg::new(consts::LOG_LEVEL_ARG)
                .long(consts::LOG_LEVEL_ARG)
                .global(true)
                .default_value(consts::DEFAULT_LOG_LEVEL)
                .help("Log filter written to stderr, e.g. 'info' or 'varid_resolve=debug'"),
        )
        .subcommand(resolve::cli::create_resolve_cli())
        .subcommand(refsnp::cli::create_refsnp_cli())
        .subcommand(annotate::cli::create_annotate_cli())
}

/// Install a stderr subscriber so stdout carries only results.
fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let level = matches
        .get_one::<String>(consts::LOG_LEVEL_ARG)
        .map(String::as_str)
        .unwrap_or(consts::DEFAULT_LOG_LEVEL);
    init_tracing(level)?;

    match matches.subcommand() {
        //
        // RESOLVE
        //
        Some((resolve::cli::RESOLVE_CMD, matches)) => {
            resolve::handlers::run_resolve(matches)?;
        }

        //
        // REFSNP
        //
        Some((refsnp::cli::REFSNP_CMD, matches)) => {
            refsnp::handlers::run_refsnp(matches)?;
        }

        //
        // BATCH VCF ANNOTATION
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            annotate::handlers::run_annotate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
