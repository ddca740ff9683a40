use clap::{Arg, ArgAction, Command};

use crate::client::api_arg;

pub const REFSNP_CMD: &str = "refsnp";

pub fn create_refsnp_cli() -> Command {
    Command::new(REFSNP_CMD)
        .about("Fetch the dbSNP RefSNP record of an rsID")
        .arg(
            Arg::new("identifier")
                .long("identifier")
                .short('i')
                .required(true)
                .help("rsID, with or without the 'rs' prefix"),
        )
        .arg(
            Arg::new("attributes")
                .long("attributes")
                .action(ArgAction::SetTrue)
                .help("Print selected record attributes instead of the raw record"),
        )
        .arg(api_arg())
}
