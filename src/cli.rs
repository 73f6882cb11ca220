use clap::Parser;

use crate::commands::credits::CreditsArgs;

/// Print a citation line for every contributor of a GitHub repository.
///
/// Set GITHUB_TOKEN to raise the API rate limit.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "ghcredits", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub credits: CreditsArgs,

    /// Log requests and pipeline steps to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print the JSON Schema of the config file and exit
    #[arg(long = "config-schema", exclusive = true)]
    pub config_schema: bool,
}
