//! tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries nothing but credit lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: `--verbose` wins, then GHCREDITS_LOG, then warn.
fn filter_directive(verbose: bool, env_filter: Option<&str>) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else {
        env_filter.unwrap_or(DEFAULT_FILTER)
    }
}

/// Install the global subscriber. Invalid directives fall back to the default.
pub fn init(verbose: bool, env_filter: Option<&str>) {
    let directive = filter_directive(verbose, env_filter);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {directive:?}: {e}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
