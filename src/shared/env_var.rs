//! Centralized reader for the environment variables ghcredits consults.
//!
//! Variable names are private constants here; the rest of the crate reads
//! values through the `EnvVars` snapshot.

const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const LOG: &str = "GHCREDITS_LOG";

/// Snapshot of the relevant environment variables at load time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// GitHub API token. Optional; anonymous requests hit the rate limit sooner.
    pub github_token: Option<String>,

    /// tracing filter directive, e.g. "debug" or "ghcredits=trace".
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvVars {
    /// Read the variables from the current process.
    pub fn load() -> Self {
        Self {
            github_token: non_empty_var(GITHUB_TOKEN).map(|t| t.trim().to_string()),
            log: non_empty_var(LOG),
        }
    }
}
