//! GitHub API error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid GitHub token: {0}")]
    InvalidToken(String),

    #[error("Invalid GitHub API URL: {0}")]
    InvalidBaseUrl(String),

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", format_api_error(.status, .message))]
    Api { status: StatusCode, message: String },

    #[error("{}", format_rate_limit(.reset))]
    RateLimited {
        /// Unix timestamp at which the rate limit window resets, if reported.
        reset: Option<u64>,
    },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

fn format_api_error(status: &StatusCode, message: &str) -> String {
    if message.is_empty() {
        format!("GitHub API error (HTTP {})", status.as_u16())
    } else {
        format!("GitHub API error: {message} (HTTP {})", status.as_u16())
    }
}

fn format_rate_limit(reset: &Option<u64>) -> String {
    let mut msg = "GitHub API rate limit exceeded".to_string();
    if let Some(reset) = reset {
        msg.push_str(&format!(" (resets at unix time {reset})"));
    }
    msg.push_str("; set GITHUB_TOKEN to raise the limit");
    msg
}
