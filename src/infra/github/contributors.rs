//! Repository contributor listing.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::client::{GitHubClient, encode_segment};
use super::error::Result;
use super::pagination::next_page_url;

/// Largest page size the contributors endpoint accepts.
const PER_PAGE: u32 = 100;

/// One entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoContributor {
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Trait for contributor listing.
pub trait ContributorClient {
    /// List every contributor of `owner/repo`, following pagination to the end.
    async fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<RepoContributor>>;
}

impl ContributorClient for GitHubClient {
    async fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<RepoContributor>> {
        let mut contributors = Vec::new();
        let mut next = Some(self.url(&format!(
            "/repos/{}/{}/contributors?per_page={PER_PAGE}",
            encode_segment(owner),
            encode_segment(repo)
        )));

        while let Some(url) = next.take() {
            let response = self.get(&url).await?;
            // Empty repositories answer 204 with no body.
            if response.status() == StatusCode::NO_CONTENT {
                break;
            }
            next = next_page_url(response.headers());

            let page: Vec<RepoContributor> = response.json().await?;
            debug!(count = page.len(), has_next = next.is_some(), "contributors page");
            contributors.extend(page);
        }

        Ok(contributors)
    }
}
