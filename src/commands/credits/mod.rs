//! Contributor credits: list a repository's contributors and print one
//! citation line for each.

mod format;
mod models;
mod report;
mod repo_id;

use clap::Args;
use thiserror::Error;
use tracing::debug;

use crate::infra::github::{ContributorClient, GitHubClient, GitHubError, UserClient};
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;

pub use format::{OutputFormat, SortOrder};
use report::{collect_contributors, write_report};
pub use repo_id::RepoId;

#[derive(Error, Debug)]
pub enum CreditsError {
    #[error("Invalid repository format: {0}. Expected owner/name")]
    InvalidRepo(String),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CreditsError>;

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreditsArgs {
    /// Target repository (owner/name)
    #[arg(short = 'R', long = "repo", value_name = "OWNER/NAME")]
    pub repo: Option<RepoId>,

    /// Output line format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Sort by display name (same as --order name)
    #[arg(short = 's', long = "sort", conflicts_with = "order")]
    pub sort: bool,

    /// Output order
    #[arg(long = "order", value_enum)]
    pub order: Option<SortOrder>,

    /// GitHub REST API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo: RepoId,
    pub format: OutputFormat,
    pub order: SortOrder,
    pub api_url: String,
}

impl CreditsArgs {
    pub fn resolve(&self, config: &Config) -> Result<Settings> {
        let repo = match &self.repo {
            Some(repo) => repo.clone(),
            None => config.repo.parse()?,
        };
        let order = if self.sort {
            SortOrder::Name
        } else {
            self.order.unwrap_or(config.order)
        };

        Ok(Settings {
            repo,
            format: self.format.unwrap_or(config.format),
            order,
            api_url: self
                .api_url
                .clone()
                .unwrap_or_else(|| config.api_url.clone()),
        })
    }
}

pub async fn run(args: &CreditsArgs, config: &Config, env: &EnvVars) -> anyhow::Result<()> {
    let settings = args.resolve(config)?;
    debug!(?settings, "resolved settings");

    if env.github_token.is_none() {
        debug!("GITHUB_TOKEN not set, sending unauthenticated requests");
    }
    let client = GitHubClient::new(&settings.api_url, env.github_token.as_deref())?;
    run_impl(&settings, &client).await?;
    Ok(())
}

async fn run_impl<C>(settings: &Settings, client: &C) -> Result<()>
where
    C: ContributorClient + UserClient,
{
    let contributors = collect_contributors(client, &settings.repo, settings.order).await?;

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, &contributors, settings.format)?;
    Ok(())
}
