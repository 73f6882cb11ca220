//! GitHub REST API client module using reqwest.
//!
//! Provides `GitHubClient` plus one trait per group of operations, so command
//! code can run against an in-memory fake as well as the real API.

mod client;
mod contributors;
pub(crate) mod error;
#[cfg(test)]
pub mod mock;
mod pagination;
mod users;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use contributors::{ContributorClient, RepoContributor};
pub use error::GitHubError;
pub use users::{User, UserClient};
