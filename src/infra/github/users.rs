//! User profile lookup.

use serde::Deserialize;

use super::client::{GitHubClient, encode_segment};
use super::error::Result;

/// The subset of `GET /users/{login}` used for credits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Free-text profile name; `null` when the user never set one.
    #[serde(default)]
    pub name: Option<String>,
    pub html_url: String,
}

/// Trait for user operations.
pub trait UserClient {
    /// Fetch the public profile of `login`.
    async fn get_user(&self, login: &str) -> Result<User>;
}

impl UserClient for GitHubClient {
    async fn get_user(&self, login: &str) -> Result<User> {
        let url = self.url(&format!("/users/{}", encode_segment(login)));
        Ok(self.get(&url).await?.json().await?)
    }
}
