use crate::infra::github::{RepoContributor, User};

/// A repository contributor ready to be credited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub login: String,
    /// Profile name, or the login when the profile has none. Never empty.
    pub display_name: String,
    pub profile_url: String,
    pub contributions: u64,
}

impl Contributor {
    /// Combine a contributor listing entry with the contributor's profile.
    pub fn from_profile(entry: RepoContributor, user: User) -> Self {
        let display_name = match user.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => entry.login.clone(),
        };

        let profile_url = if user.html_url.is_empty() {
            entry
                .html_url
                .unwrap_or_else(|| format!("https://github.com/{}", entry.login))
        } else {
            user.html_url
        };

        Self {
            login: entry.login,
            display_name,
            profile_url,
            contributions: entry.contributions,
        }
    }
}
