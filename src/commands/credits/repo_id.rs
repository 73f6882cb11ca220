use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_captures;

use super::{CreditsError, Result};

/// A GitHub repository identifier, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CreditsError::InvalidRepo(s.to_string());
        let (_, owner, name) =
            regex_captures!(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$", s.trim()).ok_or_else(invalid)?;

        // "." and ".." would turn into path traversal in the request URL.
        if [owner, name].iter().any(|part| part.chars().all(|c| c == '.')) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
