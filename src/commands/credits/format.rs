use clap::ValueEnum;
use schemars::JsonSchema;
use serde::Deserialize;

use super::models::Contributor;

/// How each contributor line is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// reST hyperlink: * `Name <https://github.com/login>`_
    #[default]
    RstLink,
    /// Sphinx ghuser role: * :ghuser:`Name <login>`
    Ghuser,
    /// Bare list item: * Name
    Plain,
}

impl OutputFormat {
    pub fn render(self, contributor: &Contributor) -> String {
        let name = &contributor.display_name;
        match self {
            OutputFormat::RstLink => format!("* `{name} <{}>`_", contributor.profile_url),
            OutputFormat::Ghuser => format!("* :ghuser:`{name} <{}>`", contributor.login),
            OutputFormat::Plain => format!("* {name}"),
        }
    }
}

/// Order in which contributors are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// As returned by the API (most contributions first)
    #[default]
    Api,
    /// Alphabetically by display name, ignoring case
    Name,
}

impl SortOrder {
    /// Reorder in place. The name sort is stable, so equal names keep API order.
    pub fn apply(self, contributors: &mut [Contributor]) {
        match self {
            SortOrder::Api => {}
            SortOrder::Name => contributors.sort_by_key(|c| c.display_name.to_lowercase()),
        }
    }
}
