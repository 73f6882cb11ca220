use std::collections::HashSet;
use std::io::Write;

use tracing::debug;

use super::format::{OutputFormat, SortOrder};
use super::models::Contributor;
use super::repo_id::RepoId;
use super::Result;
use crate::infra::github::{ContributorClient, UserClient};

/// List the contributors of `repo` and resolve each one's profile.
///
/// Requests are strictly sequential: the full listing first, then one profile
/// lookup per distinct login in listing order. Any API error aborts the whole
/// collection.
pub async fn collect_contributors<C>(
    client: &C,
    repo: &RepoId,
    order: SortOrder,
) -> Result<Vec<Contributor>>
where
    C: ContributorClient + UserClient,
{
    let listed = client
        .list_contributors(repo.owner(), repo.name())
        .await?;
    debug!(%repo, count = listed.len(), "listed contributors");

    let mut seen = HashSet::new();
    let mut contributors = Vec::with_capacity(listed.len());
    for entry in listed {
        if !seen.insert(entry.login.clone()) {
            debug!(login = %entry.login, "skipping duplicate contributor");
            continue;
        }
        let user = client.get_user(&entry.login).await?;
        let contributor = Contributor::from_profile(entry, user);
        debug!(
            login = %contributor.login,
            name = %contributor.display_name,
            contributions = contributor.contributions,
            "resolved contributor"
        );
        contributors.push(contributor);
    }

    order.apply(&mut contributors);
    Ok(contributors)
}

/// Render one line per contributor, in the given order.
pub fn render_lines(contributors: &[Contributor], format: OutputFormat) -> Vec<String> {
    contributors.iter().map(|c| format.render(c)).collect()
}

/// Write the rendered lines, each terminated by a newline.
pub fn write_report<W: Write>(
    out: &mut W,
    contributors: &[Contributor],
    format: OutputFormat,
) -> std::io::Result<()> {
    for line in render_lines(contributors, format) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
