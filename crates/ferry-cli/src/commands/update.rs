//! `ferry update` command - fetch, edit in memory, and check back in.

use anyhow::Result;
use ferry_core::{Config, EditPlan, Replacement};

use super::utils::build_client;
use crate::output;
use crate::services::{UpdateOutcome, UpdateService};

/// Run the update command.
pub fn run(
    file: &str,
    branch: Option<&str>,
    message: Option<&str>,
    find: Option<String>,
    replace: Option<String>,
    append: Option<String>,
    prepend: Option<String>,
) -> Result<()> {
    let plan = EditPlan {
        replace: find.zip(replace).map(|(find, with)| Replacement { find, with }),
        append,
        prepend,
    };

    if plan.is_empty() {
        output::warn("No edits requested - pass --find/--replace, --append, or --prepend");
        return Ok(());
    }

    let message = match message {
        Some(message) => message.to_string(),
        None => format!("Update {file}"),
    };

    let config = Config::from_env();
    let client = build_client(&config)?;

    output::info(&format!(
        "Updating {file} in {}/{}",
        config.owner, config.repo
    ));

    let rt = tokio::runtime::Runtime::new()?;
    let service = UpdateService::new(&client);
    let outcome = rt.block_on(service.apply(file, &plan, &message, branch))?;

    match outcome {
        UpdateOutcome::NoChange { branch } => {
            output::info(&format!(
                "No changes for {file} on {branch} - nothing to commit"
            ));
        }
        UpdateOutcome::Committed { commit, branch } => {
            output::success(&format!(
                "Updated {file} as {} ({branch})",
                output::short_sha(&commit.commit_sha)
            ));
            output::essential(&commit.commit_url);
        }
    }

    Ok(())
}
