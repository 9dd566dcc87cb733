//! `ferry checkin` command - commit local edits back to the repository.

use std::path::Path;

use anyhow::{Context, Result};
use ferry_core::{Config, Error as CoreError, Sidecar};

use super::utils::build_client;
use crate::output;
use crate::services::CheckinService;

/// Run the checkin command.
pub fn run(file: &Path, message: Option<&str>, branch: Option<&str>) -> Result<()> {
    // Local state is validated before any network traffic, so a missing
    // checkout fails fast with guidance instead of a request error.
    if !file.exists() {
        return Err(CoreError::MissingContent(file.to_path_buf()).into());
    }
    let mut sidecar = Sidecar::load(file)?;
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let message = match message {
        Some(message) => message.to_string(),
        None => format!("Update {}", sidecar.path),
    };

    let config = Config::from_env();
    let client = build_client(&config)?;

    output::info(&format!(
        "Checking in {} at {}",
        sidecar.path,
        output::short_sha(&sidecar.sha)
    ));

    let rt = tokio::runtime::Runtime::new()?;
    let service = CheckinService::new(&client);
    let submitted = rt.block_on(service.submit(&sidecar, &content, &message, branch))?;

    sidecar.record_commit(&submitted.commit.content_sha, &submitted.commit.commit_sha);
    sidecar.branch = submitted.branch;
    sidecar.save(file)?;

    output::success(&format!(
        "Checked in {} as {} ({})",
        sidecar.path,
        output::short_sha(&submitted.commit.commit_sha),
        sidecar.branch
    ));
    output::detail(&format!(
        "  new revision: {}",
        output::short_sha(&sidecar.sha)
    ));
    output::essential(&submitted.commit.commit_url);

    Ok(())
}
