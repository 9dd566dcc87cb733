//! `ferry checkout` command - fetch a file and record its revision marker.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ferry_core::{Config, Sidecar};

use super::utils::build_client;
use crate::output;
use crate::services::CheckoutService;

/// Run the checkout command.
pub fn run(file: &str, branch: Option<&str>, output_path: Option<&Path>) -> Result<()> {
    let config = Config::from_env();
    let client = build_client(&config)?;

    output::info(&format!(
        "Fetching {file} from {}/{}",
        config.owner, config.repo
    ));

    let rt = tokio::runtime::Runtime::new()?;
    let service = CheckoutService::new(&client);
    let checked = rt.block_on(service.fetch(file, branch))?;

    let local_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => local_name(&checked.file.path),
    };

    std::fs::write(&local_path, &checked.file.content)
        .with_context(|| format!("Failed to write {}", local_path.display()))?;

    let sidecar = Sidecar::new(&checked.file.path, &checked.file.sha, &checked.branch);
    sidecar.save(&local_path)?;

    output::success(&format!(
        "Checked out {} at {} ({})",
        checked.file.path,
        output::short_sha(&checked.file.sha),
        checked.branch
    ));
    output::detail(&format!("  content: {}", local_path.display()));
    output::detail(&format!(
        "  sidecar: {}",
        Sidecar::path_for(&local_path).display()
    ));

    Ok(())
}

/// Local file name for a remote path: its final path component.
fn local_name(remote_path: &str) -> PathBuf {
    let name = remote_path.rsplit('/').next().unwrap_or(remote_path);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_strips_directories() {
        assert_eq!(local_name("docs/guide/index.html"), PathBuf::from("index.html"));
    }

    #[test]
    fn test_local_name_keeps_bare_names() {
        assert_eq!(local_name("page.html"), PathBuf::from("page.html"));
    }
}
