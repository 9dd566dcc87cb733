//! Shared helpers for command implementations.

use anyhow::{Context, Result};
use ferry_core::Config;
use ferry_github::{Auth, GitHubClient};

/// Build a GitHub client from resolved configuration.
///
/// Honors the API URL override so the same binary works against GitHub
/// Enterprise installs.
pub fn build_client(config: &Config) -> Result<GitHubClient> {
    let auth = Auth::from_env();

    let client = match &config.api_url {
        Some(url) => GitHubClient::with_base_url(&auth, url, &config.owner, &config.repo),
        None => GitHubClient::new(&auth, &config.owner, &config.repo),
    }
    .context("Failed to create GitHub client")?;

    Ok(client)
}
