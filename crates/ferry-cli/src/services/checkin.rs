//! Checkin service for committing local edits back to the repository.
//!
//! The commit is conditioned on the revision marker recorded at checkout,
//! so a concurrent remote change surfaces as a stale-revision error instead
//! of being silently overwritten.

use anyhow::{Context, Result};
use ferry_core::Sidecar;
use ferry_github::{CommitResult, GitHubApi};

/// A successful checkin: the created commit and the branch it landed on.
#[derive(Debug, Clone)]
pub struct Submitted {
    /// The commit created on the remote.
    pub commit: CommitResult,

    /// Branch the commit landed on.
    pub branch: String,
}

/// Service for checkin operations with an injected client.
pub struct CheckinService<'a, H>
where
    H: GitHubApi,
{
    github: &'a H,
}

impl<'a, H> CheckinService<'a, H>
where
    H: GitHubApi,
{
    /// Create a new checkin service.
    pub const fn new(github: &'a H) -> Self {
        Self { github }
    }

    /// Commit `content` for the file described by `sidecar`.
    ///
    /// Branch precedence: an explicit branch wins, then the branch recorded
    /// at checkout, then the repository default.
    ///
    /// # Errors
    /// Returns error if the remote revision no longer matches the sidecar's
    /// marker, or if the commit fails.
    pub async fn submit(
        &self,
        sidecar: &Sidecar,
        content: &str,
        message: &str,
        branch: Option<&str>,
    ) -> Result<Submitted> {
        let branch = self.resolve_branch(branch, sidecar).await?;

        let commit = self
            .github
            .put_file(&sidecar.path, content, message, &sidecar.sha, &branch)
            .await
            .with_context(|| format!("Failed to check in {}", sidecar.path))?;

        Ok(Submitted { commit, branch })
    }

    async fn resolve_branch(&self, explicit: Option<&str>, sidecar: &Sidecar) -> Result<String> {
        if let Some(branch) = explicit {
            return Ok(branch.to_string());
        }

        if !sidecar.branch.is_empty() {
            return Ok(sidecar.branch.clone());
        }

        let info = self
            .github
            .repo_info()
            .await
            .context("Failed to look up the repository default branch")?;
        Ok(info.default_branch)
    }
}
