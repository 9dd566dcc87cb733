//! Checkout service for fetching files with their revision markers.
//!
//! This service encapsulates branch resolution and the fetch itself,
//! accepting a trait-based client for testability.

use anyhow::{Context, Result};
use ferry_github::{GitHubApi, RemoteFile};

/// A fetched file together with the branch it came from.
#[derive(Debug, Clone)]
pub struct CheckedOut {
    /// The file as it exists on the remote, content decoded.
    pub file: RemoteFile,

    /// Branch the file was fetched from (explicit or repository default).
    pub branch: String,
}

/// Service for checkout operations with an injected client.
pub struct CheckoutService<'a, H>
where
    H: GitHubApi,
{
    github: &'a H,
}

impl<'a, H> CheckoutService<'a, H>
where
    H: GitHubApi,
{
    /// Create a new checkout service.
    pub const fn new(github: &'a H) -> Self {
        Self { github }
    }

    /// Resolve the branch to operate on.
    ///
    /// An explicit branch wins; otherwise the repository default branch is
    /// looked up.
    ///
    /// # Errors
    /// Returns error if the default-branch lookup fails.
    pub async fn resolve_branch(&self, branch: Option<&str>) -> Result<String> {
        match branch {
            Some(branch) => Ok(branch.to_string()),
            None => {
                let info = self
                    .github
                    .repo_info()
                    .await
                    .context("Failed to look up the repository default branch")?;
                Ok(info.default_branch)
            }
        }
    }

    /// Fetch `path` from the given branch, or from the repository default.
    ///
    /// # Errors
    /// Returns error if the path does not exist, is not a file, or the
    /// fetch fails.
    pub async fn fetch(&self, path: &str, branch: Option<&str>) -> Result<CheckedOut> {
        let branch = self.resolve_branch(branch).await?;

        let file = self
            .github
            .get_file(path, &branch)
            .await
            .with_context(|| format!("Failed to fetch {path} from {branch}"))?;

        Ok(CheckedOut { file, branch })
    }
}
