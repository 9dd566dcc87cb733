//! GitHub contents API types.

use serde::{Deserialize, Serialize};

/// A file fetched from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteFile {
    /// Path of the file within the repository.
    pub path: String,

    /// Decoded file content.
    pub content: String,

    /// Blob SHA of the content, used as the checkin precondition.
    pub sha: String,

    /// Transport encoding reported by the API (normally "base64").
    pub encoding: String,
}

/// Result of committing a file create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResult {
    /// Blob SHA of the committed content, the next checkin precondition.
    pub content_sha: String,

    /// SHA of the commit that was created.
    pub commit_sha: String,

    /// URL of the commit on GitHub.
    pub commit_url: String,

    /// Commit message as recorded.
    pub message: String,
}

/// Repository coordinates and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Default branch name.
    pub default_branch: String,
}
