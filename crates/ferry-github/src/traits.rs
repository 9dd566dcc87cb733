//! Trait abstractions for GitHub API operations.
//!
//! This module defines the `GitHubApi` trait which abstracts the contents
//! API operations, enabling dependency injection and testability.

use crate::{CommitResult, RemoteFile, RepoInfo, Result};

/// Trait for GitHub contents API operations.
///
/// This trait abstracts GitHub API calls, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// The client binds `owner` and `repo` at construction, so methods take
/// only the in-repository path and the branch to operate on.
pub trait GitHubApi: Send + Sync {
    /// Fetch a file's content and revision marker. Read-only.
    fn get_file(
        &self,
        path: &str,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<RemoteFile>> + Send;

    /// Commit new content for an existing file, conditioned on `sha`.
    ///
    /// Fails with `StaleSha` when the remote revision no longer matches.
    fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> impl std::future::Future<Output = Result<CommitResult>> + Send;

    /// Commit file content without a revision precondition.
    fn create_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> impl std::future::Future<Output = Result<CommitResult>> + Send;

    /// List file entries at a path. Directory entries are excluded.
    fn list_files(
        &self,
        path: &str,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    /// Get repository metadata, including the default branch.
    fn repo_info(&self) -> impl std::future::Future<Output = Result<RepoInfo>> + Send;
}
