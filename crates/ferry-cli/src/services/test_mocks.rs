//! Shared mock implementations for service tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use ferry_github::{CommitResult, Error, GitHubApi, RemoteFile, RepoInfo, Result};

/// A recorded `put_file` call.
#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub path: String,
    pub content: String,
    pub message: String,
    pub sha: String,
    pub branch: String,
}

/// Mock GitHub client backed by an in-memory file table.
///
/// Writes observe the same revision-marker precondition as the real API: a
/// put whose `sha` does not match the stored one fails with `StaleSha` and
/// leaves the file untouched. Interior state sits behind `Mutex` because
/// the trait requires `Sync` implementations.
pub struct MockRepoApi {
    /// Remote files keyed by path, holding `(content, sha)`.
    files: Mutex<HashMap<String, (String, String)>>,

    /// Every attempted put, in order.
    puts: Mutex<Vec<RecordedPut>>,

    /// Default branch reported by `repo_info`.
    default_branch: String,

    /// Number of `repo_info` calls observed.
    info_calls: Mutex<usize>,
}

impl MockRepoApi {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            puts: Mutex::new(Vec::new()),
            default_branch: "main".to_string(),
            info_calls: Mutex::new(0),
        }
    }

    /// Seed a remote file with content and a revision marker.
    #[must_use]
    pub fn with_file(self, path: &str, content: &str, sha: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), (content.to_string(), sha.to_string()));
        self
    }

    /// Set the default branch reported by `repo_info`.
    #[must_use]
    pub fn with_default_branch(mut self, branch: &str) -> Self {
        self.default_branch = branch.to_string();
        self
    }

    /// Current content of a seeded file, if present.
    pub fn remote_content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(content, _)| content.clone())
    }

    /// Number of puts attempted, successful or not.
    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    /// The most recent attempted put.
    pub fn last_put(&self) -> Option<RecordedPut> {
        self.puts.lock().unwrap().last().cloned()
    }

    /// Number of `repo_info` calls observed.
    pub fn repo_info_calls(&self) -> usize {
        *self.info_calls.lock().unwrap()
    }
}

impl Default for MockRepoApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubApi for MockRepoApi {
    async fn get_file(&self, path: &str, _reference: &str) -> Result<RemoteFile> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some((content, sha)) => Ok(RemoteFile {
                path: path.to_string(),
                content: content.clone(),
                sha: sha.clone(),
                encoding: "base64".to_string(),
            }),
            None => Err(Error::NotFound(path.to_string())),
        }
    }

    async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitResult> {
        let serial = {
            let mut puts = self.puts.lock().unwrap();
            puts.push(RecordedPut {
                path: path.to_string(),
                content: content.to_string(),
                message: message.to_string(),
                sha: sha.to_string(),
                branch: branch.to_string(),
            });
            puts.len()
        };

        let mut files = self.files.lock().unwrap();
        let Some((_, current_sha)) = files.get(path) else {
            return Err(Error::NotFound(path.to_string()));
        };
        if current_sha != sha {
            return Err(Error::StaleSha(path.to_string()));
        }

        let new_sha = format!("blob-{serial}");
        files.insert(path.to_string(), (content.to_string(), new_sha.clone()));

        Ok(CommitResult {
            content_sha: new_sha,
            commit_sha: format!("commit-{serial}"),
            commit_url: format!("https://example.com/commit/commit-{serial}"),
            message: message.to_string(),
        })
    }

    async fn create_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        _branch: &str,
    ) -> Result<CommitResult> {
        let mut files = self.files.lock().unwrap();
        let new_sha = format!("blob-created-{}", files.len() + 1);
        files.insert(path.to_string(), (content.to_string(), new_sha.clone()));

        Ok(CommitResult {
            content_sha: new_sha,
            commit_sha: "commit-created".to_string(),
            commit_url: "https://example.com/commit/commit-created".to_string(),
            message: message.to_string(),
        })
    }

    async fn list_files(&self, path: &str, _reference: &str) -> Result<Vec<String>> {
        let files = self.files.lock().unwrap();
        let mut names: Vec<String> = files
            .keys()
            .filter(|name| path.is_empty() || name.starts_with(path))
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }

    async fn repo_info(&self) -> Result<RepoInfo> {
        *self.info_calls.lock().unwrap() += 1;
        Ok(RepoInfo {
            owner: "octo".to_string(),
            repo: "site".to_string(),
            default_branch: self.default_branch.clone(),
        })
    }
}
