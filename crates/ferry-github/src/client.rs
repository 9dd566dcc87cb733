//! GitHub contents API client.

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::auth::Auth;
use crate::error::{Error, Result};
use crate::traits::GitHubApi;
use crate::types::{CommitResult, RemoteFile, RepoInfo};

// === Internal API response types (shared across methods) ===

/// Internal representation of a contents response, which is an array for a
/// directory and a single object for anything else.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ApiContents {
    /// Directory listing.
    Entries(Vec<ApiEntry>),
    /// Single file, symlink, or submodule.
    Object(ApiObject),
}

/// Internal representation of a single contents object from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiObject {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    sha: String,
    content: Option<String>,
    encoding: Option<String>,
}

impl ApiObject {
    /// Convert API response to domain type, decoding the payload.
    ///
    /// GitHub wraps base64 payloads with embedded newlines, so whitespace is
    /// stripped before decoding.
    fn into_remote_file(self) -> Result<RemoteFile> {
        if self.kind != "file" {
            return Err(Error::NotAFile(self.path));
        }

        let raw = match self.content.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(Error::EmptyContent(self.path)),
        };

        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = general_purpose::STANDARD.decode(compact)?;
        let content = String::from_utf8(bytes)?;

        Ok(RemoteFile {
            path: self.path,
            content,
            sha: self.sha,
            encoding: self.encoding.unwrap_or_else(|| "base64".to_string()),
        })
    }
}

/// Internal representation of a directory entry from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiEntry {
    #[serde(rename = "type")]
    kind: String,
    path: String,
}

/// Request body for a contents PUT (create or update).
#[derive(serde::Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Internal representation of a contents PUT response.
#[derive(serde::Deserialize)]
struct ApiCommitResponse {
    content: ApiCommitContent,
    commit: ApiCommit,
}

#[derive(serde::Deserialize)]
struct ApiCommitContent {
    sha: String,
}

#[derive(serde::Deserialize)]
struct ApiCommit {
    sha: String,
    html_url: String,
    message: String,
}

impl ApiCommitResponse {
    /// Convert API response to domain type.
    fn into_commit_result(self) -> CommitResult {
        CommitResult {
            content_sha: self.content.sha,
            commit_sha: self.commit.sha,
            commit_url: self.commit.html_url,
            message: self.commit.message,
        }
    }
}

/// GitHub contents API client, bound to a single repository.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    owner: String,
    repo: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new client for `owner/repo`.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth, owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL, owner, repo)
    }

    /// Create a new client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn with_base_url(
        auth: &Auth,
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self> {
        let token = auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("ferry-cli"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            owner: owner.into(),
            repo: repo.into(),
            token,
        })
    }

    /// API path for the contents endpoint of `path`.
    fn contents_url(&self, path: &str) -> String {
        format!("/repos/{}/{}/contents/{path}", self.owner, self.repo)
    }

    /// API path for the repository itself.
    fn repo_url(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.repo)
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PUT request.
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        // Handle error responses
        let status_code = status.as_u16();

        match status_code {
            401 => Err(Error::AuthenticationFailed),
            403 if response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0") =>
            {
                Err(Error::RateLimited)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::ApiError {
                    status: status_code,
                    message: text,
                })
            }
        }
    }

    /// Shared implementation for `put_file` and `create_file`.
    ///
    /// A 409 response means the supplied `sha` no longer matches the remote
    /// revision; it only maps to `StaleSha` when a precondition was sent.
    async fn put_contents(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
        branch: &str,
    ) -> Result<CommitResult> {
        let body = PutContents {
            message,
            content: general_purpose::STANDARD.encode(content),
            branch,
            sha,
        };

        let response: ApiCommitResponse = self
            .put(&self.contents_url(path), &body)
            .await
            .map_err(|e| match e {
                Error::ApiError { status: 409, .. } if sha.is_some() => {
                    Error::StaleSha(path.to_string())
                }
                Error::ApiError { status: 404, .. } => Error::NotFound(path.to_string()),
                other => other,
            })?;

        Ok(response.into_commit_result())
    }

    // === Contents Operations ===

    /// Fetch a file's content and revision marker.
    ///
    /// # Errors
    /// Returns `NotFound` if the path does not exist on `reference`,
    /// `NotAFile` if it names a directory, symlink, or submodule, and
    /// `EmptyContent` if the API returns no payload for it.
    pub async fn get_file(&self, path: &str, reference: &str) -> Result<RemoteFile> {
        let contents: ApiContents = self
            .get(&format!("{}?ref={reference}", self.contents_url(path)))
            .await
            .map_err(|e| match e {
                Error::ApiError { status: 404, .. } => Error::NotFound(path.to_string()),
                other => other,
            })?;

        match contents {
            ApiContents::Object(object) => object.into_remote_file(),
            ApiContents::Entries(_) => Err(Error::NotAFile(path.to_string())),
        }
    }

    /// Commit new content for an existing file, conditioned on `sha`.
    ///
    /// # Errors
    /// Returns `StaleSha` if the remote revision no longer matches `sha`.
    pub async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitResult> {
        self.put_contents(path, content, message, Some(sha), branch)
            .await
    }

    /// Commit file content without a revision precondition.
    ///
    /// # Errors
    /// Returns error if the commit fails.
    pub async fn create_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<CommitResult> {
        self.put_contents(path, content, message, None, branch)
            .await
    }

    /// List file entries at a path (the repository root for an empty path).
    ///
    /// Directory entries are excluded. A path naming a single file yields
    /// that file alone; a single non-file object yields nothing.
    ///
    /// # Errors
    /// Returns `NotFound` if the path does not exist on `reference`.
    pub async fn list_files(&self, path: &str, reference: &str) -> Result<Vec<String>> {
        let contents: ApiContents = self
            .get(&format!("{}?ref={reference}", self.contents_url(path)))
            .await
            .map_err(|e| match e {
                Error::ApiError { status: 404, .. } => Error::NotFound(path.to_string()),
                other => other,
            })?;

        let files = match contents {
            ApiContents::Entries(entries) => entries
                .into_iter()
                .filter(|entry| entry.kind == "file")
                .map(|entry| entry.path)
                .collect(),
            ApiContents::Object(object) if object.kind == "file" => vec![object.path],
            ApiContents::Object(_) => Vec::new(),
        };

        Ok(files)
    }

    // === Repository Operations ===

    /// Get repository metadata, including the default branch.
    ///
    /// # Errors
    /// Returns error if the repository is inaccessible.
    pub async fn repo_info(&self) -> Result<RepoInfo> {
        #[derive(serde::Deserialize)]
        struct ApiRepo {
            default_branch: String,
        }

        let info: ApiRepo = self.get(&self.repo_url()).await?;

        Ok(RepoInfo {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            default_branch: info.default_branch,
        })
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

// === Trait Implementation ===

impl GitHubApi for GitHubClient {
    async fn get_file(&self, path: &str, reference: &str) -> Result<RemoteFile> {
        self.get_file(path, reference).await
    }

    async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitResult> {
        self.put_file(path, content, message, sha, branch).await
    }

    async fn create_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<CommitResult> {
        self.create_file(path, content, message, branch).await
    }

    async fn list_files(&self, path: &str, reference: &str) -> Result<Vec<String>> {
        self.list_files(path, reference).await
    }

    async fn repo_info(&self) -> Result<RepoInfo> {
        self.repo_info().await
    }
}
