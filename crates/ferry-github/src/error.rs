//! Error types for ferry-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed.
    #[error("GitHub authentication failed - check that GITHUB_TOKEN is valid")]
    AuthenticationFailed,

    /// Token not found.
    #[error("no GitHub token found - set GITHUB_TOKEN")]
    NoToken,

    /// API rate limit exceeded.
    #[error("GitHub API rate limit exceeded - wait and try again")]
    RateLimited,

    /// Remote path does not exist on the requested branch.
    #[error("remote path not found: {0}")]
    NotFound(String),

    /// Remote path exists but is a directory, symlink, or submodule.
    #[error("remote path is not a file: {0}")]
    NotAFile(String),

    /// Remote file exists but the API returned no content payload.
    #[error("remote file has no content: {0}")]
    EmptyContent(String),

    /// The checkin precondition no longer matches the remote revision.
    #[error("remote file changed since checkout: {0} - check out again and retry")]
    StaleSha(String),

    /// API error with status code.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base64 decoding error.
    #[error("failed to decode file content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded content is not valid UTF-8.
    #[error("file content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
