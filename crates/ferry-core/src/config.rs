//! Configuration management for ferry.
//!
//! Configuration is environment-driven: owner, repository and an optional
//! API base URL are resolved once at process start into an explicit struct
//! that gets passed into the client constructor. Tests supply a fake lookup
//! instead of mutating the process environment.

/// Environment variable naming the repository owner.
pub const OWNER_ENV: &str = "FERRY_OWNER";

/// Environment variable naming the repository.
pub const REPO_ENV: &str = "FERRY_REPO";

/// Environment variable overriding the API base URL (GitHub Enterprise).
pub const API_URL_ENV: &str = "FERRY_API_URL";

/// Owner assumed when `FERRY_OWNER` is unset.
pub const DEFAULT_OWNER: &str = "coldshore";

/// Repository assumed when `FERRY_REPO` is unset.
pub const DEFAULT_REPO: &str = "coldshore.github.io";

/// Ferry configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Custom API URL for GitHub Enterprise.
    pub api_url: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset, so `FERRY_OWNER=""` falls back to the
    /// default rather than producing requests against an empty owner.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            owner: var(OWNER_ENV).unwrap_or_else(|| DEFAULT_OWNER.into()),
            repo: var(REPO_ENV).unwrap_or_else(|| DEFAULT_REPO.into()),
            api_url: var(API_URL_ENV),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
