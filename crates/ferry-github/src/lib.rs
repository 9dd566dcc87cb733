//! # ferry-github
//!
//! GitHub contents API integration for Ferry, providing file checkout,
//! checkin, and listing over the REST v3 endpoints.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod auth;
mod client;
mod error;
mod traits;
mod types;

pub use auth::Auth;
pub use client::GitHubClient;
pub use error::{Error, Result};
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use traits::GitHubApi;
pub use types::{CommitResult, RemoteFile, RepoInfo};
