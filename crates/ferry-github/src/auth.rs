//! Authentication handling for the GitHub API.

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Authentication method for the GitHub API.
#[derive(Debug, Clone)]
pub enum Auth {
    /// Use token from an environment variable.
    EnvVar(String),

    /// Use a specific token.
    Token(SecretString),
}

impl Auth {
    /// Create auth reading from the standard `GITHUB_TOKEN` variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::EnvVar(TOKEN_ENV.into())
    }

    /// Resolve the authentication to a token.
    ///
    /// # Errors
    /// Returns `Error::NoToken` if the token cannot be obtained.
    pub fn resolve(&self) -> Result<SecretString> {
        match self {
            Self::EnvVar(var) => match std::env::var(var) {
                Ok(token) if !token.is_empty() => Ok(SecretString::from(token)),
                _ => Err(Error::NoToken),
            },
            Self::Token(token) => Ok(token.clone()),
        }
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_token_auth() {
        let auth = Auth::Token(SecretString::from("test_token"));
        assert_eq!(auth.resolve().unwrap().expose_secret(), "test_token");
    }

    #[test]
    fn test_env_var_missing_is_no_token() {
        let auth = Auth::EnvVar("FERRY_TEST_TOKEN_THAT_IS_NEVER_SET".into());
        assert!(matches!(auth.resolve(), Err(Error::NoToken)));
    }

    #[test]
    fn test_default_points_at_standard_var() {
        let auth = Auth::default();
        assert!(matches!(auth, Auth::EnvVar(var) if var == TOKEN_ENV));
    }
}
