//! Sidecar metadata persisted next to checked-out files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Suffix appended to the content path to form the sidecar path.
pub const SIDECAR_SUFFIX: &str = ".meta.json";

const TMP_SUFFIX: &str = ".tmp";

/// Checkout metadata stored beside the local copy of a remote file.
///
/// The record carries everything a later checkin needs: where the file
/// lives in the repository, which branch it came from, and the content
/// revision used as the update precondition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidecar {
    /// Path of the file within the repository.
    pub path: String,

    /// Content revision at checkout, sent back as the checkin precondition.
    pub sha: String,

    /// Branch the file was checked out from.
    pub branch: String,

    /// When the checkout happened.
    pub checked_out_at: DateTime<Utc>,

    /// Commit produced by the most recent checkin, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,

    /// When the most recent checkin happened, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Sidecar {
    /// Create a fresh record for a file checked out just now.
    pub fn new(path: impl Into<String>, sha: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sha: sha.into(),
            branch: branch.into(),
            checked_out_at: Utc::now(),
            last_commit: None,
            last_updated_at: None,
        }
    }

    /// Sidecar path for a given content path.
    #[must_use]
    pub fn path_for(content_path: &Path) -> PathBuf {
        let mut name = OsString::from(content_path.as_os_str());
        name.push(SIDECAR_SUFFIX);
        PathBuf::from(name)
    }

    /// Load the sidecar record for `content_path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingSidecar` when no record exists, or an error
    /// if the file cannot be read or parsed.
    pub fn load(content_path: &Path) -> Result<Self> {
        let sidecar_path = Self::path_for(content_path);
        if !sidecar_path.exists() {
            return Err(Error::MissingSidecar(sidecar_path));
        }

        let raw = fs::read_to_string(&sidecar_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the record next to `content_path`.
    ///
    /// Writes to a scratch file first and renames it into place so an
    /// interrupted process can't leave a torn record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self, content_path: &Path) -> Result<()> {
        let sidecar_path = Self::path_for(content_path);

        let mut tmp_name = OsString::from(sidecar_path.as_os_str());
        tmp_name.push(TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        let raw = serde_json::to_string_pretty(self)?;
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &sidecar_path)?;

        Ok(())
    }

    /// Record a successful checkin: the new content revision becomes the
    /// next precondition and the commit is remembered.
    pub fn record_commit(&mut self, content_sha: impl Into<String>, commit_sha: impl Into<String>) {
        self.sha = content_sha.into();
        self.last_commit = Some(commit_sha.into());
        self.last_updated_at = Some(Utc::now());
    }
}
