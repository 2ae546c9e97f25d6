//! Author identity stamped into generated files
//!
//! The record is persisted as `author_info.json` under the root config directory and
//! is reloaded from disk on every read.

use crate::fs;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the author record inside the root config directory
pub const AUTHOR_FILE_NAME: &str = "author_info.json";

/// Owner and co-owner of generated files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub co_owner: String,
}

impl AuthorInfo {
    pub fn new(owner: impl Into<String>, co_owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            co_owner: co_owner.into(),
        }
    }
}

/// Errors raised while loading or saving the author record
#[derive(Debug, Error)]
pub enum AuthorError {
    #[error("Failed to parse author info {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize author info: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AuthorResult<T> = std::result::Result<T, AuthorError>;

/// Loads and saves the author record under a root config directory
#[derive(Debug, Clone)]
pub struct AuthorRegistry {
    root: PathBuf,
}

impl AuthorRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Registry rooted at the resolved config directory (see [`crate::paths::root_dir`])
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(crate::paths::root_dir()?))
    }

    /// Full path of `author_info.json`
    pub fn config_path(&self) -> PathBuf {
        self.root.join(AUTHOR_FILE_NAME)
    }

    /// Load the stored record
    ///
    /// Falls back to the empty record when nothing is saved or the JSON does not have
    /// the record's shape. Malformed JSON is an error.
    pub fn load(&self) -> AuthorResult<AuthorInfo> {
        let path = self.config_path();
        if !fs::is_file(&path) {
            tracing::debug!(path = %path.display(), "no author info saved, using defaults");
            return Ok(AuthorInfo::default());
        }

        let content = fs::read_text(&path)?;
        match serde_json::from_str(&content) {
            Ok(info) => {
                tracing::debug!(path = %path.display(), "loaded author info");
                Ok(info)
            }
            Err(err) if err.classify() == Category::Data => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "author info has an unexpected shape, using defaults"
                );
                Ok(AuthorInfo::default())
            }
            Err(source) => Err(AuthorError::Parse { path, source }),
        }
    }

    /// Overwrite the stored record; `None` resets it to the empty record
    pub fn save(&self, info: Option<&AuthorInfo>) -> AuthorResult<()> {
        let default = AuthorInfo::default();
        let info = info.unwrap_or(&default);

        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string(info).map_err(AuthorError::Serialize)?;
        let path = self.config_path();
        fs::write_text(&path, &content)?;
        tracing::debug!(path = %path.display(), "saved author info");
        Ok(())
    }

    pub fn reset(&self) -> AuthorResult<()> {
        self.save(None)
    }
}
