//! Access token storage
//!
//! The login form writes the token issued by the backend; every API call
//! reads it back. A 401 from the backend clears the stored copy.

use crate::config::TuiConfig;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

/// Environment variable that takes precedence over the token file
pub const TOKEN_ENV: &str = "BYP_ACCESS_TOKEN";

const TOKEN_FILE: &str = "access_token";

#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Token store backed by the default data directory
    pub fn new() -> Self {
        Self::with_path(
            TuiConfig::project_dirs().map(|dirs| dirs.data_dir().join(TOKEN_FILE)),
        )
    }

    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Current token, if any
    pub fn get_token(&self) -> Option<String> {
        resolve_token(std::env::var(TOKEN_ENV).ok(), self.read_file())
    }

    /// Persist `token` for later sessions
    pub fn save_token(&self, token: &str) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| anyhow!("No data directory to store the access token in"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, token)
            .with_context(|| format!("Failed to write token file {}", path.display()))?;
        tracing::info!("Stored access token in {}", path.display());
        Ok(())
    }

    /// Forget the stored token; a missing file is not an error
    pub fn clear_token(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::info!("Removed access token {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove token file {}", path.display())),
        }
    }

    fn read_file(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {e}", path.display());
                None
            }
        }
    }
}

fn resolve_token(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
    [from_env, from_file]
        .into_iter()
        .flatten()
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}
