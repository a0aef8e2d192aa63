use std::path::PathBuf;

use anyhow::{Context, Result};

/// Token file name in the data directory
const TOKEN_FILE: &str = "access_token";

/// Durable storage for the session token: one file holding the raw
/// token string. A missing file, or one holding only whitespace, means
/// unauthenticated.
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Read the persisted token, if any.
    pub fn load(&self) -> Result<Option<String>> {
        let path = self.token_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read token file {}", path.display()))?;
        let token = contents.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    /// Persist a token, creating the data directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.token_path();
        std::fs::write(&path, token)
            .with_context(|| format!("Failed to write token file {}", path.display()))?;
        Ok(())
    }

    /// Remove the persisted token. Idempotent.
    pub fn clear(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove token file {}", path.display()))?;
        }
        Ok(())
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }
}
