// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token Store
//!
//! Persists the access token under a fixed key in the application data
//! directory, surviving restarts. Writes are atomic (temp file + rename)
//! so a crash never leaves a partial token on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fixed storage key the token lives under.
const TOKEN_FILE: &str = "access_token";

/// Errors that can occur in the token store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// File-backed store for the session access token.
///
/// The in-memory variant keeps the same interface without touching disk,
/// for tests and ephemeral sessions.
#[derive(Debug)]
pub struct TokenStore {
    path: Option<PathBuf>,
    cached: Option<String>,
}

impl TokenStore {
    /// Opens the store inside `data_dir`, creating the directory if
    /// needed and loading any previously persisted token.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(TOKEN_FILE);
        let cached = fs::read_to_string(&path)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        Ok(TokenStore {
            path: Some(path),
            cached,
        })
    }

    /// Creates a store that never touches disk.
    pub fn in_memory() -> Self {
        TokenStore {
            path: None,
            cached: None,
        }
    }

    /// Returns the stored token, if any.
    pub fn load(&self) -> Option<&str> {
        self.cached.as_deref()
    }

    /// Persists a token under the fixed key.
    pub fn save(&mut self, token: &str) -> Result<(), StorageError> {
        if let Some(path) = &self.path {
            atomic_write(path, token.as_bytes())?;
        }
        self.cached = Some(token.to_string());
        Ok(())
    }

    /// Removes the persisted token.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        self.cached = None;
        Ok(())
    }
}

/// Atomic file write (write to temp, then rename).
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
