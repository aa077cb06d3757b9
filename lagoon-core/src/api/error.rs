// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Lagoon API layer.

use thiserror::Error;

use crate::media::MediaError;
use crate::session::StorageError;
use crate::transport::TransportError;

/// Unified error type for Lagoon operations.
#[derive(Error, Debug)]
pub enum LagoonError {
    /// Transport operation failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Token persistence failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Image upload failed.
    #[error("media error: {0}")]
    Media(#[from] MediaError),

    /// `initialize()` was called on an already-initialized session.
    #[error("already initialized")]
    AlreadyInitialized,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LagoonError {
    /// The user-facing message for this error.
    ///
    /// Server-reported messages surface verbatim; everything else uses
    /// the display form.
    pub fn message(&self) -> String {
        match self {
            LagoonError::Transport(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for Lagoon operations.
pub type LagoonResult<T> = Result<T, LagoonError>;
