// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport Error Types

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server rejected the request and reported a message.
    ///
    /// The display form is the bare message so it can be surfaced to the
    /// user as-is; the status code stays available on the variant.
    #[error("{message}")]
    Api {
        /// HTTP status code of the rejected request.
        status: u16,
        /// Message extracted from the server's error envelope.
        message: String,
    },

    /// Network/request error from the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// A successful response carried no `data` payload.
    #[error("response missing data payload")]
    MissingData,
}

impl TransportError {
    /// Returns the server-reported status code, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
