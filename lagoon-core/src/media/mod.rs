// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Media Upload
//!
//! Post and profile images live on an external asset host, not the
//! backend: local files are uploaded first and only the resulting URL is
//! sent to the API. Whether an upload happens is a type question, not a
//! content check — [`ImageSource::Url`] passes through untouched,
//! [`ImageSource::File`] is read and uploaded.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default cap on upload size (5 MB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// An image input for a post or profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An already-hosted image URL.
    Url(String),
    /// A local file to upload.
    File(PathBuf),
}

/// Asset-host configuration.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Upload endpoint URL. Empty disables uploads.
    pub upload_url: String,
    /// Unsigned upload preset sent with every upload.
    pub upload_preset: String,
    /// Maximum file size accepted for upload, in bytes.
    pub max_upload_size: u64,
    /// Upload request timeout.
    pub timeout: Duration,
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            upload_url: String::new(),
            upload_preset: String::new(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Errors that can occur while resolving an image.
#[derive(Debug, Error)]
pub enum MediaError {
    /// No upload URL is configured.
    #[error("media uploads are not configured")]
    NotConfigured,

    /// The file could not be read.
    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size cap.
    #[error("image too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Maximum allowed size in bytes.
        max: u64,
    },

    /// The asset host rejected the upload.
    #[error("upload failed with HTTP {0}")]
    Http(u16),

    /// Network/request error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The asset host's response carried no hosted URL.
    #[error("upload response missing hosted URL")]
    MissingUrl,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Uploads local image files to the configured asset host.
pub struct MediaUploader {
    client: reqwest::Client,
    config: MediaConfig,
}

impl MediaUploader {
    /// Creates an uploader from config.
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(MediaUploader { client, config })
    }

    /// Resolves an optional image input to an optional hosted URL.
    ///
    /// `None` stays `None`, URLs pass through, files are uploaded.
    pub async fn resolve(&self, image: Option<&ImageSource>) -> Result<Option<String>, MediaError> {
        match image {
            None => Ok(None),
            Some(ImageSource::Url(url)) => Ok(Some(url.clone())),
            Some(ImageSource::File(path)) => self.upload(path.clone()).await.map(Some),
        }
    }

    async fn upload(&self, path: PathBuf) -> Result<String, MediaError> {
        if self.config.upload_url.is_empty() {
            return Err(MediaError::NotConfigured);
        }

        let data = std::fs::read(&path)?;
        if data.len() as u64 > self.config.max_upload_size {
            return Err(MediaError::TooLarge {
                size: data.len() as u64,
                max: self.config.max_upload_size,
            });
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .part(
                "file",
                reqwest::multipart::Part::bytes(data).file_name(filename),
            );

        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MediaError::Http(response.status().as_u16()));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url.ok_or(MediaError::MissingUrl)
    }
}
