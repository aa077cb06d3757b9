// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration Types

use std::path::PathBuf;
use std::time::Duration;

use crate::media::MediaConfig;

/// Default number of posts per profile page.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 10;

/// Default number of comments per page under a post.
pub const DEFAULT_COMMENTS_PER_PAGE: u32 = 5;

/// Default number of users per listing page.
pub const DEFAULT_USERS_PER_PAGE: u32 = 12;

/// Configuration for a [`crate::api::Lagoon`] instance.
#[derive(Debug, Clone)]
pub struct LagoonConfig {
    /// Base URL of the REST backend, e.g. `https://api.example.com/api`.
    pub base_url: String,
    /// Directory for persisted client data (the access token).
    pub data_dir: PathBuf,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
    /// Page size for post fetches.
    pub posts_per_page: u32,
    /// Page size for comment fetches.
    pub comments_per_page: u32,
    /// Page size for user-listing fetches.
    pub users_per_page: u32,
    /// Asset-host configuration for image uploads.
    pub media: MediaConfig,
}

impl Default for LagoonConfig {
    fn default() -> Self {
        LagoonConfig {
            base_url: String::new(),
            data_dir: PathBuf::from("lagoon-data"),
            request_timeout: Duration::from_secs(30),
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            comments_per_page: DEFAULT_COMMENTS_PER_PAGE,
            users_per_page: DEFAULT_USERS_PER_PAGE,
            media: MediaConfig::default(),
        }
    }
}

impl LagoonConfig {
    /// Creates a config for the given backend and data directory.
    pub fn new(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        LagoonConfig {
            base_url: base_url.into(),
            data_dir: data_dir.into(),
            ..LagoonConfig::default()
        }
    }
}
