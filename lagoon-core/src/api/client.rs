// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lagoon Orchestrator
//!
//! Main entry point for the Lagoon API. Owns the transport, the token
//! store, the event dispatcher and the single [`Store`] every cache lives
//! in. All mutating operations follow the same sequence: mark the owning
//! cache loading, perform the request, apply the success patch or record
//! the failure. There is no speculative local mutation.
//!
//! # Example
//!
//! ```ignore
//! use lagoon_core::api::{Lagoon, LagoonConfig};
//!
//! let mut lagoon = Lagoon::new(LagoonConfig::new(
//!     "https://api.example.com/api",
//!     "/home/me/.local/share/lagoon",
//! ))?;
//!
//! // Establish the session from a persisted token, if any
//! lagoon.initialize().await?;
//!
//! if !lagoon.store().session.is_authenticated {
//!     lagoon.login("alice@example.com", "hunter2").await?;
//! }
//!
//! lagoon.fetch_posts(&user_id, 1).await?;
//! for post in lagoon.store().post.current_page() {
//!     println!("{}", post.content);
//! }
//! ```

use std::sync::Arc;

use crate::media::MediaUploader;
use crate::session::{SessionState, TokenStore};
use crate::store::Store;
use crate::transport::{ApiClient, Backend, HttpBackend};

use super::config::LagoonConfig;
use super::error::LagoonResult;
use super::events::{EventDispatcher, EventHandler};

/// Main Lagoon orchestrator.
///
/// Generic over the transport [`Backend`] so tests can drive the full
/// dispatch → network → patch sequence against a mock.
pub struct Lagoon<B: Backend = HttpBackend> {
    pub(crate) config: LagoonConfig,
    pub(crate) api: ApiClient<B>,
    pub(crate) media: MediaUploader,
    pub(crate) tokens: TokenStore,
    pub(crate) store: Store,
    pub(crate) events: EventDispatcher,
}

impl Lagoon<HttpBackend> {
    /// Creates a Lagoon instance with the production HTTP backend and an
    /// on-disk token store under the configured data directory.
    pub fn new(config: LagoonConfig) -> LagoonResult<Self> {
        let backend = HttpBackend::new(config.request_timeout)?;
        Lagoon::with_backend(config, backend)
    }
}

impl<B: Backend> Lagoon<B> {
    /// Creates a Lagoon instance with a custom backend.
    pub fn with_backend(config: LagoonConfig, backend: B) -> LagoonResult<Self> {
        let tokens = TokenStore::open(&config.data_dir)?;
        Self::assemble(config, backend, tokens)
    }

    /// Creates a Lagoon instance that persists nothing (for testing).
    pub fn in_memory(config: LagoonConfig, backend: B) -> LagoonResult<Self> {
        Self::assemble(config, backend, TokenStore::in_memory())
    }

    fn assemble(config: LagoonConfig, backend: B, tokens: TokenStore) -> LagoonResult<Self> {
        let api = ApiClient::new(backend, config.base_url.clone());
        let media = MediaUploader::new(config.media.clone())?;
        Ok(Lagoon {
            config,
            api,
            media,
            tokens,
            store: Store::default(),
            events: EventDispatcher::new(),
        })
    }

    /// Returns the client store for reading.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the session state for reading.
    pub fn session(&self) -> &SessionState {
        &self.store.session
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LagoonConfig {
        &self.config
    }

    /// Returns the transport backend (mock assertions in tests).
    pub fn backend(&self) -> &B {
        self.api.backend()
    }

    /// Adds an event handler.
    pub fn add_event_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }
}
