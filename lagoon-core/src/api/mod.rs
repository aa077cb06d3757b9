// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lagoon API Layer
//!
//! High-level API for the Lagoon social-networking client core.
//!
//! # Overview
//!
//! The API layer provides the facade the view layer talks to. It
//! coordinates:
//! - Session bootstrap and authentication
//! - The per-feature entity caches (posts, comments, friends, users)
//! - Transport and token persistence
//! - Event dispatch for notices and session transitions
//!
//! # Example
//!
//! ```ignore
//! use lagoon_core::api::{Lagoon, LagoonConfig};
//!
//! let mut lagoon = Lagoon::new(LagoonConfig::new(base_url, data_dir))?;
//! lagoon.initialize().await?;
//! lagoon.login("alice@example.com", "hunter2").await?;
//!
//! let me = lagoon.session().user.clone().unwrap();
//! lagoon.create_post(&me.id, "hello lagoon", None).await?;
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Unified error type for the API layer
//! - [`config`] - Configuration types
//! - [`events`] - Event system for callbacks
//! - [`client`] - The `Lagoon` orchestrator
//! - `session`, `posts`, `comments`, `friends`, `users` - operations,
//!   one file per feature, all implemented on [`Lagoon`]

mod client;
mod comments;
pub mod config;
pub mod error;
pub mod events;
mod friends;
mod posts;
mod session;
mod users;

// Error types
pub use error::{LagoonError, LagoonResult};

// Configuration
pub use config::LagoonConfig;

// Events
pub use events::{CallbackHandler, EventDispatcher, EventHandler, LagoonEvent, NoticeLevel};

// Orchestrator
pub use client::Lagoon;

// Profile updates
pub use users::ProfilePatch;
