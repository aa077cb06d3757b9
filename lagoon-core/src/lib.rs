// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lagoon Core Library
//!
//! Client-state core for the Lagoon social-networking client: the
//! normalized per-feature caches (posts, comments, friends, users), the
//! authentication session bootstrap, and the HTTP transport they share.
//! The view layer is an external collaborator that dispatches operations
//! through [`api::Lagoon`] and renders the [`store::Store`] contents.
//!
//! All business logic of consequence lives server-side; this crate keeps
//! denormalized collections consistent across create/update/delete/react
//! operations and owns nothing else.

pub mod api;
pub mod comment;
pub mod friend;
pub mod media;
pub mod post;
pub mod reaction;
pub mod session;
pub mod store;
pub mod transport;
pub mod user;

pub use api::{
    CallbackHandler, EventDispatcher, EventHandler, Lagoon, LagoonConfig, LagoonError,
    LagoonEvent, LagoonResult, NoticeLevel, ProfilePatch,
};
pub use comment::{Comment, CommentAuthor, CommentEvent, CommentPage, CommentState};
pub use friend::{Friend, FriendEvent, FriendPage, FriendState, FriendStatus, Friendship};
pub use media::{ImageSource, MediaConfig, MediaError, MediaUploader};
pub use post::{Post, PostAuthor, PostEvent, PostPage, PostState};
pub use reaction::{ReactionEmoji, ReactionRequest, ReactionTarget, Reactions};
pub use session::{SessionEvent, SessionState, StorageError, TokenStore};
pub use store::Store;
pub use transport::{
    ApiClient, ApiRequest, ApiResponse, Backend, HttpBackend, Method, MockBackend, TransportError,
    TransportResult,
};
pub use user::{User, UserEvent, UserState};
