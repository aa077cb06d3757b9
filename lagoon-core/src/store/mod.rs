// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client Store
//!
//! The single store object composing every feature cache plus the session.
//! It is explicitly constructed and owned by the [`crate::api::Lagoon`]
//! facade — there is no global singleton. The view layer reads it through
//! the facade; mutation happens exclusively through the per-cache `apply`
//! transition functions driven by completed operations.

use crate::comment::CommentState;
use crate::friend::FriendState;
use crate::post::PostState;
use crate::session::SessionState;
use crate::user::UserState;

/// All client-side state, one field per feature cache.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Authentication session.
    pub session: SessionState,
    /// Posts of the currently viewed profile.
    pub post: PostState,
    /// Comments, keyed per parent post.
    pub comment: CommentState,
    /// Shared user-listing views and relationship attributes.
    pub friend: FriendState,
    /// Viewed profile and pending profile update.
    pub user: UserState,
}
