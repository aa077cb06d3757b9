// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reactions
//!
//! Shared reaction types for posts and comments. Counts are always the
//! server's authoritative tally; the client never increments them locally,
//! which keeps repeated reactions by the same user idempotent.

use serde::{Deserialize, Serialize};

/// Aggregate reaction counts on a post or comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    /// Number of likes.
    #[serde(default)]
    pub like: u64,
    /// Number of dislikes.
    #[serde(default)]
    pub dislike: u64,
}

/// The emoji a user can react with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionEmoji {
    Like,
    Dislike,
}

/// What a reaction is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionTarget {
    Post,
    Comment,
}

/// Request body for `POST /reactions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    /// Target entity kind.
    pub target_type: ReactionTarget,
    /// Target entity id.
    pub target_id: String,
    /// The reaction emoji.
    pub emoji: ReactionEmoji,
}
