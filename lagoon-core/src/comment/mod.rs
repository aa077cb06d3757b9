// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Comment Cache
//!
//! Normalized store for comments, keyed per parent post. Each fetch is
//! authoritative for that post's current page: the ordered list is
//! overwritten, not merged. The fetched page is stored reversed so the
//! newest comment appears last in display order.
//!
//! Create and delete do not patch list membership; the owning operation
//! refetches the post's comments instead, trading an extra request for
//! guaranteed consistency with server-side ordering and counting.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reaction::Reactions;

/// Denormalized author subset embedded in each comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// A comment as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Opaque server-issued id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Denormalized author subset.
    pub author: CommentAuthor,
    /// Server-issued creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Comment body text.
    pub content: String,
    /// Authoritative reaction tally.
    #[serde(default)]
    pub reactions: Reactions,
    /// Extension slots for attributes this client version doesn't model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One page of comments from `GET /posts/{id}/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPage {
    /// The page's comments in server order.
    pub comments: Vec<Comment>,
    /// Total number of comments on the post.
    pub count: u64,
}

/// Comment-cache state.
#[derive(Debug, Clone, Default)]
pub struct CommentState {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Message of the last failed operation, until the next success.
    pub error: Option<String>,
    /// Ordered comment ids per post, reversed from server order.
    pub comments_by_post: HashMap<String, Vec<String>>,
    /// Total comment count per post, from the latest fetch.
    pub total_comments_by_post: HashMap<String, u64>,
    /// Page number of the latest fetch, per post.
    pub current_page_by_post: HashMap<String, u64>,
    /// Comments by id, shared across posts.
    pub comments_by_id: HashMap<String, Comment>,
}

/// State transitions for the comment cache.
#[derive(Debug, Clone)]
pub enum CommentEvent {
    /// A request started.
    StartLoading,
    /// A request failed with the given message.
    Failed(String),
    /// A page of comments arrived for a post.
    PageLoaded {
        post_id: String,
        comments: Vec<Comment>,
        /// Total comment count reported by the server.
        count: u64,
        /// The page that was requested.
        page: u64,
    },
    /// A comment was created; membership comes from the follow-up refetch.
    Created,
    /// A comment was deleted; membership comes from the follow-up refetch.
    Deleted,
    /// The server returned a fresh reaction tally for a comment.
    Reacted {
        comment_id: String,
        reactions: Reactions,
    },
    /// A comment's content was updated.
    Updated { comment_id: String, content: String },
}

impl CommentState {
    /// Applies one state transition.
    pub fn apply(&mut self, event: CommentEvent) {
        match event {
            CommentEvent::StartLoading => {
                self.is_loading = true;
            }
            CommentEvent::Failed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            CommentEvent::PageLoaded {
                post_id,
                comments,
                count,
                page,
            } => {
                self.is_loading = false;
                self.error = None;
                let mut ids: Vec<String> =
                    comments.iter().map(|comment| comment.id.clone()).collect();
                ids.reverse();
                for comment in comments {
                    self.comments_by_id.insert(comment.id.clone(), comment);
                }
                self.comments_by_post.insert(post_id.clone(), ids);
                self.total_comments_by_post.insert(post_id.clone(), count);
                self.current_page_by_post.insert(post_id, page);
            }
            CommentEvent::Created | CommentEvent::Deleted => {
                self.is_loading = false;
                self.error = None;
            }
            CommentEvent::Reacted {
                comment_id,
                reactions,
            } => {
                self.is_loading = false;
                self.error = None;
                if let Some(comment) = self.comments_by_id.get_mut(&comment_id) {
                    comment.reactions = reactions;
                }
            }
            CommentEvent::Updated {
                comment_id,
                content,
            } => {
                self.is_loading = false;
                self.error = None;
                if let Some(comment) = self.comments_by_id.get_mut(&comment_id) {
                    comment.content = content;
                }
            }
        }
    }

    /// Returns a post's comments in display order.
    pub fn comments_for(&self, post_id: &str) -> Vec<&Comment> {
        self.comments_by_post
            .get(post_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.comments_by_id.get(id))
            .collect()
    }
}
