// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Post Cache
//!
//! Normalized store for the posts of the currently viewed profile: an
//! id-to-post map plus the ordered id list of the current page window.
//!
//! Invariant: every id in `current_page_posts` resolves in `posts_by_id`.
//! The reverse is not required — deletes drop the id from the list but
//! leave the map entry behind, inert and never read.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reaction::Reactions;

/// Denormalized author subset embedded in each post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// A post as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque server-issued id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Denormalized author subset.
    pub author: PostAuthor,
    /// Server-issued creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Post body text.
    pub content: String,
    /// Hosted image URL, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Authoritative reaction tally.
    #[serde(default)]
    pub reactions: Reactions,
    /// Extension slots for attributes this client version doesn't model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One page of posts from `GET /posts/user/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
    /// The page's posts, newest first.
    pub posts: Vec<Post>,
    /// Total number of posts for the user.
    pub count: u64,
}

/// Post-cache state.
#[derive(Debug, Clone, Default)]
pub struct PostState {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Message of the last failed operation, until the next success.
    pub error: Option<String>,
    /// Posts by id. May contain orphans no longer listed.
    pub posts_by_id: HashMap<String, Post>,
    /// Ordered ids of the current page window.
    pub current_page_posts: Vec<String>,
    /// Total post count from the most recent fetch.
    pub total_posts: u64,
}

/// State transitions for the post cache.
#[derive(Debug, Clone)]
pub enum PostEvent {
    /// A request started.
    StartLoading,
    /// A request failed with the given message.
    Failed(String),
    /// Clear the map and list for a fresh view (page 1 of a new fetch).
    Reset,
    /// A page of posts arrived.
    PageLoaded {
        posts: Vec<Post>,
        /// Total post count reported by the server.
        count: u64,
    },
    /// A new post was created.
    Created {
        post: Post,
        /// Display window capacity; the oldest id is evicted when the
        /// window is exactly full.
        page_size: usize,
    },
    /// The server returned a fresh reaction tally for a post.
    Reacted {
        post_id: String,
        reactions: Reactions,
    },
    /// A post was deleted remotely.
    Deleted { post_id: String },
    /// A post's editable fields were updated.
    Updated {
        post_id: String,
        content: String,
        image: Option<String>,
    },
}

impl PostState {
    /// Applies one state transition.
    pub fn apply(&mut self, event: PostEvent) {
        match event {
            PostEvent::StartLoading => {
                self.is_loading = true;
            }
            PostEvent::Failed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            PostEvent::Reset => {
                self.posts_by_id.clear();
                self.current_page_posts.clear();
            }
            PostEvent::PageLoaded { posts, count } => {
                self.is_loading = false;
                self.error = None;
                for post in posts {
                    let id = post.id.clone();
                    if !self.current_page_posts.contains(&id) {
                        self.current_page_posts.push(id.clone());
                    }
                    self.posts_by_id.insert(id, post);
                }
                self.total_posts = count;
            }
            PostEvent::Created { post, page_size } => {
                self.is_loading = false;
                self.error = None;
                // keep the displayed window bounded to the page size
                if page_size > 0 && self.current_page_posts.len() % page_size == 0 {
                    self.current_page_posts.pop();
                }
                self.current_page_posts.insert(0, post.id.clone());
                self.posts_by_id.insert(post.id.clone(), post);
            }
            PostEvent::Reacted { post_id, reactions } => {
                self.is_loading = false;
                self.error = None;
                if let Some(post) = self.posts_by_id.get_mut(&post_id) {
                    post.reactions = reactions;
                }
            }
            PostEvent::Deleted { post_id } => {
                self.is_loading = false;
                self.error = None;
                // map entry stays behind; only list membership changes
                self.current_page_posts.retain(|id| *id != post_id);
            }
            PostEvent::Updated {
                post_id,
                content,
                image,
            } => {
                self.is_loading = false;
                self.error = None;
                if let Some(post) = self.posts_by_id.get_mut(&post_id) {
                    post.content = content;
                    post.image = image;
                }
            }
        }
    }

    /// Returns the posts of the current page, in display order.
    ///
    /// Ids without a map entry are skipped; the invariant makes that
    /// impossible after a successful patch, but the read stays total.
    pub fn current_page(&self) -> Vec<&Post> {
        self.current_page_posts
            .iter()
            .filter_map(|id| self.posts_by_id.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.into(),
            author: PostAuthor {
                id: "author-1".into(),
                name: "Author".into(),
                avatar_url: String::new(),
            },
            created_at: "2026-01-15T10:00:00Z".parse().unwrap(),
            content: format!("content of {id}"),
            image: None,
            reactions: Reactions::default(),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn page_loaded_dedups_ids() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1"), post("p2")],
            count: 2,
        });
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p2"), post("p3")],
            count: 3,
        });

        assert_eq!(state.current_page_posts, vec!["p1", "p2", "p3"]);
        assert_eq!(state.total_posts, 3);
        // every listed id resolves
        for id in &state.current_page_posts {
            assert!(state.posts_by_id.contains_key(id));
        }
    }

    #[test]
    fn created_evicts_when_window_is_full() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1"), post("p2")],
            count: 2,
        });

        // window exactly at capacity 2: oldest displayed id gets evicted
        state.apply(PostEvent::Created {
            post: post("p3"),
            page_size: 2,
        });
        assert_eq!(state.current_page_posts, vec!["p3", "p1"]);

        // window no longer at a page boundary: nothing evicted
        state.apply(PostEvent::Created {
            post: post("p4"),
            page_size: 3,
        });
        assert_eq!(state.current_page_posts, vec!["p4", "p3", "p1"]);
    }

    #[test]
    fn deleted_leaves_map_entry_behind() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1"), post("p2")],
            count: 2,
        });

        state.apply(PostEvent::Deleted {
            post_id: "p1".into(),
        });
        assert_eq!(state.current_page_posts, vec!["p2"]);
        assert!(state.posts_by_id.contains_key("p1"));
    }

    #[test]
    fn deleting_unlisted_id_is_a_no_op() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1")],
            count: 1,
        });

        state.apply(PostEvent::Deleted {
            post_id: "missing".into(),
        });
        assert_eq!(state.current_page_posts, vec!["p1"]);
        assert!(state.error.is_none());
    }

    #[test]
    fn updated_touches_only_content_and_image() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1")],
            count: 1,
        });
        let created_at = state.posts_by_id["p1"].created_at;

        state.apply(PostEvent::Updated {
            post_id: "p1".into(),
            content: "edited".into(),
            image: Some("http://img/new.png".into()),
        });
        let updated = &state.posts_by_id["p1"];
        assert_eq!(updated.content, "edited");
        assert_eq!(updated.image.as_deref(), Some("http://img/new.png"));
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn reacted_overwrites_tally_wholesale() {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: vec![post("p1")],
            count: 1,
        });

        state.apply(PostEvent::Reacted {
            post_id: "p1".into(),
            reactions: Reactions { like: 5, dislike: 1 },
        });
        state.apply(PostEvent::Reacted {
            post_id: "p1".into(),
            reactions: Reactions { like: 5, dislike: 1 },
        });
        // never accumulated client-side
        assert_eq!(state.posts_by_id["p1"].reactions.like, 5);
    }
}
