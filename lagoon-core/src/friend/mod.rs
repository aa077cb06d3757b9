// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Friend/User Listing Cache
//!
//! One normalized store shared by the four listing views (all users,
//! friends, incoming requests, outgoing requests). Switching views
//! overwrites the ordered list and counters; only one view is "current"
//! at a time.
//!
//! The relationship to the viewing user is a denormalized attribute on
//! each cached user (`friendship`), not a separate collection.
//! Relationship mutations patch that single attribute in place and never
//! trigger a list refetch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Status of a friendship record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Pending,
    Accepted,
    Declined,
}

/// A directed relationship between two users.
///
/// Absence of a record (`Option::None` on [`Friend::friendship`]) means no
/// relationship exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    /// Id of the requesting user.
    pub from: String,
    /// Id of the receiving user.
    pub to: String,
    /// Relationship status, owned by the server.
    pub status: FriendStatus,
}

/// A user entry in a listing view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Opaque server-issued id.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub email: String,
    /// Relationship to the viewing user, if any.
    #[serde(default)]
    pub friendship: Option<Friendship>,
    /// Extension slots for attributes this client version doesn't model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One page of users from a listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendPage {
    /// The page's users.
    pub users: Vec<Friend>,
    /// Total matching users.
    pub count: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

/// Friend-listing cache state.
#[derive(Debug, Clone)]
pub struct FriendState {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Message of the last failed operation, until the next success.
    pub error: Option<String>,
    /// Ordered ids of the current listing view.
    pub current_page_users: Vec<String>,
    /// Users by id. May contain entries from previous views.
    pub users_by_id: HashMap<String, Friend>,
    /// Total users from the most recent fetch.
    pub total_users: u64,
    /// Total pages from the most recent fetch.
    pub total_pages: u64,
}

impl Default for FriendState {
    fn default() -> Self {
        FriendState {
            is_loading: false,
            error: None,
            current_page_users: Vec::new(),
            users_by_id: HashMap::new(),
            // counters start at one page of nobody, not zero
            total_users: 1,
            total_pages: 1,
        }
    }
}

/// State transitions for the friend-listing cache.
#[derive(Debug, Clone)]
pub enum FriendEvent {
    /// A request started.
    StartLoading,
    /// A request failed with the given message.
    Failed(String),
    /// A listing page arrived (any of the four views).
    PageLoaded {
        users: Vec<Friend>,
        count: u64,
        total_pages: u64,
    },
    /// The relationship to one user changed.
    RelationshipChanged {
        user_id: String,
        friendship: Option<Friendship>,
    },
}

impl FriendState {
    /// Applies one state transition.
    pub fn apply(&mut self, event: FriendEvent) {
        match event {
            FriendEvent::StartLoading => {
                self.is_loading = true;
            }
            FriendEvent::Failed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            FriendEvent::PageLoaded {
                users,
                count,
                total_pages,
            } => {
                self.is_loading = false;
                self.error = None;
                self.current_page_users = users.iter().map(|user| user.id.clone()).collect();
                for user in users {
                    self.users_by_id.insert(user.id.clone(), user);
                }
                self.total_users = count;
                self.total_pages = total_pages;
            }
            FriendEvent::RelationshipChanged { user_id, friendship } => {
                self.is_loading = false;
                self.error = None;
                if let Some(user) = self.users_by_id.get_mut(&user_id) {
                    user.friendship = friendship;
                }
            }
        }
    }

    /// Returns the current listing view, in display order.
    pub fn current_page(&self) -> Vec<&Friend> {
        self.current_page_users
            .iter()
            .filter_map(|id| self.users_by_id.get(id))
            .collect()
    }
}
