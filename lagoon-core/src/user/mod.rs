// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Profile Cache
//!
//! Holds the currently viewed profile and the most recent profile-update
//! result. The update result is a pending value: the session manager
//! observes it and merges it into the session user when the ids match
//! (one-directional sync, cache to session).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user profile as the server returns it.
///
/// All attributes are server-owned; the client never derives them locally.
/// Unknown attributes survive round-trips through the `extra` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque server-issued id.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub about_me: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub instagram_link: String,
    #[serde(default)]
    pub linkedin_link: String,
    #[serde(default)]
    pub twitter_link: String,
    /// Denormalized count, maintained server-side.
    #[serde(default)]
    pub friend_count: u64,
    /// Denormalized count, maintained server-side.
    #[serde(default)]
    pub post_count: u64,
    /// Extension slots for attributes this client version doesn't model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl User {
    /// Overwrites this user's profile attributes from `updated`.
    ///
    /// Only display attributes and the denormalized counts move; identity
    /// (`id`, `email`) and extension slots stay untouched.
    pub fn merge_profile(&mut self, updated: &User) {
        self.name = updated.name.clone();
        self.avatar_url = updated.avatar_url.clone();
        self.cover_url = updated.cover_url.clone();
        self.about_me = updated.about_me.clone();
        self.city = updated.city.clone();
        self.country = updated.country.clone();
        self.company = updated.company.clone();
        self.job_title = updated.job_title.clone();
        self.facebook_link = updated.facebook_link.clone();
        self.instagram_link = updated.instagram_link.clone();
        self.linkedin_link = updated.linkedin_link.clone();
        self.twitter_link = updated.twitter_link.clone();
        self.friend_count = updated.friend_count;
        self.post_count = updated.post_count;
    }
}

/// User-cache state.
#[derive(Debug, Clone, Default)]
pub struct UserState {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Message of the last failed operation, until the next success.
    pub error: Option<String>,
    /// Result of the latest profile update or current-user refresh,
    /// pending pickup by the session manager.
    pub updated_profile: Option<User>,
    /// The profile currently being viewed.
    pub selected_user: Option<User>,
}

/// State transitions for the user cache.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// A request started.
    StartLoading,
    /// A request failed with the given message.
    Failed(String),
    /// A profile update (or `/users/me` refresh) succeeded.
    ProfileUpdated(User),
    /// A viewed profile was fetched.
    UserLoaded(User),
}

impl UserState {
    /// Applies one state transition.
    pub fn apply(&mut self, event: UserEvent) {
        match event {
            UserEvent::StartLoading => {
                self.is_loading = true;
            }
            UserEvent::Failed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            UserEvent::ProfileUpdated(user) => {
                self.is_loading = false;
                self.error = None;
                self.updated_profile = Some(user);
            }
            UserEvent::UserLoaded(user) => {
                self.is_loading = false;
                self.error = None;
                self.selected_user = Some(user);
            }
        }
    }
}
