// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Friend Operations
//!
//! The four listing queries all land in the same store fields — whichever
//! ran last owns the current view. Relationship mutations patch the one
//! affected user's `friendship` attribute and never refetch the list;
//! the relationship is a small denormalized field, not list membership.

use serde_json::json;

use crate::friend::{FriendEvent, FriendPage, Friendship};
use crate::transport::Backend;

use super::client::Lagoon;
use super::error::{LagoonError, LagoonResult};

impl<B: Backend> Lagoon<B> {
    /// Fetches one page of all users, optionally filtered by name.
    pub async fn fetch_users(&mut self, filter_name: Option<&str>, page: u32) -> LagoonResult<()> {
        self.fetch_listing("/users", filter_name, page).await
    }

    /// Fetches one page of the session user's friends.
    pub async fn fetch_friends(
        &mut self,
        filter_name: Option<&str>,
        page: u32,
    ) -> LagoonResult<()> {
        self.fetch_listing("/friends", filter_name, page).await
    }

    /// Fetches one page of incoming friend requests.
    pub async fn fetch_incoming_requests(
        &mut self,
        filter_name: Option<&str>,
        page: u32,
    ) -> LagoonResult<()> {
        self.fetch_listing("/friends/requests/incoming", filter_name, page)
            .await
    }

    /// Fetches one page of outgoing friend requests.
    pub async fn fetch_outgoing_requests(
        &mut self,
        filter_name: Option<&str>,
        page: u32,
    ) -> LagoonResult<()> {
        self.fetch_listing("/friends/requests/outgoing", filter_name, page)
            .await
    }

    async fn fetch_listing(
        &mut self,
        path: &str,
        filter_name: Option<&str>,
        page: u32,
    ) -> LagoonResult<()> {
        self.store.friend.apply(FriendEvent::StartLoading);
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", self.config.users_per_page.to_string()),
        ];
        if let Some(name) = filter_name {
            query.push(("name", name.to_string()));
        }
        match self.api.get::<FriendPage>(path, &query).await {
            Ok(fetched) => {
                self.store.friend.apply(FriendEvent::PageLoaded {
                    users: fetched.users,
                    count: fetched.count,
                    total_pages: fetched.total_pages,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_friend(err.into())),
        }
    }

    /// Sends a friend request to a user.
    pub async fn send_friend_request(&mut self, target_user_id: &str) -> LagoonResult<()> {
        self.store.friend.apply(FriendEvent::StartLoading);
        let body = json!({ "to": target_user_id });
        match self.api.post::<Friendship>("/friends/requests", &body).await {
            Ok(friendship) => {
                self.store.friend.apply(FriendEvent::RelationshipChanged {
                    user_id: target_user_id.to_string(),
                    friendship: Some(friendship),
                });
                self.events.notify_success("Request sent");
                Ok(())
            }
            Err(err) => Err(self.fail_friend(err.into())),
        }
    }

    /// Accepts an incoming friend request.
    pub async fn accept_request(&mut self, target_user_id: &str) -> LagoonResult<()> {
        self.answer_request(target_user_id, "accepted", "Request accepted")
            .await
    }

    /// Declines an incoming friend request.
    pub async fn decline_request(&mut self, target_user_id: &str) -> LagoonResult<()> {
        self.answer_request(target_user_id, "declined", "Request declined")
            .await
    }

    async fn answer_request(
        &mut self,
        target_user_id: &str,
        status: &str,
        notice: &str,
    ) -> LagoonResult<()> {
        self.store.friend.apply(FriendEvent::StartLoading);
        let body = json!({ "status": status });
        match self
            .api
            .put::<Friendship>(&format!("/friends/requests/{target_user_id}"), &body)
            .await
        {
            Ok(friendship) => {
                self.store.friend.apply(FriendEvent::RelationshipChanged {
                    user_id: target_user_id.to_string(),
                    friendship: Some(friendship),
                });
                self.events.notify_success(notice);
                Ok(())
            }
            Err(err) => Err(self.fail_friend(err.into())),
        }
    }

    /// Cancels an outgoing friend request.
    ///
    /// The cached relationship goes back to none regardless of what the
    /// response body carries.
    pub async fn cancel_request(&mut self, target_user_id: &str) -> LagoonResult<()> {
        self.clear_relationship(
            &format!("/friends/requests/{target_user_id}"),
            target_user_id,
            "Request cancelled",
        )
        .await
    }

    /// Removes an accepted friend.
    pub async fn remove_friend(&mut self, target_user_id: &str) -> LagoonResult<()> {
        self.clear_relationship(
            &format!("/friends/{target_user_id}"),
            target_user_id,
            "Friend removed",
        )
        .await
    }

    async fn clear_relationship(
        &mut self,
        path: &str,
        target_user_id: &str,
        notice: &str,
    ) -> LagoonResult<()> {
        self.store.friend.apply(FriendEvent::StartLoading);
        match self.api.delete(path).await {
            Ok(()) => {
                self.store.friend.apply(FriendEvent::RelationshipChanged {
                    user_id: target_user_id.to_string(),
                    friendship: None,
                });
                self.events.notify_success(notice);
                Ok(())
            }
            Err(err) => Err(self.fail_friend(err.into())),
        }
    }

    /// Records a failure in the friend cache and dispatches a notice.
    fn fail_friend(&mut self, err: LagoonError) -> LagoonError {
        let message = err.message();
        self.store.friend.apply(FriendEvent::Failed(message.clone()));
        self.events.notify_error(message);
        err
    }
}
