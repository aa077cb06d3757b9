// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Comment Operations
//!
//! Same dispatch → network → patch contract as posts, scoped per parent
//! post. Create and delete refetch the post's comment list instead of
//! patching membership in place, so ordering and counts always come from
//! the server.

use serde_json::json;

use crate::comment::{Comment, CommentEvent, CommentPage};
use crate::reaction::{ReactionEmoji, ReactionRequest, ReactionTarget, Reactions};
use crate::transport::Backend;

use super::client::Lagoon;
use super::error::{LagoonError, LagoonResult};

impl<B: Backend> Lagoon<B> {
    /// Fetches one page of a post's comments.
    ///
    /// Each call is authoritative for that post's current page: the
    /// ordered list is overwritten with the fetched ids, reversed.
    pub async fn fetch_comments(&mut self, post_id: &str, page: u32) -> LagoonResult<()> {
        self.store.comment.apply(CommentEvent::StartLoading);
        let query = [
            ("page", page.to_string()),
            ("limit", self.config.comments_per_page.to_string()),
        ];
        match self
            .api
            .get::<CommentPage>(&format!("/posts/{post_id}/comments"), &query)
            .await
        {
            Ok(fetched) => {
                self.store.comment.apply(CommentEvent::PageLoaded {
                    post_id: post_id.to_string(),
                    comments: fetched.comments,
                    count: fetched.count,
                    page: page as u64,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_comment(err.into())),
        }
    }

    /// Creates a comment on a post, then refetches that post's list.
    pub async fn create_comment(&mut self, post_id: &str, content: &str) -> LagoonResult<()> {
        self.store.comment.apply(CommentEvent::StartLoading);
        let body = json!({ "content": content, "postId": post_id });
        match self.api.post::<Comment>("/comments", &body).await {
            Ok(_created) => {
                self.store.comment.apply(CommentEvent::Created);
                let _ = self.fetch_comments(post_id, 1).await;
                Ok(())
            }
            Err(err) => Err(self.fail_comment(err.into())),
        }
    }

    /// Updates a comment's content in place from the server's response.
    pub async fn update_comment(&mut self, comment_id: &str, content: &str) -> LagoonResult<()> {
        self.store.comment.apply(CommentEvent::StartLoading);
        let body = json!({ "content": content });
        match self
            .api
            .put::<Comment>(&format!("/comments/{comment_id}"), &body)
            .await
        {
            Ok(updated) => {
                self.store.comment.apply(CommentEvent::Updated {
                    comment_id: comment_id.to_string(),
                    content: updated.content,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_comment(err.into())),
        }
    }

    /// Deletes a comment, then refetches that post's list.
    pub async fn delete_comment(&mut self, comment_id: &str, post_id: &str) -> LagoonResult<()> {
        self.store.comment.apply(CommentEvent::StartLoading);
        match self.api.delete(&format!("/comments/{comment_id}")).await {
            Ok(()) => {
                self.store.comment.apply(CommentEvent::Deleted);
                let _ = self.fetch_comments(post_id, 1).await;
                Ok(())
            }
            Err(err) => Err(self.fail_comment(err.into())),
        }
    }

    /// Reacts to a comment; the tally is overwritten wholesale.
    pub async fn react_to_comment(
        &mut self,
        comment_id: &str,
        emoji: ReactionEmoji,
    ) -> LagoonResult<()> {
        self.store.comment.apply(CommentEvent::StartLoading);
        let request = ReactionRequest {
            target_type: ReactionTarget::Comment,
            target_id: comment_id.to_string(),
            emoji,
        };
        match self.api.post::<Reactions>("/reactions", &request).await {
            Ok(reactions) => {
                self.store.comment.apply(CommentEvent::Reacted {
                    comment_id: comment_id.to_string(),
                    reactions,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_comment(err.into())),
        }
    }

    /// Records a failure in the comment cache and dispatches a notice.
    fn fail_comment(&mut self, err: LagoonError) -> LagoonError {
        let message = err.message();
        self.store.comment.apply(CommentEvent::Failed(message.clone()));
        self.events.notify_error(message);
        err
    }
}
