// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Post Operations
//!
//! Every operation is dispatch → network → patch: the cache is marked
//! loading, the request runs, and on success a deterministic patch is
//! applied. Failures are recorded in the cache's error field and
//! dispatched as an error notice; the cache stays usable and nothing is
//! retried automatically.

use serde_json::json;

use crate::media::ImageSource;
use crate::post::{Post, PostEvent, PostPage};
use crate::reaction::{ReactionEmoji, ReactionRequest, ReactionTarget, Reactions};
use crate::transport::Backend;

use super::client::Lagoon;
use super::error::{LagoonError, LagoonResult};

impl<B: Backend> Lagoon<B> {
    /// Fetches one page of a user's posts.
    ///
    /// Page 1 clears the cached view first, so switching profiles never
    /// mixes pages from different users. Unseen ids are appended and
    /// deduplicated; `total_posts` comes from the response count.
    pub async fn fetch_posts(&mut self, user_id: &str, page: u32) -> LagoonResult<()> {
        self.store.post.apply(PostEvent::StartLoading);
        let query = [
            ("page", page.to_string()),
            ("limit", self.config.posts_per_page.to_string()),
        ];
        match self
            .api
            .get::<PostPage>(&format!("/posts/user/{user_id}"), &query)
            .await
        {
            Ok(fetched) => {
                if page == 1 {
                    self.store.post.apply(PostEvent::Reset);
                }
                self.store.post.apply(PostEvent::PageLoaded {
                    posts: fetched.posts,
                    count: fetched.count,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_post(err.into())),
        }
    }

    /// Creates a post, optionally with an image.
    ///
    /// Local image files are uploaded to the asset host first; hosted
    /// URLs pass through. After the create patch, the first page and the
    /// current user's profile (post count) are refetched best-effort —
    /// their failures land in the owning cache, with no rollback of the
    /// already-applied create.
    pub async fn create_post(
        &mut self,
        user_id: &str,
        content: &str,
        image: Option<ImageSource>,
    ) -> LagoonResult<()> {
        self.store.post.apply(PostEvent::StartLoading);

        let image_url = match self.media.resolve(image.as_ref()).await {
            Ok(url) => url,
            Err(err) => return Err(self.fail_post(err.into())),
        };
        let body = json!({ "content": content, "image": image_url });
        match self.api.post::<Post>("/posts", &body).await {
            Ok(post) => {
                self.store.post.apply(PostEvent::Created {
                    post,
                    page_size: self.config.posts_per_page as usize,
                });
                self.events.notify_success("Post created");
                let _ = self.fetch_posts(user_id, 1).await;
                let _ = self.refresh_current_user().await;
                Ok(())
            }
            Err(err) => Err(self.fail_post(err.into())),
        }
    }

    /// Deletes a post, then refetches the profile counts and the page.
    ///
    /// The cache patch only drops the id from the ordered list; deleting
    /// an id that is not listed is a silent no-op.
    pub async fn delete_post(&mut self, post_id: &str, user_id: &str) -> LagoonResult<()> {
        self.store.post.apply(PostEvent::StartLoading);
        match self.api.delete(&format!("/posts/{post_id}")).await {
            Ok(()) => {
                self.store.post.apply(PostEvent::Deleted {
                    post_id: post_id.to_string(),
                });
                self.events.notify_success("Post deleted");
                let _ = self.refresh_current_user().await;
                let _ = self.fetch_posts(user_id, 1).await;
                Ok(())
            }
            Err(err) => Err(self.fail_post(err.into())),
        }
    }

    /// Updates a post's content and image in place.
    ///
    /// Only `content` and `image` are overwritten in the cache, from the
    /// server's response.
    pub async fn update_post(
        &mut self,
        post_id: &str,
        content: &str,
        image: Option<ImageSource>,
    ) -> LagoonResult<()> {
        self.store.post.apply(PostEvent::StartLoading);

        let image_url = match self.media.resolve(image.as_ref()).await {
            Ok(url) => url,
            Err(err) => return Err(self.fail_post(err.into())),
        };
        let body = json!({ "content": content, "image": image_url });
        match self.api.put::<Post>(&format!("/posts/{post_id}"), &body).await {
            Ok(post) => {
                self.store.post.apply(PostEvent::Updated {
                    post_id: post.id,
                    content: post.content,
                    image: post.image,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_post(err.into())),
        }
    }

    /// Reacts to a post.
    ///
    /// The stored tally is overwritten wholesale from the server's
    /// response; repeating a reaction never accumulates client-side.
    pub async fn react_to_post(
        &mut self,
        post_id: &str,
        emoji: ReactionEmoji,
    ) -> LagoonResult<()> {
        self.store.post.apply(PostEvent::StartLoading);
        let request = ReactionRequest {
            target_type: ReactionTarget::Post,
            target_id: post_id.to_string(),
            emoji,
        };
        match self.api.post::<Reactions>("/reactions", &request).await {
            Ok(reactions) => {
                self.store.post.apply(PostEvent::Reacted {
                    post_id: post_id.to_string(),
                    reactions,
                });
                Ok(())
            }
            Err(err) => Err(self.fail_post(err.into())),
        }
    }

    /// Records a failure in the post cache and dispatches a notice.
    fn fail_post(&mut self, err: LagoonError) -> LagoonError {
        let message = err.message();
        self.store.post.apply(PostEvent::Failed(message.clone()));
        self.events.notify_error(message);
        err
    }
}
