// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Profile Operations
//!
//! Viewing profiles and updating the session user's own. A successful
//! update (or `/users/me` refresh) lands in the user cache as the pending
//! updated profile, which is then merged into the session when the ids
//! match — that merge is how post/friend counts reach the session after
//! post mutations.

use serde::Serialize;

use crate::media::ImageSource;
use crate::transport::Backend;
use crate::user::{User, UserEvent};

use super::client::Lagoon;
use super::error::{LagoonError, LagoonResult};

/// Partial profile update. `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    /// New avatar. Only a local file triggers an upload; an existing
    /// hosted URL is not resent at all.
    pub avatar: Option<ImageSource>,
    pub cover_url: Option<String>,
    pub about_me: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub facebook_link: Option<String>,
    pub instagram_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub twitter_link: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facebook_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instagram_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linkedin_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    twitter_link: Option<String>,
}

impl<B: Backend> Lagoon<B> {
    /// Fetches a user's profile into `selected_user`.
    pub async fn fetch_user(&mut self, user_id: &str) -> LagoonResult<()> {
        self.store.user.apply(UserEvent::StartLoading);
        match self.api.get::<User>(&format!("/users/{user_id}"), &[]).await {
            Ok(user) => {
                self.store.user.apply(UserEvent::UserLoaded(user));
                Ok(())
            }
            Err(err) => Err(self.fail_user(err.into())),
        }
    }

    /// Updates the session user's profile.
    ///
    /// A local avatar file is uploaded first and its hosted URL included
    /// in the payload; a URL input is omitted (the server already has
    /// it). On success the result becomes the pending updated profile
    /// and is merged into the session.
    pub async fn update_profile(
        &mut self,
        user_id: &str,
        patch: ProfilePatch,
    ) -> LagoonResult<()> {
        self.store.user.apply(UserEvent::StartLoading);

        let avatar_url = match &patch.avatar {
            Some(ImageSource::File(_)) => {
                match self.media.resolve(patch.avatar.as_ref()).await {
                    Ok(url) => url,
                    Err(err) => return Err(self.fail_user(err.into())),
                }
            }
            _ => None,
        };
        let body = ProfileBody {
            name: patch.name,
            avatar_url,
            cover_url: patch.cover_url,
            about_me: patch.about_me,
            city: patch.city,
            country: patch.country,
            company: patch.company,
            job_title: patch.job_title,
            facebook_link: patch.facebook_link,
            instagram_link: patch.instagram_link,
            linkedin_link: patch.linkedin_link,
            twitter_link: patch.twitter_link,
        };

        match self.api.put::<User>(&format!("/users/{user_id}"), &body).await {
            Ok(user) => {
                self.store.user.apply(UserEvent::ProfileUpdated(user));
                self.events.notify_success("Profile updated");
                self.sync_session_profile();
                Ok(())
            }
            Err(err) => Err(self.fail_user(err.into())),
        }
    }

    /// Refetches the current session user's profile.
    ///
    /// Lands in the user cache like a profile update and merges into the
    /// session; no notice is dispatched on failure, the error field is
    /// enough for a background refresh.
    pub async fn refresh_current_user(&mut self) -> LagoonResult<()> {
        self.store.user.apply(UserEvent::StartLoading);
        match self.api.get::<User>("/users/me", &[]).await {
            Ok(user) => {
                self.store.user.apply(UserEvent::ProfileUpdated(user));
                self.sync_session_profile();
                Ok(())
            }
            Err(err) => {
                let err: LagoonError = err.into();
                self.store.user.apply(UserEvent::Failed(err.message()));
                Err(err)
            }
        }
    }

    /// Records a failure in the user cache and dispatches a notice.
    fn fail_user(&mut self, err: LagoonError) -> LagoonError {
        let message = err.message();
        self.store.user.apply(UserEvent::Failed(message.clone()));
        self.events.notify_error(message);
        err
    }
}
