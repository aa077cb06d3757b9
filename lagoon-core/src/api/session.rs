// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session Operations
//!
//! Startup bootstrap, login, registration and logout. Unlike the cache
//! operations, login and registration do not swallow transport failures —
//! the caller drives the form and decides how to surface them.

use serde::Deserialize;
use serde_json::json;

use crate::session::{token, SessionEvent};
use crate::transport::Backend;
use crate::user::User;

use super::client::Lagoon;
use super::error::{LagoonError, LagoonResult};
use super::events::LagoonEvent;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthPayload {
    user: User,
    access_token: String,
}

impl<B: Backend> Lagoon<B> {
    /// Establishes the session from a persisted token.
    ///
    /// Runs exactly once, at startup; a second call is an error. If a
    /// token is present and unexpired, it is attached to the transport
    /// and the current user is fetched; any failure on that path clears
    /// the token and leaves the session initialized but anonymous. This
    /// is never retried automatically.
    pub async fn initialize(&mut self) -> LagoonResult<()> {
        if self.store.session.is_initialized {
            return Err(LagoonError::AlreadyInitialized);
        }

        let token = self.tokens.load().map(str::to_string);
        match token {
            Some(token) if token::is_valid(&token) => {
                self.set_session(Some(token))?;
                match self.api.get::<User>("/users/me", &[]).await {
                    Ok(user) => {
                        tracing::debug!(
                            target: "lagoon::session",
                            "session established for {}", user.id
                        );
                        self.store.session.apply(SessionEvent::Initialized {
                            authenticated: true,
                            user: Some(user),
                        });
                        self.events
                            .dispatch(LagoonEvent::SessionInitialized { authenticated: true });
                    }
                    Err(err) => {
                        tracing::warn!(
                            target: "lagoon::session",
                            "session bootstrap failed, entering anonymous: {err}"
                        );
                        self.set_session(None)?;
                        self.store.session.apply(SessionEvent::Initialized {
                            authenticated: false,
                            user: None,
                        });
                        self.events
                            .dispatch(LagoonEvent::SessionInitialized { authenticated: false });
                    }
                }
            }
            _ => {
                self.set_session(None)?;
                self.store.session.apply(SessionEvent::Initialized {
                    authenticated: false,
                    user: None,
                });
                self.events
                    .dispatch(LagoonEvent::SessionInitialized { authenticated: false });
            }
        }
        Ok(())
    }

    /// Logs in with email and password.
    ///
    /// On success the returned token is persisted and attached, and the
    /// session becomes authenticated. Transport errors propagate.
    pub async fn login(&mut self, email: &str, password: &str) -> LagoonResult<User> {
        let payload = json!({ "email": email, "password": password });
        let auth: AuthPayload = self.api.post("/auth/login", &payload).await?;
        self.enter_session(auth)
    }

    /// Registers a new account.
    ///
    /// Same contract as [`login`](Self::login), against the registration
    /// endpoint.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> LagoonResult<User> {
        let payload = json!({ "name": name, "email": email, "password": password });
        let auth: AuthPayload = self.api.post("/users", &payload).await?;
        self.enter_session(auth)
    }

    /// Ends the session locally. No network dependency; always succeeds
    /// unless the token file cannot be removed.
    pub fn logout(&mut self) -> LagoonResult<()> {
        self.set_session(None)?;
        self.store.session.apply(SessionEvent::LoggedOut);
        self.events.dispatch(LagoonEvent::LoggedOut);
        tracing::debug!(target: "lagoon::session", "session ended");
        Ok(())
    }

    fn enter_session(&mut self, auth: AuthPayload) -> LagoonResult<User> {
        self.set_session(Some(auth.access_token))?;
        self.store.session.apply(SessionEvent::LoggedIn {
            user: auth.user.clone(),
        });
        self.events.dispatch(LagoonEvent::LoggedIn {
            user_id: auth.user.id.clone(),
        });
        Ok(auth.user)
    }

    /// Persists or clears the token and mirrors it onto the transport.
    pub(crate) fn set_session(&mut self, token: Option<String>) -> LagoonResult<()> {
        match &token {
            Some(token) => self.tokens.save(token)?,
            None => self.tokens.clear()?,
        }
        self.api.set_token(token);
        Ok(())
    }

    /// Merges the user cache's pending updated profile into the session
    /// user, when their identities match.
    ///
    /// One-directional sync: cache to session, never the reverse. Called
    /// by the user-cache operations after a profile update or a
    /// current-user refresh lands.
    pub(crate) fn sync_session_profile(&mut self) {
        let Some(updated) = self.store.user.updated_profile.clone() else {
            return;
        };
        let matches = self
            .store
            .session
            .user
            .as_ref()
            .is_some_and(|user| user.id == updated.id);
        if matches {
            let user_id = updated.id.clone();
            self.store.session.apply(SessionEvent::ProfileMerged(updated));
            self.events.dispatch(LagoonEvent::ProfileRefreshed { user_id });
        }
    }
}
