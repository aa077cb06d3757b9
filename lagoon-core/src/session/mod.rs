// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session State
//!
//! The authentication session: created uninitialized at startup, moved to
//! initialized (authenticated or anonymous) exactly once after the token
//! check, re-entered on login/register, reset on logout.
//!
//! `is_initialized` is monotonic — no transition ever sets it back to
//! false within a process lifetime.

mod store;
pub mod token;

pub use store::{StorageError, TokenStore};

use crate::user::User;

/// Authentication session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// True once the startup token check has completed, in either outcome.
    pub is_initialized: bool,
    /// True while a user is logged in.
    pub is_authenticated: bool,
    /// The session user, when authenticated.
    pub user: Option<User>,
}

/// State transitions for the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The startup token check completed.
    Initialized {
        authenticated: bool,
        user: Option<User>,
    },
    /// Login or registration succeeded.
    LoggedIn { user: User },
    /// The session was ended locally.
    LoggedOut,
    /// An updated profile was observed in the user cache and its identity
    /// matches the session user.
    ProfileMerged(User),
}

impl SessionState {
    /// Applies one state transition.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Initialized {
                authenticated,
                user,
            } => {
                self.is_initialized = true;
                self.is_authenticated = authenticated;
                self.user = user;
            }
            SessionEvent::LoggedIn { user } => {
                self.is_authenticated = true;
                self.user = Some(user);
            }
            SessionEvent::LoggedOut => {
                self.is_authenticated = false;
                self.user = None;
            }
            SessionEvent::ProfileMerged(updated) => {
                if let Some(user) = self.user.as_mut() {
                    user.merge_profile(&updated);
                }
            }
        }
    }
}
