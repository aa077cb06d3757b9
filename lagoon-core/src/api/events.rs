// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks for Lagoon events. The view layer registers handlers to show
//! transient notices (the "toast" surface) and to react to session
//! transitions without polling the store.

use std::sync::Arc;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// An operation completed and deserves a confirmation.
    Success,
    /// An operation failed; the message is user-presentable.
    Error,
}

/// Events emitted by Lagoon.
#[derive(Debug, Clone)]
pub enum LagoonEvent {
    /// The startup token check completed.
    SessionInitialized {
        /// Whether a session was established.
        authenticated: bool,
    },

    /// A user logged in or registered.
    LoggedIn {
        /// The session user's id.
        user_id: String,
    },

    /// The session was ended.
    LoggedOut,

    /// The session user's profile fields were refreshed from the cache.
    ProfileRefreshed {
        /// The session user's id.
        user_id: String,
    },

    /// A transient user-facing notice.
    Notice {
        /// Notice severity.
        level: NoticeLevel,
        /// User-presentable message.
        message: String,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive Lagoon events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: LagoonEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(LagoonEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(LagoonEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(LagoonEvent) + Send + Sync,
{
    fn on_event(&self, event: LagoonEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: LagoonEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }

    /// Dispatches a success notice.
    pub fn notify_success(&self, message: impl Into<String>) {
        self.dispatch(LagoonEvent::Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Dispatches an error notice.
    pub fn notify_error(&self, message: impl Into<String>) {
        self.dispatch(LagoonEvent::Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }
}
