// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend Trait
//!
//! Abstraction over the HTTP layer so the client can be exercised in tests
//! without a network. `HttpBackend` is the production implementation;
//! `MockBackend` replays queued responses and records every request.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::json;

use super::error::{TransportError, TransportResult};

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the method as an uppercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single request to the backend, fully resolved.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL (base URL already joined).
    pub url: String,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
    /// Bearer token to attach, when a session is active.
    pub bearer: Option<String>,
}

/// Raw response from the backend, before envelope unwrapping.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Backend trait for HTTP communication.
///
/// Implementations execute one request and return the raw response.
/// Envelope unwrapping and error normalization happen one layer up in
/// [`super::ApiClient`], so mocks only deal in status codes and bodies.
pub trait Backend {
    /// Executes a single request.
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = TransportResult<ApiResponse>> + Send;
}

/// Production backend backed by `reqwest`.
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    /// Creates a backend with the given request timeout.
    pub fn new(timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "Lagoon/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl Backend for HttpBackend {
    async fn execute(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// A canned response or injected failure for [`MockBackend`].
#[derive(Debug)]
enum MockReply {
    Response(ApiResponse),
    Failure(TransportError),
}

/// Mock backend for testing.
///
/// Responses are replayed in FIFO order, one per executed request, and
/// every request is recorded for later assertions. Running out of queued
/// responses is a test bug and fails loudly.
#[derive(Debug, Default)]
pub struct MockBackend {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockBackend {
    /// Creates an empty mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response with the given status and body.
    pub fn queue_response(&self, status: u16, body: impl Into<String>) {
        self.replies
            .lock()
            .expect("mock reply queue poisoned")
            .push_back(MockReply::Response(ApiResponse {
                status,
                body: body.into(),
            }));
    }

    /// Queues a 200 response wrapping `data` in the standard envelope.
    pub fn queue_data(&self, data: serde_json::Value) {
        self.queue_response(200, json!({ "data": data }).to_string());
    }

    /// Queues an error response carrying the conventional error envelope.
    pub fn queue_error(&self, status: u16, message: &str) {
        self.queue_response(
            status,
            json!({ "errors": { "message": message } }).to_string(),
        );
    }

    /// Queues a transport-level failure (e.g. connection refused).
    pub fn queue_failure(&self, error: TransportError) {
        self.replies
            .lock()
            .expect("mock reply queue poisoned")
            .push_back(MockReply::Failure(error));
    }

    /// Returns all requests executed so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    /// Returns the number of queued replies not yet consumed.
    pub fn pending_replies(&self) -> usize {
        self.replies.lock().expect("mock reply queue poisoned").len()
    }
}

impl Backend for MockBackend {
    async fn execute(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request.clone());

        let reply = self
            .replies
            .lock()
            .expect("mock reply queue poisoned")
            .pop_front();

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(error)) => Err(error),
            None => Err(TransportError::ConnectionFailed(format!(
                "no mock reply queued for {} {}",
                request.method.as_str(),
                request.url
            ))),
        }
    }
}
