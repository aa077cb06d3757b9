// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Client
//!
//! Thin wrapper over a [`Backend`] that joins paths onto the base URL,
//! attaches the bearer token whenever a session is active, and unwraps the
//! backend's conventional response envelope:
//!
//! - success bodies are `{ "data": ... }` and the payload is returned,
//! - error bodies are `{ "errors": { "message": ... } }` and the message is
//!   normalized into [`TransportError::Api`], falling back to
//!   `"Unknown Error"` when the body carries no message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::backend::{ApiRequest, ApiResponse, Backend, Method};
use super::error::{TransportError, TransportResult};

/// Fallback message when an error response carries no usable envelope.
const UNKNOWN_ERROR: &str = "Unknown Error";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the Lagoon backend.
pub struct ApiClient<B: Backend> {
    backend: B,
    base_url: String,
    token: Option<String>,
}

impl<B: Backend> ApiClient<B> {
    /// Creates a client against the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated; request paths always
    /// start with `/`.
    pub fn new(backend: B, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            backend,
            base_url,
            token: None,
        }
    }

    /// Sets or clears the bearer token attached to every request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Returns the currently attached bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `GET path?query` returning the envelope's `data` payload.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TransportResult<T> {
        let response = self.request(Method::Get, path, query, None).await?;
        unwrap_data(response)
    }

    /// `POST path` with a JSON body, returning the `data` payload.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> TransportResult<T> {
        let body = serde_json::to_value(body)?;
        let response = self.request(Method::Post, path, &[], Some(body)).await?;
        unwrap_data(response)
    }

    /// `PUT path` with a JSON body, returning the `data` payload.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> TransportResult<T> {
        let body = serde_json::to_value(body)?;
        let response = self.request(Method::Put, path, &[], Some(body)).await?;
        unwrap_data(response)
    }

    /// `DELETE path`, discarding any response payload.
    pub async fn delete(&self, path: &str) -> TransportResult<()> {
        let response = self.request(Method::Delete, path, &[], None).await?;
        check_status(&response)?;
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> TransportResult<ApiResponse> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body,
            bearer: self.token.clone(),
        };

        tracing::debug!(
            target: "lagoon::transport",
            "{} {}",
            request.method.as_str(),
            request.url
        );

        let response = self.backend.execute(request).await.inspect_err(|err| {
            tracing::warn!(target: "lagoon::transport", "request failed: {err}");
        })?;

        tracing::debug!(
            target: "lagoon::transport",
            "{} {} -> {}",
            method.as_str(),
            path,
            response.status
        );

        Ok(response)
    }
}

/// Rejects non-2xx responses, normalizing the error message.
fn check_status(response: &ApiResponse) -> TransportResult<()> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(TransportError::Api {
        status: response.status,
        message: extract_error_message(&response.body),
    })
}

/// Unwraps the `data` payload of a successful response.
fn unwrap_data<T: DeserializeOwned>(response: ApiResponse) -> TransportResult<T> {
    check_status(&response)?;
    let envelope: Envelope<T> = serde_json::from_str(&response.body)?;
    envelope.data.ok_or(TransportError::MissingData)
}

/// Pulls `errors.message` out of an error body, with the literal
/// `"Unknown Error"` fallback the backend contract specifies.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.errors)
        .and_then(|errors| errors.message)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.into(),
        }
    }

    #[test]
    fn unwraps_data_payload() {
        let value: serde_json::Value =
            unwrap_data(response(200, r#"{"data": {"x": 1}}"#)).unwrap();
        assert_eq!(value["x"], 1);
    }

    #[test]
    fn missing_data_is_an_error() {
        let result: TransportResult<serde_json::Value> =
            unwrap_data(response(200, r#"{"success": true}"#));
        assert!(matches!(result, Err(TransportError::MissingData)));
    }

    #[test]
    fn extracts_server_error_message() {
        let result: TransportResult<serde_json::Value> = unwrap_data(response(
            400,
            r#"{"errors": {"message": "Invalid credentials"}}"#,
        ));
        match result {
            Err(TransportError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_unknown_error() {
        let result: TransportResult<serde_json::Value> =
            unwrap_data(response(500, "<html>gateway timeout</html>"));
        match result {
            Err(TransportError::Api { message, .. }) => assert_eq!(message, "Unknown Error"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(
            crate::transport::MockBackend::new(),
            "http://localhost:5000/api/",
        );
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }
}
