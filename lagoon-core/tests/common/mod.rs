// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for integration tests.

// not every test file uses every fixture
#![allow(dead_code)]

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{json, Value};

use lagoon_core::{Lagoon, LagoonConfig, MockBackend};

/// Page sizes used throughout the tests.
pub const POSTS_PER_PAGE: u32 = 2;
pub const COMMENTS_PER_PAGE: u32 = 2;

pub fn test_config() -> LagoonConfig {
    let mut config = LagoonConfig::new("http://backend.test/api", "unused");
    config.posts_per_page = POSTS_PER_PAGE;
    config.comments_per_page = COMMENTS_PER_PAGE;
    config
}

/// A client over a mock backend, persisting nothing.
pub fn test_client() -> Lagoon<MockBackend> {
    Lagoon::in_memory(test_config(), MockBackend::new()).unwrap()
}

/// A client whose token store lives under `data_dir`.
pub fn test_client_on_disk(data_dir: &Path) -> Lagoon<MockBackend> {
    let mut config = test_config();
    config.data_dir = data_dir.to_path_buf();
    Lagoon::with_backend(config, MockBackend::new()).unwrap()
}

/// Builds a decodable unsigned JWT with the given expiry.
pub fn token_with_expiry(exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

/// A token that expires an hour from now.
pub fn fresh_token() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    token_with_expiry(now + 3600)
}

/// A token that expired long ago.
pub fn expired_token() -> String {
    token_with_expiry(1)
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "avatarUrl": "",
        "coverUrl": "",
        "aboutMe": "",
        "city": "",
        "country": "",
        "company": "",
        "jobTitle": "",
        "facebookLink": "",
        "instagramLink": "",
        "linkedinLink": "",
        "twitterLink": "",
        "friendCount": 0,
        "postCount": 0,
    })
}

pub fn post_json(id: &str, content: &str) -> Value {
    json!({
        "_id": id,
        "author": { "_id": "author-1", "name": "Author", "avatarUrl": "" },
        "createdAt": "2026-01-15T10:00:00.000Z",
        "content": content,
        "reactions": { "like": 0, "dislike": 0 },
    })
}

pub fn comment_json(id: &str, content: &str) -> Value {
    json!({
        "_id": id,
        "author": { "_id": "author-1", "name": "Author", "avatarUrl": "" },
        "createdAt": "2026-01-15T10:00:00.000Z",
        "content": content,
        "reactions": { "like": 0, "dislike": 0 },
    })
}

pub fn friend_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "avatarUrl": "",
        "email": format!("{id}@example.com"),
        "friendship": null,
    })
}

pub fn friendship_json(from: &str, to: &str, status: &str) -> Value {
    json!({ "from": from, "to": to, "status": status })
}

/// Queues a login reply and performs the login.
pub async fn log_in_as(lagoon: &mut Lagoon<MockBackend>, id: &str, name: &str) {
    lagoon.backend().queue_data(json!({
        "user": user_json(id, name),
        "accessToken": fresh_token(),
    }));
    lagoon.login(&format!("{id}@example.com"), "password").await.unwrap();
}
