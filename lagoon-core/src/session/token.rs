// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access-Token Validity
//!
//! The backend issues JWT access tokens. The client does not verify
//! signatures (the server does); it only decodes the payload to read the
//! expiry, so an obviously dead token is discarded instead of producing a
//! guaranteed 401 on the first request. Any decode failure counts as
//! invalid.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: u64,
}

/// Returns the `exp` claim of a JWT, if the payload decodes.
pub fn decode_expiry(token: &str) -> Option<u64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

/// Checks whether a token's expiry lies in the future.
pub fn is_valid(token: &str) -> bool {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    decode_expiry(token).is_some_and(|exp| exp > now)
}
