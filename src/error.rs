// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Library error types.

use crate::status::ApiStatus;

/// Errors surfaced by the Withings client.
///
/// Every public operation propagates its failure to the caller; the library
/// performs no retries. The one exception is
/// [`WithingsClient::is_subscribed`](crate::client::WithingsClient::is_subscribed),
/// which downgrades any failure to `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The OAuth provider rejected a step of the three-legged flow.
    #[error("OAuth flow rejected: {0}")]
    Auth(String),

    /// The API envelope carried a non-zero status code.
    #[error("Withings API error: {0}")]
    Api(ApiStatus),

    /// A response payload was missing keys required by its shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network or HTTP-layer failure from the underlying client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// The provider status code, if this is an API-level error.
    pub fn api_status(&self) -> Option<i64> {
        match self {
            Error::Api(status) => Some(status.code()),
            _ => None,
        }
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
