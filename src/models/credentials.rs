// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access credentials obtained from the OAuth1 flow.

use serde::{Deserialize, Serialize};

/// Everything needed to sign API requests for one user.
///
/// All fields are opaque strings; the consumer key/secret identify the
/// application, the access token/secret and user id identify the user who
/// authorized it. Plain value data with no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub access_token_secret: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub user_id: String,
}
