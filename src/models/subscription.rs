// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification subscription records from `notify/list`.

use serde::{Deserialize, Serialize};

/// One registered notification callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionProfile {
    /// Notification class the subscription covers.
    pub appli: i64,
    /// Callback URL the server notifies.
    pub callbackurl: String,
    /// Free-form comment set at subscription time.
    #[serde(default)]
    pub comment: Option<String>,
    /// Expiry as a unix epoch, when the server reports one.
    #[serde(default)]
    pub expires: Option<i64>,
}
