// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Provider status codes from the response envelope.
//!
//! Every API response wraps its payload in `{"status": <int>, "body": {...}}`.
//! The codes and messages below are the ones documented at
//! <http://oauth.withings.com/api/doc>; anything else maps to
//! [`ApiStatus::Unknown`] so an unrecognized code never turns into a panic.

use std::fmt;

/// A status code reported in the API response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    /// 0: Operation was successful
    Success,
    /// 247: The userid provided is absent, or incorrect
    InvalidUserId,
    /// 250: The provided userid and/or Oauth credentials do not match
    CredentialMismatch,
    /// 286: No such subscription was found
    SubscriptionNotFound,
    /// 293: The callback URL is either absent or incorrect
    InvalidCallbackUrl,
    /// 294: No such subscription could be deleted
    SubscriptionNotDeleted,
    /// 304: The comment is either absent or incorrect
    InvalidComment,
    /// 305: Too many notifications are already set
    TooManyNotifications,
    /// 342: The signature (using Oauth) is invalid
    InvalidSignature,
    /// 343: Wrong Notification Callback Url don't exist
    CallbackUrlNotFound,
    /// 601: Too Many Request
    TooManyRequests,
    /// 2554: Wrong action or wrong webservice
    WrongActionOrService,
    /// 2555: An unknown error occurred
    ProviderError,
    /// 2556: Service is not defined
    ServiceUndefined,
    /// A code not present in the provider documentation.
    Unknown(i64),
}

impl ApiStatus {
    /// Map a raw envelope status code to its variant.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ApiStatus::Success,
            247 => ApiStatus::InvalidUserId,
            250 => ApiStatus::CredentialMismatch,
            286 => ApiStatus::SubscriptionNotFound,
            293 => ApiStatus::InvalidCallbackUrl,
            294 => ApiStatus::SubscriptionNotDeleted,
            304 => ApiStatus::InvalidComment,
            305 => ApiStatus::TooManyNotifications,
            342 => ApiStatus::InvalidSignature,
            343 => ApiStatus::CallbackUrlNotFound,
            601 => ApiStatus::TooManyRequests,
            2554 => ApiStatus::WrongActionOrService,
            2555 => ApiStatus::ProviderError,
            2556 => ApiStatus::ServiceUndefined,
            other => ApiStatus::Unknown(other),
        }
    }

    /// The raw numeric code.
    pub fn code(&self) -> i64 {
        match self {
            ApiStatus::Success => 0,
            ApiStatus::InvalidUserId => 247,
            ApiStatus::CredentialMismatch => 250,
            ApiStatus::SubscriptionNotFound => 286,
            ApiStatus::InvalidCallbackUrl => 293,
            ApiStatus::SubscriptionNotDeleted => 294,
            ApiStatus::InvalidComment => 304,
            ApiStatus::TooManyNotifications => 305,
            ApiStatus::InvalidSignature => 342,
            ApiStatus::CallbackUrlNotFound => 343,
            ApiStatus::TooManyRequests => 601,
            ApiStatus::WrongActionOrService => 2554,
            ApiStatus::ProviderError => 2555,
            ApiStatus::ServiceUndefined => 2556,
            ApiStatus::Unknown(code) => *code,
        }
    }

    /// Human-readable message from the provider documentation.
    pub fn message(&self) -> &'static str {
        match self {
            ApiStatus::Success => "Operation was successful",
            ApiStatus::InvalidUserId => "The userid provided is absent, or incorrect",
            ApiStatus::CredentialMismatch => {
                "The provided userid and/or Oauth credentials do not match"
            }
            ApiStatus::SubscriptionNotFound => "No such subscription was found",
            ApiStatus::InvalidCallbackUrl => "The callback URL is either absent or incorrect",
            ApiStatus::SubscriptionNotDeleted => "No such subscription could be deleted",
            ApiStatus::InvalidComment => "The comment is either absent or incorrect",
            ApiStatus::TooManyNotifications => "Too many notifications are already set",
            ApiStatus::InvalidSignature => "The signature (using Oauth) is invalid",
            ApiStatus::CallbackUrlNotFound => "Wrong Notification Callback Url don't exist",
            ApiStatus::TooManyRequests => "Too Many Request",
            ApiStatus::WrongActionOrService => "Wrong action or wrong webservice",
            ApiStatus::ProviderError => "An unknown error occurred",
            ApiStatus::ServiceUndefined => "Service is not defined",
            ApiStatus::Unknown(_) => "Unrecognized provider status code",
        }
    }

    /// Whether this status marks a successful operation.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiStatus::Success)
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
