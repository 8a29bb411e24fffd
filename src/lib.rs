// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client library for the Withings body-metrics API.
//!
//! Authenticates with three-legged OAuth1, signs each request with a
//! query-string HMAC-SHA1 signature, and maps the JSON responses into
//! typed records (measure groups, activity summaries, sleep summaries).
//!
//! ```no_run
//! use withings::{MeasuresQuery, WithingsAuth, WithingsClient};
//!
//! # async fn run() -> withings::Result<()> {
//! let auth = WithingsAuth::new("consumer_key", "consumer_secret");
//! let (request_token, url) = auth.get_authorize_url().await?;
//! // Send the user to `url`, collect the verifier they are shown...
//! let credentials = auth.get_credentials(&request_token, "verifier").await?;
//!
//! let client = WithingsClient::new(credentials);
//! let measures = client
//!     .get_measures(&MeasuresQuery { limit: Some(1), ..Default::default() })
//!     .await?;
//! if let Some(weight) = measures.groups.first().and_then(|g| g.weight()) {
//!     println!("Your last measured weight: {weight} kg");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod oauth;
pub mod response;
pub mod status;

pub use auth::{RequestToken, WithingsAuth};
pub use client::{DateRange, MeasuresQuery, WithingsClient};
pub use error::{Error, Result};
pub use models::{
    scale, ActivityGroup, Credentials, Measure, MeasureGroup, MeasureType, Measures,
    SleepSummaryGroup, SubscriptionProfile,
};
pub use response::MeasuresCollection;
pub use status::ApiStatus;
