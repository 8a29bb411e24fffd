// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables (with `.env` support).

use crate::models::Credentials;
use std::env;

/// Application configuration for the CLI, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Consumer key issued when registering the application.
    pub consumer_key: String,
    /// Consumer secret issued when registering the application.
    pub consumer_secret: String,
    /// Optional OAuth callback URI; out-of-band flow when absent.
    pub callback_uri: Option<String>,

    // Stored access credentials from an earlier authorization, if any.
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub user_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if one is present. Only the consumer key and
    /// secret are required; stored access credentials are optional and
    /// their absence means the three-legged flow must be run.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            consumer_key: env::var("WITHINGS_CONSUMER_KEY")
                .map_err(|_| ConfigError::Missing("WITHINGS_CONSUMER_KEY"))?,
            consumer_secret: env::var("WITHINGS_CONSUMER_SECRET")
                .map_err(|_| ConfigError::Missing("WITHINGS_CONSUMER_SECRET"))?,
            callback_uri: env::var("WITHINGS_CALLBACK_URI").ok(),
            access_token: env::var("WITHINGS_ACCESS_TOKEN").ok(),
            access_token_secret: env::var("WITHINGS_ACCESS_TOKEN_SECRET").ok(),
            user_id: env::var("WITHINGS_USER_ID").ok(),
        })
    }

    /// Build full credentials if all the stored pieces are present.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.access_token, &self.access_token_secret, &self.user_id) {
            (Some(token), Some(secret), Some(user_id)) => Some(Credentials {
                access_token: token.clone(),
                access_token_secret: secret.clone(),
                consumer_key: self.consumer_key.clone(),
                consumer_secret: self.consumer_secret.clone(),
                user_id: user_id.clone(),
            }),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
