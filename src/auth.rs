// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Three-legged OAuth1 flow against the Withings account endpoints.
//!
//! Request token -> user authorization -> access token. Each step is a
//! single call-and-response; the only state is the transient request
//! token/secret pair, which the caller holds between steps as a
//! [`RequestToken`].

use crate::error::{Error, Result};
use crate::models::Credentials;
use crate::oauth::{self, FlowParams};
use std::collections::HashMap;
use url::Url;

/// Base URL of the provider's OAuth account endpoints.
pub const ACCOUNT_URL: &str = "https://oauth.withings.com/account";

/// Temporary token/secret pair held between the two steps of the flow.
#[derive(Debug, Clone)]
pub struct RequestToken {
    pub token: String,
    pub secret: String,
}

/// Driver for the three-legged OAuth1 flow.
#[derive(Clone)]
pub struct WithingsAuth {
    http: reqwest::Client,
    base_url: String,
    consumer_key: String,
    consumer_secret: String,
    callback_uri: Option<String>,
}

impl WithingsAuth {
    /// Create a flow driver for an out-of-band (PIN-style) authorization.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ACCOUNT_URL.to_string(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            callback_uri: None,
        }
    }

    /// Create a flow driver that sends the user back to `callback_uri`
    /// after authorization.
    pub fn with_callback(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        callback_uri: impl Into<String>,
    ) -> Self {
        Self {
            callback_uri: Some(callback_uri.into()),
            ..Self::new(consumer_key, consumer_secret)
        }
    }

    /// Point the flow at a different provider base URL (local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch a request token and build the user-facing authorization URL.
    ///
    /// Returns the pending [`RequestToken`] (needed again in
    /// [`get_credentials`](Self::get_credentials)) and the URL the user
    /// must visit to authorize the application.
    pub async fn get_authorize_url(&self) -> Result<(RequestToken, String)> {
        let url = format!("{}/request_token", self.base_url);
        let query = oauth::signed_query(
            "POST",
            &url,
            &[],
            &self.consumer_key,
            &self.consumer_secret,
            None,
            FlowParams {
                callback: self.callback_uri.as_deref(),
                verifier: None,
            },
        )?;

        let fields = self.fetch_token_fields(&url, &query).await?;
        let token = require_field(&fields, "oauth_token")?;
        let secret = require_field(&fields, "oauth_token_secret")?;

        let authorize = Url::parse_with_params(
            &format!("{}/authorize", self.base_url),
            &[("oauth_token", token.as_str())],
        )
        .map_err(|e| Error::Auth(format!("building authorize URL: {}", e)))?;

        tracing::debug!(token = %token, "Request token obtained");
        Ok((
            RequestToken {
                token,
                secret,
            },
            authorize.into(),
        ))
    }

    /// Exchange an authorized request token plus verifier for permanent
    /// access credentials.
    pub async fn get_credentials(
        &self,
        request_token: &RequestToken,
        verifier: &str,
    ) -> Result<Credentials> {
        let url = format!("{}/access_token", self.base_url);
        let query = oauth::signed_query(
            "POST",
            &url,
            &[],
            &self.consumer_key,
            &self.consumer_secret,
            Some((&request_token.token, &request_token.secret)),
            FlowParams {
                callback: None,
                verifier: Some(verifier),
            },
        )?;

        let fields = self.fetch_token_fields(&url, &query).await?;
        let user_id = require_field(&fields, "userid")?;
        tracing::info!(user_id = %user_id, "Access credentials obtained");

        Ok(Credentials {
            access_token: require_field(&fields, "oauth_token")?,
            access_token_secret: require_field(&fields, "oauth_token_secret")?,
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            user_id,
        })
    }

    /// POST a signed token request and parse the form-encoded response.
    ///
    /// Every failure in the flow (network, non-2xx, unreadable body) maps
    /// to [`Error::Auth`]; the caller decides whether to retry.
    async fn fetch_token_fields(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<HashMap<String, String>> {
        let response = self
            .http
            .post(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Auth(format!("token request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Auth(format!("reading token response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Auth(format!(
                "provider rejected token request: HTTP {}: {}",
                status, body
            )));
        }

        Ok(url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect())
    }
}

fn require_field(fields: &HashMap<String, String>, name: &'static str) -> Result<String> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| Error::Auth(format!("token response missing {}", name)))
}
