// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Withings API client: signed request executor and endpoint methods.
//!
//! Each public method issues exactly one blocking-until-complete HTTP
//! request and returns once it finishes. No retries, no caching, no
//! timeout policy of its own (impose one on the transport if needed).

use crate::error::{Error, Result};
use crate::models::{
    ActivityGroup, Credentials, Measures, SleepSummaryGroup, SubscriptionProfile,
};
use crate::oauth::{self, FlowParams};
use crate::response;
use crate::status::ApiStatus;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// Base URL of the Withings body-metrics API.
pub const API_URL: &str = "https://wbsapi.withings.net";

/// Optional filters for `measure/getmeas`.
///
/// All epochs are unix seconds; unset fields are omitted from the query.
#[derive(Debug, Default, Clone)]
pub struct MeasuresQuery {
    pub startdate: Option<i64>,
    pub enddate: Option<i64>,
    pub lastupdate: Option<i64>,
    pub meastype: Option<i64>,
    pub category: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl MeasuresQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(v) = self.startdate {
            params.push(("startdate", v.to_string()));
        }
        if let Some(v) = self.enddate {
            params.push(("enddate", v.to_string()));
        }
        if let Some(v) = self.lastupdate {
            params.push(("lastupdate", v.to_string()));
        }
        if let Some(v) = self.meastype {
            params.push(("meastype", v.to_string()));
        }
        if let Some(v) = self.category {
            params.push(("category", v.to_string()));
        }
        if let Some(v) = self.limit {
            params.push(("limit", v.to_string()));
        }
        if let Some(v) = self.offset {
            params.push(("offset", v.to_string()));
        }
        params
    }
}

/// Calendar-date range (`YYYY-MM-DD`) for the v2 activity/sleep endpoints.
#[derive(Debug, Default, Clone)]
pub struct DateRange {
    pub startdateymd: Option<String>,
    pub enddateymd: Option<String>,
}

impl DateRange {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(v) = &self.startdateymd {
            params.push(("startdateymd", v.clone()));
        }
        if let Some(v) = &self.enddateymd {
            params.push(("enddateymd", v.clone()));
        }
        params
    }
}

/// Withings API client bound to one user's credentials.
#[derive(Clone)]
pub struct WithingsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl WithingsClient {
    /// Create a client for the production API.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, API_URL)
    }

    /// Create a client against a different base URL (local stubs).
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// The credentials this client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign and send one request, returning the envelope's `body`.
    ///
    /// `action` and the user id are injected into `params`, the whole
    /// query is OAuth1-signed (query placement), and the JSON envelope is
    /// checked: a non-zero `status` is [`Error::Api`], a missing `body` on
    /// success comes back as `Value::Null`.
    pub async fn request(
        &self,
        service: &str,
        action: &str,
        params: &[(&str, String)],
        method: Method,
    ) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, service);

        let mut query: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        query.push(("action".to_string(), action.to_string()));
        query.push(("userid".to_string(), self.credentials.user_id.clone()));

        let signed = oauth::signed_query(
            method.as_str(),
            &url,
            &query,
            &self.credentials.consumer_key,
            &self.credentials.consumer_secret,
            Some((
                &self.credentials.access_token,
                &self.credentials.access_token_secret,
            )),
            FlowParams::default(),
        )?;

        tracing::debug!(service = %service, action = %action, "API request");
        let raw = self
            .http
            .request(method, &url)
            .query(&signed)
            .send()
            .await?
            .text()
            .await?;

        parse_envelope(&raw)
    }

    /// Fetch the authenticated user's profile (`user` / `getbyuserid`).
    ///
    /// Returned as the raw payload; the provider's user schema is not
    /// modeled by this library.
    pub async fn get_user(&self) -> Result<Value> {
        self.request("user", "getbyuserid", &[], Method::GET).await
    }

    /// Fetch body measurements (`measure` / `getmeas`).
    pub async fn get_measures(&self, query: &MeasuresQuery) -> Result<Measures> {
        let body = self
            .request("measure", "getmeas", &query.to_params(), Method::GET)
            .await?;
        response::parse_measures(body)
    }

    /// Fetch daily activity summaries (`v2/measure` / `getactivity`).
    pub async fn get_activity(&self, range: &DateRange) -> Result<Vec<ActivityGroup>> {
        let body = self
            .request("v2/measure", "getactivity", &range.to_params(), Method::GET)
            .await?;
        response::parse_activities(body)
    }

    /// Fetch sleep-session summaries (`v2/sleep` / `getsummary`).
    pub async fn get_sleep_summary(&self, range: &DateRange) -> Result<Vec<SleepSummaryGroup>> {
        let body = self
            .request("v2/sleep", "getsummary", &range.to_params(), Method::GET)
            .await?;
        response::parse_sleep_summary(body)
    }

    /// Register a notification callback (`notify` / `subscribe`).
    pub async fn subscribe(&self, callback_url: &str, comment: &str, appli: u32) -> Result<()> {
        let params = [
            ("callbackurl", callback_url.to_string()),
            ("comment", comment.to_string()),
            ("appli", appli.to_string()),
        ];
        self.request("notify", "subscribe", &params, Method::GET)
            .await?;
        Ok(())
    }

    /// Remove a notification callback (`notify` / `revoke`).
    pub async fn unsubscribe(&self, callback_url: &str, appli: u32) -> Result<()> {
        let params = [
            ("callbackurl", callback_url.to_string()),
            ("appli", appli.to_string()),
        ];
        self.request("notify", "revoke", &params, Method::GET)
            .await?;
        Ok(())
    }

    /// Check whether a callback is subscribed (`notify` / `get`).
    ///
    /// Deliberately permissive: any failure — the server reporting "no such
    /// subscription" (status 286) but equally a network outage or an
    /// invalid signature — comes back as `false`. A transport failure is
    /// therefore indistinguishable from a legitimate "not subscribed";
    /// callers that need the distinction should use
    /// [`request`](Self::request) directly.
    pub async fn is_subscribed(&self, callback_url: &str, appli: u32) -> bool {
        let params = [
            ("callbackurl", callback_url.to_string()),
            ("appli", appli.to_string()),
        ];
        match self.request("notify", "get", &params, Method::GET).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Subscription check failed, reporting not subscribed");
                false
            }
        }
    }

    /// List registered notification callbacks (`notify` / `list`).
    pub async fn list_subscriptions(&self, appli: u32) -> Result<Vec<SubscriptionProfile>> {
        let params = [("appli", appli.to_string())];
        let body = self.request("notify", "list", &params, Method::GET).await?;

        #[derive(Deserialize)]
        struct Profiles {
            profiles: Vec<SubscriptionProfile>,
        }

        let parsed: Profiles = serde_json::from_value(body)
            .map_err(|e| Error::MalformedResponse(format!("subscription list: {}", e)))?;
        Ok(parsed.profiles)
    }
}

#[derive(Deserialize)]
struct Envelope {
    status: i64,
    #[serde(default)]
    body: Option<Value>,
}

/// Parse the `{status, body}` envelope shared by every endpoint.
///
/// A missing or non-integer `status` is a malformed response; a non-zero
/// status is an API error carrying the documented message (or the
/// [`ApiStatus::Unknown`] fallback for undocumented codes).
pub fn parse_envelope(raw: &str) -> Result<Value> {
    let envelope: Envelope = serde_json::from_str(raw)
        .map_err(|e| Error::MalformedResponse(format!("invalid envelope: {}", e)))?;

    let status = ApiStatus::from_code(envelope.status);
    if !status.is_success() {
        return Err(Error::Api(status));
    }
    Ok(envelope.body.unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_query_omits_unset_fields() {
        let query = MeasuresQuery {
            limit: Some(1),
            ..Default::default()
        };
        assert_eq!(query.to_params(), vec![("limit", "1".to_string())]);
        assert!(MeasuresQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_date_range_params() {
        let range = DateRange {
            startdateymd: Some("2020-01-01".to_string()),
            enddateymd: Some("2020-01-31".to_string()),
        };
        assert_eq!(
            range.to_params(),
            vec![
                ("startdateymd", "2020-01-01".to_string()),
                ("enddateymd", "2020-01-31".to_string()),
            ]
        );
    }
}
