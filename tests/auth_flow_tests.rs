// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Three-legged flow tests against a canned-response loopback stub.

mod common;

use common::{refused_url, spawn_stub, spawn_stub_with_status};
use withings::{Error, RequestToken, WithingsAuth};

#[tokio::test]
async fn test_get_authorize_url_embeds_request_token() {
    let base = spawn_stub("oauth_token=req_tok&oauth_token_secret=req_sec").await;
    let auth = WithingsAuth::new("ck", "cs").with_base_url(base.clone());

    let (request_token, url) = auth.get_authorize_url().await.expect("flow step succeeds");

    assert_eq!(request_token.token, "req_tok");
    assert_eq!(request_token.secret, "req_sec");
    assert!(url.starts_with(&format!("{}/authorize", base)));
    assert!(url.contains("oauth_token=req_tok"));
}

#[tokio::test]
async fn test_get_credentials_returns_full_record() {
    let base = spawn_stub("oauth_token=acc_tok&oauth_token_secret=acc_sec&userid=42").await;
    let auth = WithingsAuth::new("ck", "cs").with_base_url(base);

    let pending = RequestToken {
        token: "req_tok".to_string(),
        secret: "req_sec".to_string(),
    };
    let credentials = auth
        .get_credentials(&pending, "verifier123")
        .await
        .expect("exchange succeeds");

    assert_eq!(credentials.access_token, "acc_tok");
    assert_eq!(credentials.access_token_secret, "acc_sec");
    assert_eq!(credentials.user_id, "42");
    assert_eq!(credentials.consumer_key, "ck");
    assert_eq!(credentials.consumer_secret, "cs");
}

#[tokio::test]
async fn test_provider_rejection_is_auth_error() {
    let base = spawn_stub_with_status(401, "Invalid signature").await;
    let auth = WithingsAuth::new("ck", "cs").with_base_url(base);

    let err = auth.get_authorize_url().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_missing_token_field_is_auth_error() {
    // Provider answered 200 but without the token fields
    let base = spawn_stub("error=nope").await;
    let auth = WithingsAuth::new("ck", "cs").with_base_url(base);

    let err = auth.get_authorize_url().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert!(err.to_string().contains("oauth_token"));
}

#[tokio::test]
async fn test_network_failure_is_auth_error() {
    // The auth flow maps transport failures to Auth, per its contract.
    let auth = WithingsAuth::new("ck", "cs").with_base_url(refused_url());

    let err = auth.get_authorize_url().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
}
