// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth1 HMAC-SHA1 request signing with query-string placement.
//!
//! Withings signs every request by appending the `oauth_*` protocol
//! parameters (including the signature itself) to the query string, so this
//! module produces a complete parameter list ready to be attached to a URL.
//! The signature base string and signing key follow RFC 5849.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use ring::rand::{SecureRandom, SystemRandom};
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha1 = Hmac<Sha1>;

/// Token-level signing material: `(oauth_token, token_secret)`.
///
/// Absent while fetching a request token, present for every later call.
pub type Token<'a> = (&'a str, &'a str);

/// Extra OAuth protocol parameters used only during the three-legged flow.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowParams<'a> {
    /// `oauth_callback` for the request-token step.
    pub callback: Option<&'a str>,
    /// `oauth_verifier` for the access-token step.
    pub verifier: Option<&'a str>,
}

/// Percent-encode a string per RFC 3986 (the OAuth1 unreserved set).
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Build the complete signed query for a request.
///
/// Returns `params` extended with the `oauth_*` protocol parameters and the
/// computed `oauth_signature`, in a form suitable for `reqwest`'s `.query()`.
pub fn signed_query(
    method: &str,
    url: &str,
    params: &[(String, String)],
    consumer_key: &str,
    consumer_secret: &str,
    token: Option<Token<'_>>,
    flow: FlowParams<'_>,
) -> Result<Vec<(String, String)>> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Auth(format!("system time error: {}", e)))?
        .as_secs();

    let mut query: Vec<(String, String)> = params.to_vec();
    query.push(("oauth_consumer_key".into(), consumer_key.into()));
    query.push(("oauth_nonce".into(), nonce()?));
    query.push(("oauth_signature_method".into(), "HMAC-SHA1".into()));
    query.push(("oauth_timestamp".into(), timestamp.to_string()));
    query.push(("oauth_version".into(), "1.0".into()));
    if let Some((key, _)) = token {
        query.push(("oauth_token".into(), key.into()));
    }
    if let Some(callback) = flow.callback {
        query.push(("oauth_callback".into(), callback.into()));
    }
    if let Some(verifier) = flow.verifier {
        query.push(("oauth_verifier".into(), verifier.into()));
    }

    let base = signature_base_string(method, url, &query);
    let key = signing_key(consumer_secret, token.map(|(_, secret)| secret));
    let signature = STANDARD.encode(hmac_sha1(key.as_bytes(), base.as_bytes()));
    query.push(("oauth_signature".into(), signature));

    Ok(query)
}

/// RFC 5849 signature base string: `METHOD&enc(url)&enc(sorted params)`.
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    )
}

/// HMAC key: `enc(consumer_secret)&enc(token_secret)`, empty token half
/// before an access token exists.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or(""))
    )
}

fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    // HmacSha1::new_from_slice accepts any key length
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// 16 random bytes, hex-encoded.
fn nonce() -> Result<String> {
    let mut bytes = [0u8; 16];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| Error::Auth("nonce generation failed".to_string()))?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_unreserved_untouched() {
        assert_eq!(percent_encode("abcXYZ019-._~"), "abcXYZ019-._~");
    }

    #[test]
    fn test_percent_encode_reserved() {
        assert_eq!(percent_encode("a b&c=d/e"), "a%20b%26c%3Dd%2Fe");
        assert_eq!(percent_encode("http://x.example/cb"), "http%3A%2F%2Fx.example%2Fcb");
    }

    #[test]
    fn test_hmac_sha1_known_vector() {
        // Classic HMAC-SHA1 test vector
        let digest = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(
            hex::encode(digest),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn test_signature_base_string_sorts_params() {
        let params = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        let base = signature_base_string("get", "http://api.example/svc", &params);
        assert_eq!(base, "GET&http%3A%2F%2Fapi.example%2Fsvc&a%3D1%26b%3D2");
    }

    #[test]
    fn test_signing_key_without_token_secret() {
        assert_eq!(signing_key("secret", None), "secret&");
        assert_eq!(signing_key("s cret", Some("tok en")), "s%20cret&tok%20en");
    }

    #[test]
    fn test_signed_query_carries_protocol_params() {
        let params = vec![("action".to_string(), "getmeas".to_string())];
        let query = signed_query(
            "GET",
            "http://wbsapi.example/measure",
            &params,
            "ck",
            "cs",
            Some(("tok", "toksec")),
            FlowParams::default(),
        )
        .expect("signing should succeed");

        let get = |name: &str| {
            query
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("action"), Some("getmeas"));
        assert_eq!(get("oauth_consumer_key"), Some("ck"));
        assert_eq!(get("oauth_token"), Some("tok"));
        assert_eq!(get("oauth_signature_method"), Some("HMAC-SHA1"));
        assert_eq!(get("oauth_version"), Some("1.0"));

        // 20-byte HMAC-SHA1 digest in base64 is always 28 chars
        let signature = get("oauth_signature").expect("signature present");
        assert_eq!(signature.len(), 28);

        // Nonce is 16 bytes hex-encoded
        let nonce = get("oauth_nonce").expect("nonce present");
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_nonces_are_unique() {
        let a = nonce().unwrap();
        let b = nonce().unwrap();
        assert_ne!(a, b);
    }
}
