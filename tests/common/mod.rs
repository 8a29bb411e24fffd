// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: a canned-response HTTP stub and fixture credentials.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use withings::Credentials;

/// Fixture credentials for signing against a stub.
pub fn test_credentials() -> Credentials {
    Credentials {
        access_token: "test_access_token".to_string(),
        access_token_secret: "test_access_secret".to_string(),
        consumer_key: "test_consumer_key".to_string(),
        consumer_secret: "test_consumer_secret".to_string(),
        user_id: "12345".to_string(),
    }
}

/// Spawn a loopback HTTP server that answers every request with `body`
/// (HTTP 200, JSON unless the body says otherwise). Returns the base URL.
pub async fn spawn_stub(body: &'static str) -> String {
    spawn_stub_with_status(200, body).await
}

/// Same as [`spawn_stub`] but with a chosen HTTP status code.
pub async fn spawn_stub_with_status(status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 8192];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A loopback URL nothing is listening on (bound then released).
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{}", addr)
}
