// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Minimal CLI for the Withings client.
//!
//! Runs the three-legged OAuth1 flow interactively when no stored access
//! credentials are configured, then fetches and prints the most recent
//! weight measurement.

use anyhow::Context;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use withings::{
    config::Config, Credentials, MeasuresQuery, WithingsAuth, WithingsClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("loading configuration")?;

    let credentials = match config.credentials() {
        Some(credentials) => credentials,
        None => run_auth_flow(&config).await?,
    };

    let client = WithingsClient::new(credentials);
    let measures = client
        .get_measures(&MeasuresQuery {
            limit: Some(1),
            ..Default::default()
        })
        .await
        .context("fetching measures")?;

    match measures.groups.first().and_then(|g| g.weight()) {
        Some(weight) => println!("Your last measured weight: {weight} kg"),
        None => println!("No weight measurement found"),
    }

    Ok(())
}

/// Run the interactive three-legged flow and print the resulting
/// credentials so they can be stored in the environment.
async fn run_auth_flow(config: &Config) -> anyhow::Result<Credentials> {
    let auth = match &config.callback_uri {
        Some(callback) => WithingsAuth::with_callback(
            config.consumer_key.clone(),
            config.consumer_secret.clone(),
            callback.clone(),
        ),
        None => WithingsAuth::new(config.consumer_key.clone(), config.consumer_secret.clone()),
    };

    let (request_token, url) = auth
        .get_authorize_url()
        .await
        .context("fetching request token")?;

    println!("Go to {url}, allow the app and copy your oauth_verifier");
    print!("Please enter your oauth_verifier: ");
    io::stdout().flush()?;

    let mut verifier = String::new();
    io::stdin().read_line(&mut verifier)?;

    let credentials = auth
        .get_credentials(&request_token, verifier.trim())
        .await
        .context("exchanging verifier for access token")?;

    println!("Authorized. To skip this step next time, set:");
    println!("  WITHINGS_ACCESS_TOKEN={}", credentials.access_token);
    println!("  WITHINGS_ACCESS_TOKEN_SECRET={}", credentials.access_token_secret);
    println!("  WITHINGS_USER_ID={}", credentials.user_id);

    Ok(credentials)
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("withings=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
