use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build a default client.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("tesla-notify/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .context("failed to build the HTTP client")
}
