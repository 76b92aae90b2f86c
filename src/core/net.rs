// src/core/net.rs
// Blocking HTTP plumbing shared by the page source and the webhook notifier.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{ELEMENT_TIMEOUT, USER_AGENT};

/// Build a client with our user agent, a hard request timeout and an optional proxy.
pub fn build_client(proxy: Option<&str>, timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(ELEMENT_TIMEOUT.min(timeout));
    if let Some(p) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(p)?);
    }
    builder.build()
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send()?.error_for_status()?.text()
}
