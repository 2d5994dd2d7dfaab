//! Network model fetching.
//!
//! All requests go through one lazily-built, process-wide blocking client so connections
//! are pooled across calls. The client carries no per-request state.

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::defaults::USER_AGENT;
use crate::error::{Error, Result};

static CLIENT: OnceCell<Client> = OnceCell::new();

/// The shared client, built on first use.
pub fn shared_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        log::debug!("Initializing shared HTTP client");
        Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                Error::transport("HTTP client", "Failed to build client", Some(Box::new(e)))
            })
    })
}

/// Issue a single blocking GET for `url` and return the body.
///
/// A non-success status or an empty body is a transport failure.
pub fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let client = shared_client()?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::transport(url, "Request failed", Some(Box::new(e))))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::transport(
            url,
            format!("Response was not successful: HTTP {}", status),
            None,
        ));
    }

    let body = response
        .bytes()
        .map_err(|e| Error::transport(url, "Failed to read response body", Some(Box::new(e))))?;

    if body.is_empty() {
        return Err(Error::transport(url, "Response has no body", None));
    }

    log::debug!("Received {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
