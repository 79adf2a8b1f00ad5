// src/core/net.rs
//
// Blocking HTTP GET used by the page session.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::options::ScrapeOptions;
use crate::error::ScrapeError;

pub fn build_client(opts: &ScrapeOptions) -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .user_agent(opts.user_agent.clone())
        .timeout(Duration::from_secs(opts.timeout_secs))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx is an error.
pub fn http_get(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let resp = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(resp.text()?)
}
