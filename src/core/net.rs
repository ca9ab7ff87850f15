// src/core/net.rs
// Blocking HTTP GET. No retries; transport default timeouts.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Anything that can GET a URL. The pipeline only talks to this,
/// so tests can hand it canned pages instead of the network.
pub trait Fetch: Send {
    /// Raw response body, or `Network` on transport failure / non-2xx status.
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;

    fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let bytes = self.get(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::network("<client init>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::network(url, e))?;

        let body = resp.bytes().map_err(|e| ScrapeError::network(url, e))?;
        Ok(body.to_vec())
    }
}
