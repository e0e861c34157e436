use crate::domain::ports::Fetcher;
use crate::utils::error::{CacheError, Result};
use reqwest::Client;
use std::time::Duration;

const RETRY_DELAY: Duration = Duration::from_millis(500);

/// HTTP collaborator: fetch a URL, hand back the response body.
///
/// Optionally retries a bounded number of times with a fixed delay.
/// The cache contract is unaffected either way.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    retries: u32,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, retries: u32) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, retries })
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!("Fetch of {} failed ({}), retry {}", url, err, attempt);
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
