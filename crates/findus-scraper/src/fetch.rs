//! HTTP page retrieval from the vendor site.

use crate::error::ScraperError;
use crate::services::PageFetcher;

/// Plain-HTTP page fetcher.
///
/// Network-level failures surface as [`ScraperError::Http`] (transient, the
/// page is abandoned and the run continues); a non-success status surfaces
/// as [`ScraperError::UnexpectedStatus`].
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        HttpPageFetcher { client }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}
