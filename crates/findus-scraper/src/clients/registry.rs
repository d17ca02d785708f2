//! Client for the government road-address registry.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::error::ScraperError;
use crate::services::{RegistryAddressService, RegistryResult};

use super::settle;

/// Registry search response. Only the first match is consulted.
#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    results: RegistryResults,
}

#[derive(Debug, Default, Deserialize)]
struct RegistryResults {
    #[serde(default)]
    juso: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    #[serde(rename = "roadAddr", default)]
    road_addr: Option<String>,
    #[serde(rename = "jibunAddr", default)]
    jibun_addr: Option<String>,
    #[serde(rename = "zipNo", default)]
    zip_no: Option<String>,
}

pub struct RegistryClient {
    client: reqwest::Client,
    endpoint: String,
    settle_delay: Duration,
}

impl RegistryClient {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: String, settle_delay: Duration) -> Self {
        RegistryClient {
            client,
            endpoint,
            settle_delay,
        }
    }

    fn search_url(&self, address: &str, postal_code: &str) -> String {
        let keyword = format!("{postal_code} {address}");
        let keyword = keyword.trim();
        format!(
            "{}?currentPage=1&countPerPage=1&resultType=json&keyword={}",
            self.endpoint,
            utf8_percent_encode(keyword, NON_ALPHANUMERIC)
        )
    }
}

impl RegistryAddressService for RegistryClient {
    async fn search(&self, address: &str, postal_code: &str) -> Result<RegistryResult, ScraperError> {
        let url = self.search_url(address, postal_code);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        settle(self.settle_delay).await;

        let parsed: RegistryResponse =
            serde_json::from_str(&body).map_err(|source| ScraperError::Deserialize {
                context: "registry search response".to_owned(),
                source,
            })?;

        let Some(entry) = parsed.results.juso.into_iter().next() else {
            return Ok(RegistryResult::default());
        };

        Ok(RegistryResult {
            road_address: entry
                .road_addr
                .filter(|s| !s.is_empty())
                .map(|s| strip_paren_annex(&s)),
            local_address: entry.jibun_addr.filter(|s| !s.is_empty()),
            postal_code: entry.zip_no.filter(|s| !s.is_empty()),
        })
    }
}

/// The registry suffixes road addresses with a parenthesized neighborhood
/// annex ("... 152 (역삼동)"); everything from the opening paren is dropped.
fn strip_paren_annex(address: &str) -> String {
    match address.find('(') {
        Some(idx) => address[..idx].trim_end().to_owned(),
        None => address.to_owned(),
    }
}
