//! Client for the general address-correction / geocoding service.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use findus_core::Coordinate;

use crate::error::ScraperError;
use crate::services::CorrectionAddressService;

use super::settle;

/// Sentinel string the service puts in the first slot when it has no
/// refined result.
const NO_RESULT_SENTINEL: &str = "정제결과없음";

#[derive(Debug, Deserialize)]
struct RefineResponse {
    #[serde(default)]
    address1: Option<String>,
    #[serde(default)]
    address2: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

pub struct CorrectionClient {
    client: reqwest::Client,
    base_url: String,
    settle_delay: Duration,
}

impl CorrectionClient {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String, settle_delay: Duration) -> Self {
        CorrectionClient {
            client,
            base_url,
            settle_delay,
        }
    }

    fn url_for(&self, path: &str, address: &str) -> String {
        format!(
            "{}/{path}?juso={}",
            self.base_url.trim_end_matches('/'),
            utf8_percent_encode(address, NON_ALPHANUMERIC)
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        context: &str,
    ) -> Result<T, ScraperError> {
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
        serde_json::from_str(&body).map_err(|source| ScraperError::Deserialize {
            context: context.to_owned(),
            source,
        })
    }
}

impl CorrectionAddressService for CorrectionClient {
    async fn lookup(&self, address: &str) -> Result<(Option<String>, Option<String>), ScraperError> {
        let url = self.url_for("refine", address);
        let parsed: RefineResponse = self.get_json(url, "correction refine response").await?;

        let first = parsed
            .address1
            .filter(|s| !s.is_empty() && s != NO_RESULT_SENTINEL)
            .map(|s| strip_paren_annex(&s));
        if first.is_none() {
            return Ok((None, None));
        }

        // The service decorates its second string with a trailing
        // building-management token; it is always dropped.
        let second = parsed
            .address2
            .filter(|s| !s.is_empty())
            .map(|s| drop_last_word(&s))
            .filter(|s| !s.is_empty());

        Ok((first, second))
    }

    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ScraperError> {
        let url = self.url_for("geocode", address);
        let parsed: GeocodeResponse = self.get_json(url, "correction geocode response").await?;

        match (parsed.latitude, parsed.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(Coordinate::new(latitude, longitude))),
            _ => Ok(None),
        }
    }
}

fn strip_paren_annex(address: &str) -> String {
    match address.find('(') {
        Some(idx) => address[..idx].trim_end().to_owned(),
        None => address.to_owned(),
    }
}

fn drop_last_word(address: &str) -> String {
    let words: Vec<&str> = address.split_whitespace().collect();
    match words.split_last() {
        Some((_, head)) => head.join(" "),
        None => String::new(),
    }
}
