//! Lookup for destination chargers hosted at third-party venues.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use findus_core::{Charger, ChargerType};

use crate::services::DestinationChargerLookup;

use super::settle;

/// Venue name the result must carry; anything else is another brand's
/// charger at a nearby address.
const EXPECTED_VENUE_NAME: &str = "Tesla Destination Charger";

#[derive(Debug, Deserialize)]
struct VenueResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    max_power_kw: Option<u32>,
    #[serde(default)]
    port_count: Option<u32>,
}

pub struct DestinationClient {
    client: reqwest::Client,
    endpoint: String,
    settle_delay: Duration,
}

impl DestinationClient {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: String, settle_delay: Duration) -> Self {
        DestinationClient {
            client,
            endpoint,
            settle_delay,
        }
    }

    async fn try_find(&self, address: &str) -> Option<Charger> {
        let query = format!("{EXPECTED_VENUE_NAME}, {address}");
        let url = format!(
            "{}?query={}",
            self.endpoint,
            utf8_percent_encode(&query, NON_ALPHANUMERIC)
        );
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let venue: VenueResponse = response.json().await.ok()?;
        settle(self.settle_delay).await;

        if venue.name.as_deref() != Some(EXPECTED_VENUE_NAME) {
            return None;
        }
        let max_power_kw = venue.max_power_kw.filter(|kw| *kw > 0)?;
        let port_count = venue.port_count.filter(|count| *count > 0)?;

        Some(Charger {
            charger_type: ChargerType::Destination,
            max_power_kw,
            port_count,
        })
    }
}

impl DestinationChargerLookup for DestinationClient {
    async fn find(&self, address: &str) -> Option<Charger> {
        let found = self.try_find(address).await;
        if found.is_none() {
            tracing::debug!(address, "no destination charger found at address");
        }
        found
    }
}
