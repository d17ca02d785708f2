//! Top-level crawl loop: list page, detail pages, station assembly,
//! deduplication.

use std::collections::HashSet;

use findus_core::{ChargerType, Station};

use crate::clients::Session;
use crate::detail::{extract_detail_urls, parse_detail_page};
use crate::error::ScraperError;
use crate::services::{
    CorrectionAddressService, DestinationChargerLookup, PageFetcher, RegistryAddressService,
    TranslationService,
};
use crate::station::assemble_station;

fn list_path(charger_type: ChargerType) -> &'static str {
    match charger_type {
        ChargerType::Supercharger => "/ko_kr/findus/list/superchargers/South+Korea",
        ChargerType::Destination => "/ko_kr/findus/list/chargers/South+Korea",
    }
}

/// Crawl the vendor's South Korea listing for one charger type.
///
/// # Errors
///
/// Fails when the list page itself cannot be fetched, or when a detail page
/// no longer matches the expected markup ([`ScraperError::Structural`],
/// which means the extraction rules need updating). Per-station fetch and
/// lookup failures are logged and skipped instead.
pub async fn crawl(
    session: &Session,
    charger_type: ChargerType,
) -> Result<Vec<Station>, ScraperError> {
    crawl_with(
        &session.fetcher,
        &session.registry,
        &session.correction,
        &session.translator,
        &session.destination,
        &session.vendor_base_url,
        charger_type,
    )
    .await
}

pub async fn crawl_with<F, R, C, T, D>(
    fetcher: &F,
    registry: &R,
    correction: &C,
    translator: &T,
    destination: &D,
    vendor_base_url: &str,
    charger_type: ChargerType,
) -> Result<Vec<Station>, ScraperError>
where
    F: PageFetcher,
    R: RegistryAddressService,
    C: CorrectionAddressService,
    T: TranslationService,
    D: DestinationChargerLookup,
{
    let base = vendor_base_url.trim_end_matches('/');
    let list_url = format!("{base}{}", list_path(charger_type));

    tracing::info!(url = %list_url, ?charger_type, "fetching station list");
    let list_html = fetcher.fetch(&list_url).await?;
    let detail_urls = extract_detail_urls(&list_html, base);
    tracing::info!(count = detail_urls.len(), "found station detail pages");

    let mut stations = Vec::new();
    let mut seen = HashSet::new();

    for url in detail_urls {
        let html = match fetch_with_retry(fetcher, &url).await {
            Ok(html) => html,
            Err(error) => {
                tracing::warn!(url = %url, error = %error, "detail page unavailable; skipping station");
                continue;
            }
        };
        let page = parse_detail_page(&html, &url)?;

        let station = match assemble_station(
            registry,
            correction,
            translator,
            destination,
            page,
            charger_type,
        )
        .await
        {
            Ok(Some(station)) => station,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(url = %url, error = %error, "station lookup failed; skipping station");
                continue;
            }
        };

        // First occurrence wins; the list page repeats stations that appear
        // in more than one regional section.
        if seen.insert(station.dedup_key()) {
            stations.push(station);
        } else {
            tracing::debug!(name = %station.name, "dropping duplicate station");
        }
    }

    tracing::info!(count = stations.len(), ?charger_type, "crawl finished");
    Ok(stations)
}

/// Detail fetches get one retry; list fetches do not (a broken list page
/// fails the whole run anyway).
async fn fetch_with_retry<F: PageFetcher>(fetcher: &F, url: &str) -> Result<String, ScraperError> {
    match fetcher.fetch(url).await {
        Ok(html) => Ok(html),
        Err(first) => {
            tracing::debug!(url, error = %first, "detail fetch failed once; retrying");
            fetcher.fetch(url).await
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
