//! reqwest-backed implementations of the service contracts, bundled into a
//! run-scoped [`Session`].

mod correction;
mod destination;
mod registry;
mod translate;

use std::time::Duration;

use findus_core::AppConfig;

pub use correction::CorrectionClient;
pub use destination::DestinationClient;
pub use registry::RegistryClient;
pub use translate::TranslationClient;

use crate::error::ScraperError;
use crate::fetch::HttpPageFetcher;

/// All external collaborator handles for one processing run.
///
/// Opened once, reused for every query within the run, and released as a
/// unit when the run ends — including when an error propagates, since the
/// handles are owned and dropped with the session.
pub struct Session {
    pub fetcher: HttpPageFetcher,
    pub registry: RegistryClient,
    pub correction: CorrectionClient,
    pub translator: TranslationClient,
    pub destination: DestinationClient,
    pub vendor_base_url: String,
}

impl Session {
    /// Open all collaborator handles described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn open(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        let settle = Duration::from_millis(config.settle_delay_ms);

        tracing::debug!(
            vendor = %config.vendor_base_url,
            settle_ms = config.settle_delay_ms,
            "opening scrape session"
        );

        Ok(Session {
            fetcher: HttpPageFetcher::new(client.clone()),
            registry: RegistryClient::new(client.clone(), config.registry_url.clone(), settle),
            correction: CorrectionClient::new(client.clone(), config.correction_url.clone(), settle),
            translator: TranslationClient::new(client.clone(), config.translation_url.clone()),
            destination: DestinationClient::new(
                client,
                config.destination_lookup_url.clone(),
                settle,
            ),
            vendor_base_url: config.vendor_base_url.clone(),
        })
    }

    /// Explicitly release all collaborator handles.
    pub fn close(self) {
        tracing::debug!("scrape session closed");
        drop(self);
    }
}

/// Mandatory post-query wait: external services need time to settle after
/// each state-mutating interaction before the next query is issued.
pub(crate) async fn settle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
