//! Contracts for the external collaborators the pipeline consumes.
//!
//! Whether these are backed by plain HTTP, browser automation or test
//! doubles is the implementor's business; the pipeline only sees these
//! traits. The shipped implementations live in [`crate::clients`].

use findus_core::{Charger, Coordinate};

use crate::error::ScraperError;

/// Retrieves raw page bodies from the vendor site.
pub trait PageFetcher {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// [`ScraperError::Http`] on network-level failure (transient, the page
    /// is abandoned); [`ScraperError::UnexpectedStatus`] on a non-success
    /// status (fatal for that URL).
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String, ScraperError>> + Send;
}

/// One lookup result from the government road-address registry.
/// All fields absent means "no match".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryResult {
    pub road_address: Option<String>,
    pub local_address: Option<String>,
    pub postal_code: Option<String>,
}

/// The government road-address registry.
pub trait RegistryAddressService {
    /// Search for `address`, optionally qualified by a postal code
    /// (pass `""` for none).
    ///
    /// # Errors
    ///
    /// [`ScraperError::Http`] on network failure.
    fn search(
        &self,
        address: &str,
        postal_code: &str,
    ) -> impl std::future::Future<Output = Result<RegistryResult, ScraperError>> + Send;
}

/// The general address-correction service, which also geocodes.
pub trait CorrectionAddressService {
    /// Returns two refined address strings of indeterminate ordering
    /// (either could be the road form or the lot form), or `(None, None)`
    /// when the service reports no refined result.
    ///
    /// # Errors
    ///
    /// [`ScraperError::Http`] on network failure.
    fn lookup(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<(Option<String>, Option<String>), ScraperError>> + Send;

    /// Resolve `address` to a coordinate; `None` on failure.
    ///
    /// # Errors
    ///
    /// [`ScraperError::Http`] on network failure.
    fn geocode(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<Option<Coordinate>, ScraperError>> + Send;
}

/// Best-effort text translation. Always yields some string; on failure the
/// input is returned unchanged.
pub trait TranslationService {
    fn translate(&self, text: &str) -> impl std::future::Future<Output = String> + Send;
}

/// Looks up a destination charger hosted at a third-party venue near the
/// given address. `None` on no match or brand mismatch; lookup failures are
/// also `None` (a missing destination charger is never an error).
pub trait DestinationChargerLookup {
    fn find(&self, address: &str) -> impl std::future::Future<Output = Option<Charger>> + Send;
}
