/// Runtime configuration for a crawl run.
///
/// Every external collaborator the pipeline talks to is addressed here so
/// tests can point the clients at local mock servers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Vendor site origin hosting the station locator pages.
    pub vendor_base_url: String,
    /// Government road-address registry endpoint.
    pub registry_url: String,
    /// General address-correction / geocoding service endpoint.
    pub correction_url: String,
    /// Best-effort translation service endpoint.
    pub translation_url: String,
    /// Destination-charger lookup endpoint.
    pub destination_lookup_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Mandatory wait after each state-mutating external interaction, to let
    /// the remote side settle before the next query.
    pub settle_delay_ms: u64,
}
