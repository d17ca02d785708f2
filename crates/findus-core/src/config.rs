use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "findus-crawler/0.1 (+station dataset builder)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function. Decoupled from the real environment so it can be tested with a
/// plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    Ok(AppConfig {
        vendor_base_url: or_default("FINDUS_VENDOR_BASE_URL", "https://www.tesla.com"),
        registry_url: or_default(
            "FINDUS_REGISTRY_URL",
            "https://business.juso.go.kr/addrlink/addrLinkApi.do",
        ),
        correction_url: or_default("FINDUS_CORRECTION_URL", "https://address.dawul.co.kr"),
        translation_url: or_default(
            "FINDUS_TRANSLATION_URL",
            "https://translate.googleapis.com/translate_a/single",
        ),
        destination_lookup_url: or_default(
            "FINDUS_DESTINATION_LOOKUP_URL",
            "https://www.google.com/maps/search",
        ),
        log_level: or_default("FINDUS_LOG_LEVEL", "info"),
        request_timeout_secs: parse_u64("FINDUS_REQUEST_TIMEOUT_SECS", 10)?,
        user_agent: or_default("FINDUS_USER_AGENT", DEFAULT_USER_AGENT),
        settle_delay_ms: parse_u64("FINDUS_SETTLE_DELAY_MS", 1000)?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
