use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from<'a>(map: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| map.get(key).map(ToString::to_string).ok_or(VarError::NotPresent)
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let env = HashMap::new();
    let config = build_app_config(lookup_from(&env)).unwrap();
    assert_eq!(config.vendor_base_url, "https://www.tesla.com");
    assert_eq!(config.request_timeout_secs, 10);
    assert_eq!(config.settle_delay_ms, 1000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn env_values_override_defaults() {
    let env = HashMap::from([
        ("FINDUS_VENDOR_BASE_URL", "http://127.0.0.1:9000"),
        ("FINDUS_REQUEST_TIMEOUT_SECS", "3"),
        ("FINDUS_SETTLE_DELAY_MS", "0"),
    ]);
    let config = build_app_config(lookup_from(&env)).unwrap();
    assert_eq!(config.vendor_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.settle_delay_ms, 0);
}

#[test]
fn invalid_numeric_value_is_rejected() {
    let env = HashMap::from([("FINDUS_REQUEST_TIMEOUT_SECS", "soon")]);
    let err = build_app_config(lookup_from(&env)).unwrap_err();
    assert!(matches!(
        err,
        crate::ConfigError::InvalidEnvVar { ref var, .. } if var == "FINDUS_REQUEST_TIMEOUT_SECS"
    ));
}
