//! Domain types shared across the findus workspace.
//!
//! A [`Station`] is the unit of output: one charging station with a
//! reconciled Korean address, a coordinate, and one or more chargers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod export;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

/// The two charger classes Tesla publishes on its Korean locator pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargerType {
    Supercharger,
    Destination,
}

impl ChargerType {
    /// Korean display label used in the CSV export.
    #[must_use]
    pub fn korean_label(self) -> &'static str {
        match self {
            ChargerType::Supercharger => "수퍼차저",
            ChargerType::Destination => "데스티네이션",
        }
    }
}

/// One charger group within a station, as described by a single line of the
/// station's charger panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charger {
    pub charger_type: ChargerType,
    /// Maximum charging power in kW. Always positive.
    pub max_power_kw: u32,
    /// Number of ports in this group. Always positive.
    pub port_count: u32,
}

impl Charger {
    /// Synthesized default for a station whose charger panel yielded nothing.
    ///
    /// Superchargers get the fleet-typical 100 kW; destination chargers the
    /// fixed low-power 7 kW. Both default to a single port.
    #[must_use]
    pub fn default_for(charger_type: ChargerType) -> Self {
        let max_power_kw = match charger_type {
            ChargerType::Supercharger => 100,
            ChargerType::Destination => 7,
        };
        Charger {
            charger_type,
            max_power_kw,
            port_count: 1,
        }
    }
}

/// A WGS84 coordinate, rounded to six decimal places on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude: round6(latitude),
            longitude: round6(longitude),
        }
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// A reconciled Korean address.
///
/// `name` is the canonical road-form (or, when only a lot-form survived
/// reconciliation, lot-form) address. `region3` is the coarse
/// administrative form ending at neighborhood/town/township granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAddress {
    pub name: String,
    /// Five-digit zero-padded postal code, or empty when unknown.
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region3: Option<String>,
}

/// One charging station, fully assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinate: Coordinate,
    pub address: CanonicalAddress,
    /// Non-empty after default injection; order follows the page.
    pub chargers: Vec<Charger>,
    pub is_always_open: bool,
    pub charger_type: ChargerType,
}

impl Station {
    /// Deduplication key: stations sharing a name and a canonical address
    /// are the same station. The first occurrence wins.
    #[must_use]
    pub fn dedup_key(&self) -> (String, String) {
        (self.name.clone(), self.address.name.clone())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
