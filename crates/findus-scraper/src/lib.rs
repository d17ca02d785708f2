//! Scraping and normalization pipeline for the Tesla Korea station locator.
//!
//! The interesting work lives in [`address`] (tokenization, unit
//! classification, reassembly) and [`reconcile`] (multi-source address
//! reconciliation with fallback ladders). Everything else is page fetching
//! and field extraction.

pub mod address;
pub mod charger;
pub mod clients;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod reconcile;
pub mod services;
pub mod station;

pub use charger::{parse_charger_lines, ChargerPanel};
pub use clients::Session;
pub use error::ScraperError;
pub use pipeline::crawl;
