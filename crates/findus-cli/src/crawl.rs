//! Crawl command handler.
//!
//! Called from `main` after config and logging are established. Opens one
//! scrape session for the whole run and releases it before exporting.

use std::path::Path;

use findus_core::{export, AppConfig, ChargerType, Station};
use findus_scraper::Session;

use crate::Target;

impl Target {
    fn charger_types(self) -> &'static [ChargerType] {
        match self {
            Target::Supercharger => &[ChargerType::Supercharger],
            Target::Destination => &[ChargerType::Destination],
            Target::All => &[ChargerType::Supercharger, ChargerType::Destination],
        }
    }
}

/// Crawl the selected listings and export the results.
///
/// With no output path the JSON document goes to stdout. Both `--json` and
/// `--csv` may be given on the same run.
///
/// # Errors
///
/// Returns an error when the session cannot be opened, a listing crawl
/// fails, or an export file cannot be written.
pub(crate) async fn run_crawl(
    config: &AppConfig,
    target: Target,
    json_path: Option<&Path>,
    csv_path: Option<&Path>,
) -> anyhow::Result<()> {
    let session = Session::open(config)?;

    let mut stations: Vec<Station> = Vec::new();
    for charger_type in target.charger_types() {
        let found = findus_scraper::crawl(&session, *charger_type).await?;
        tracing::info!(count = found.len(), ?charger_type, "listing crawled");
        stations.extend(found);
    }
    session.close();

    if let Some(path) = json_path {
        std::fs::write(path, export::to_json(&stations)?)?;
        println!("wrote {} stations to {}", stations.len(), path.display());
    }
    if let Some(path) = csv_path {
        export::write_csv_file(path, &stations)?;
        println!("wrote {} stations to {}", stations.len(), path.display());
    }
    if json_path.is_none() && csv_path.is_none() {
        println!("{}", export::to_json(&stations)?);
    }

    Ok(())
}
