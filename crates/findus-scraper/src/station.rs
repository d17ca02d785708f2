//! Assembly of a final [`Station`] record from one parsed detail page.

use regex::Regex;

use findus_core::{Charger, ChargerType, Station};

use crate::address::repair_road_fragment;
use crate::charger::parse_charger_lines;
use crate::detail::DetailPage;
use crate::error::ScraperError;
use crate::reconcile::reconcile;
use crate::services::{
    CorrectionAddressService, DestinationChargerLookup, RegistryAddressService, TranslationService,
};

/// Combine a detail page with the lookup services into a final station
/// record.
///
/// Returns `Ok(None)` for disqualified records: opening-soon stations,
/// names in Japanese script (the vendor mixes Japanese stations into the
/// map tiles), pages with no usable address, and stations whose coordinate
/// cannot be resolved.
///
/// # Errors
///
/// Propagates [`ScraperError::Http`] from the address services; the caller
/// logs and skips the station.
pub async fn assemble_station<R, C, T, D>(
    registry: &R,
    correction: &C,
    translator: &T,
    destination: &D,
    page: DetailPage,
    charger_type: ChargerType,
) -> Result<Option<Station>, ScraperError>
where
    R: RegistryAddressService,
    C: CorrectionAddressService,
    T: TranslationService,
    D: DestinationChargerLookup,
{
    if page.opening_soon {
        tracing::debug!(name = %page.name, "skipping station that has not opened yet");
        return Ok(None);
    }
    if contains_japanese(&page.name) {
        tracing::debug!(name = %page.name, "skipping Japanese station");
        return Ok(None);
    }

    let name = translate_station_name(translator, &page.name).await;

    let Some(address_line) = page.address_line else {
        tracing::debug!(name = %name, "skipping station without an address");
        return Ok(None);
    };
    let address_text = translate_address(translator, &address_line).await;
    let address_text = repair_road_fragment(&address_text);

    let Some(address) = reconcile(registry, correction, &address_text, &page.postal_code).await?
    else {
        tracing::debug!(name = %name, raw = %address_text, "no usable address; skipping station");
        return Ok(None);
    };

    let coordinate = match page.coordinate {
        Some(coordinate) => coordinate,
        None => match correction.geocode(&address.name).await? {
            Some(coordinate) => coordinate,
            None => {
                tracing::warn!(
                    name = %name,
                    address = %address.name,
                    "coordinate resolution failed; dropping station"
                );
                return Ok(None);
            }
        },
    };

    let lines: Vec<&str> = page.charger_lines.iter().map(String::as_str).collect();
    let mut panel = parse_charger_lines(&lines);
    if let Some(info) = &panel.info {
        tracing::debug!(name = %name, info = %info, "charger panel carried auxiliary info");
    }

    if panel.chargers.is_empty() {
        if let Some(found) = destination.find(&address.name).await {
            panel.chargers.push(found);
        }
    }
    if panel.chargers.is_empty() {
        panel.chargers.push(Charger::default_for(charger_type));
    }

    Ok(Some(Station {
        name,
        coordinate,
        address,
        chargers: panel.chargers,
        is_always_open: true,
        charger_type,
    }))
}

/// Station names that are fully Latin text get translated; anything already
/// carrying Korean script is kept (é shows up in a handful of venue names).
async fn translate_station_name<T: TranslationService>(translator: &T, name: &str) -> String {
    let all_latin = name.chars().all(|ch| ch.is_ascii() || ch == 'é');
    if all_latin {
        translator.translate(name).await
    } else {
        name.to_owned()
    }
}

/// An address is translated when any of its words is Latin text (ignoring
/// pure digit/hyphen tokens, which are lot numbers). Commas are stripped
/// first; they confuse the lookup services either way.
async fn translate_address<T: TranslationService>(translator: &T, address: &str) -> String {
    let address = address.replace(',', "");
    let latin_word = Regex::new(r"^[a-zA-Z0-9-]{1,}$").expect("valid latin word regex");
    let numeric_word = Regex::new(r"^[0-9-]{1,}$").expect("valid numeric word regex");

    let has_latin_word = address
        .split_whitespace()
        .any(|word| latin_word.is_match(word) && !numeric_word.is_match(word));

    if has_latin_word {
        translator.translate(&address).await
    } else {
        address
    }
}

fn contains_japanese(text: &str) -> bool {
    let japanese = Regex::new(r"[ぁ-ゔァ-ヴー々〆〤一-龥]").expect("valid japanese script regex");
    japanese.is_match(text)
}

#[cfg(test)]
#[path = "station_test.rs"]
mod tests;
