//! Tokenization and unit classification of raw address strings.

use regex::Regex;

use super::units::{AddressKind, AddressUnits, UnitKey};

/// Metropolitan cities whose short names expand to the full `-광역시` form.
const METRO_CITIES: [&str; 6] = ["부산", "대구", "인천", "광주", "대전", "울산"];

/// Splits a raw address string into words and classifies each word into a
/// unit slot, producing the immutable unit map and its derived kind.
///
/// The classification is a single pass over the words; each slot is claimed
/// by the first word whose suffix matches it, later words with the same
/// suffix are ignored. A post-pass merges a standalone `<n>번길` sub-road
/// into its big road.
#[must_use]
pub fn tokenize(raw: &str) -> (AddressUnits, AddressKind) {
    let glued_road = Regex::new(r"^(.+)로([0-9]{1,})$").expect("valid glued road regex");
    let lot_number = Regex::new(r"^[0-9]{1,}(-[0-9]{1,})?$").expect("valid lot number regex");

    let mut units = raw
        .split_whitespace()
        .fold(AddressUnits::default(), |mut units, word| {
            let word = normalize_word(word);
            classify_word(&mut units, word, &glued_road, &lot_number);
            units
        });

    merge_numbered_sub_road(&mut units);

    let kind = if units.get(UnitKey::BigRoad).is_empty() && units.get(UnitKey::SubRoad).is_empty() {
        AddressKind::Local
    } else {
        AddressKind::Road
    };

    (units, kind)
}

/// Normalization rewrites applied to every word before classification.
fn normalize_word(word: &str) -> String {
    let mut word = rewrite_region_name(word);

    // x번 -> x번길: a numbered-item marker is a malformed sub-road token.
    if word.ends_with('번') {
        word.push('길');
    }

    word
}

fn rewrite_region_name(word: &str) -> String {
    let bare_metro = METRO_CITIES.contains(&word);
    let suffixed_metro = word
        .strip_suffix('시')
        .is_some_and(|stem| METRO_CITIES.contains(&stem));
    if bare_metro || suffixed_metro {
        let stem: String = word.chars().take(2).collect();
        return format!("{stem}광역시");
    }

    match word {
        "서울" | "서울시" => "서울특별시".to_owned(),
        // Upstream appends the full name instead of replacing the token,
        // yielding e.g. "세종세종특별자치시". Kept verbatim; see the
        // sejong_rewrite_duplicates_fragment test.
        "세종" | "세종시" => format!("{word}세종특별자치시"),
        // 강원특별자치도 launched 2023-06-11; fold back to the legacy name
        // so old and new spellings compare equal.
        "강원" | "강원특별자치도" => "강원도".to_owned(),
        _ => word.to_owned(),
    }
}

fn classify_word(units: &mut AddressUnits, word: String, glued_road: &Regex, lot_number: &Regex) {
    if let Some(key) = word.chars().last().and_then(UnitKey::from_suffix) {
        if units.claim(key, word) {
            return;
        }
        // Slot already taken: the word falls through, but a suffixed word
        // can never match the glued-road or numeral patterns below.
        return;
    }

    // <text>로<digits>: a big-road name glued to a malformed sub-road
    // numeral. Split at the road suffix and assign both slots directly.
    if let Some(caps) = glued_road.captures(&word) {
        units.set(UnitKey::BigRoad, format!("{}로", &caps[1]));
        units.set(UnitKey::SubRoad, format!("{}길", &caps[2]));
        return;
    }

    if units.get(UnitKey::BuildingNumber).is_empty() && lot_number.is_match(&word) {
        units.set(UnitKey::BuildingNumber, word);
    }
}

/// Post-pass: `x로` + `y번길` belong together as `x로y번길`. The merged
/// token lives in the sub-road slot; the standalone big road is dropped.
fn merge_numbered_sub_road(units: &mut AddressUnits) {
    let numbered = Regex::new(r"^[0-9]{0,}번길$").expect("valid numbered sub-road regex");
    if !units.get(UnitKey::BigRoad).is_empty() && numbered.is_match(units.get(UnitKey::SubRoad)) {
        let merged = format!("{}{}", units.get(UnitKey::BigRoad), units.get(UnitKey::SubRoad));
        units.set(UnitKey::SubRoad, merged);
        units.clear(UnitKey::BigRoad);
    }
}

/// Pre-lookup repair: the first word of shape `<name>로<digits>` gets `길`
/// appended so the lookup services see a plausible sub-road token.
#[must_use]
pub fn repair_road_fragment(raw: &str) -> String {
    let wrong_road = Regex::new(r"^.{1,}로[0-9]{1,}$").expect("valid wrong road regex");
    let mut words: Vec<String> = raw.split_whitespace().map(ToOwned::to_owned).collect();
    for word in &mut words {
        if wrong_road.is_match(word) {
            word.push('길');
            break;
        }
    }
    words.join(" ")
}

#[cfg(test)]
#[path = "tokenize_test.rs"]
mod tests;
