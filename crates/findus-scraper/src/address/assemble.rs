//! Reassembly of classified unit slots into a canonical address string.

use super::units::{AddressUnits, UnitKey};

/// Concatenates the present unit tokens in canonical order.
///
/// When `coarse`, the village / road / building detail is dropped and the
/// result must bottom out at neighborhood, town or township granularity:
/// a coarse address whose final character is not one of 동/읍/면 is rejected
/// as unusable. The check is deliberately on the final character only,
/// matching upstream behavior (multi-character suffixes can never pass).
#[must_use]
pub fn assemble(units: &AddressUnits, coarse: bool) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();

    for key in UnitKey::CANONICAL_ORDER {
        if coarse
            && matches!(
                key,
                UnitKey::Village | UnitKey::BigRoad | UnitKey::SubRoad | UnitKey::BuildingNumber
            )
        {
            continue;
        }
        let token = units.get(key);
        if !token.is_empty() {
            parts.push(token);
        }
    }

    let result = parts.join(" ");
    if result.is_empty() {
        return None;
    }
    if coarse && !matches!(result.chars().last(), Some('동' | '읍' | '면')) {
        return None;
    }
    Some(result)
}
