//! Address reconciliation against the two lookup services.
//!
//! Primary path is the government registry, queried through a fallback
//! ladder; the correction service is the last resort. Whatever comes back is
//! re-tokenized and reassembled so the canonical output format does not
//! drift with the services' own formatting.

use findus_core::CanonicalAddress;

use crate::address::{assemble, tokenize, AddressKind};
use crate::error::ScraperError;
use crate::services::{CorrectionAddressService, RegistryAddressService};

/// Produce a canonical address for an already-translated, pre-processed raw
/// address string. `postal_code` may be empty.
///
/// Returns `Ok(None)` when neither service yields anything usable; the
/// caller rejects the station in that case.
///
/// # Errors
///
/// Propagates [`ScraperError::Http`] from the underlying services.
pub async fn reconcile<R, C>(
    registry: &R,
    correction: &C,
    raw_address: &str,
    postal_code: &str,
) -> Result<Option<CanonicalAddress>, ScraperError>
where
    R: RegistryAddressService,
    C: CorrectionAddressService,
{
    if let Some(outcome) = registry_ladder(registry, raw_address, postal_code).await? {
        let (units, _) = tokenize(&outcome.road_address);
        if let Some(name) = assemble(&units, false) {
            let supplied = normalize_postal(postal_code);
            let postal = if supplied.is_empty() {
                outcome
                    .generated_postal
                    .as_deref()
                    .map(normalize_postal)
                    .unwrap_or_default()
            } else {
                supplied
            };
            let region3 = outcome.local_address.and_then(|local| {
                let (local_units, _) = tokenize(&local);
                assemble(&local_units, true)
            });
            return Ok(Some(CanonicalAddress {
                name,
                postal_code: postal,
                region3,
            }));
        }
        tracing::debug!(
            road = %outcome.road_address,
            "registry road form did not reassemble; falling back to correction service"
        );
    }

    correction_fallback(correction, raw_address, postal_code).await
}

struct RegistryOutcome {
    road_address: String,
    local_address: Option<String>,
    generated_postal: Option<String>,
}

/// The registry fallback ladder. Stops at the first rung that yields a
/// road-form result.
async fn registry_ladder<R>(
    registry: &R,
    address: &str,
    postal_code: &str,
) -> Result<Option<RegistryOutcome>, ScraperError>
where
    R: RegistryAddressService,
{
    // Rung a: postal code + address.
    let result = registry.search(address, postal_code).await?;
    if let Some(road_address) = result.road_address {
        return Ok(Some(RegistryOutcome {
            road_address,
            local_address: result.local_address,
            generated_postal: result.postal_code,
        }));
    }

    // Rung b: address only.
    tracing::debug!(address, "registry miss with postal code; retrying without");
    let result = registry.search(address, "").await?;
    if let Some(road_address) = result.road_address {
        return Ok(Some(RegistryOutcome {
            road_address,
            local_address: result.local_address,
            generated_postal: result.postal_code,
        }));
    }

    // Rung c: drop the last token (assumed a building-number fragment the
    // registry cannot match), then re-append it to whatever road form comes
    // back. The lot form cannot be trusted without the full token and is
    // discarded on this rung.
    let words: Vec<&str> = address.split_whitespace().collect();
    let Some((&last, head)) = words.split_last() else {
        return Ok(None);
    };
    if head.is_empty() {
        return Ok(None);
    }
    tracing::debug!(address, "registry miss; retrying without trailing token");
    let result = registry.search(&head.join(" "), postal_code).await?;
    if let Some(road) = result.road_address {
        let mut road_words: Vec<&str> = road.split_whitespace().collect();
        road_words.pop();
        road_words.push(last);
        return Ok(Some(RegistryOutcome {
            road_address: road_words.join(" "),
            local_address: None,
            generated_postal: (!postal_code.is_empty()).then(|| postal_code.to_owned()),
        }));
    }

    Ok(None)
}

/// Correction-service fallback: classify both returned strings and merge by
/// kind pair.
async fn correction_fallback<C>(
    correction: &C,
    raw_address: &str,
    postal_code: &str,
) -> Result<Option<CanonicalAddress>, ScraperError>
where
    C: CorrectionAddressService,
{
    // A lone second string stands in for both roles; a lone first string
    // does not, so its coarse form stays empty and no region can come of it.
    let (first, second) = match correction.lookup(raw_address).await? {
        (None, None) => {
            tracing::debug!(raw_address, "correction service returned nothing usable");
            return Ok(None);
        }
        (Some(first), Some(second)) => (first, second),
        (Some(first), None) => (first, String::new()),
        (None, Some(only)) => (only.clone(), only),
    };

    let (first_units, first_kind) = tokenize(&first);
    let (second_units, second_kind) = tokenize(&second);

    let (name, region3) = match (first_kind, second_kind) {
        (AddressKind::Road, AddressKind::Local) => (
            assemble(&first_units, false),
            assemble(&second_units, true),
        ),
        (AddressKind::Local, AddressKind::Road) => (
            assemble(&second_units, false),
            assemble(&first_units, true),
        ),
        (AddressKind::Local, AddressKind::Local) => (
            assemble(&first_units, false),
            assemble(&second_units, true),
        ),
        // Both road-form (or otherwise unresolved): keep the first, no
        // region form can be derived.
        _ => (assemble(&first_units, false), None),
    };

    Ok(name.map(|name| CanonicalAddress {
        name,
        postal_code: normalize_postal(postal_code),
        region3,
    }))
}

/// Zero-pad an all-digit postal code to five digits; anything else is
/// treated as unknown.
fn normalize_postal(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.is_empty() && raw.chars().all(|ch| ch.is_ascii_digit()) && raw.len() <= 5 {
        format!("{raw:0>5}")
    } else {
        String::new()
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
