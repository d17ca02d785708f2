//! Charger panel text parsing.
//!
//! Each station detail page carries a panel of free-text lines, one per
//! charger group. The lines follow fixed sentence templates per charger
//! type; anything non-empty that matches neither template is auxiliary info
//! (customer-only notices and the like) and is kept as-is, latest line wins.

use regex::Regex;

use findus_core::{Charger, ChargerType};

/// Parsed charger panel: the structured charger groups plus the latest
/// auxiliary line, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChargerPanel {
    pub chargers: Vec<Charger>,
    pub info: Option<String>,
}

/// Sentence template for one charger type. Capture 1 is the power in kW,
/// capture 2 the port count.
fn template_for(charger_type: ChargerType) -> Regex {
    let pattern = match charger_type {
        ChargerType::Supercharger => r"^최대 ([0-9]{1,})kW로 연중 무휴 이용 가능한 ([0-9]{1,}) 수퍼차저$",
        ChargerType::Destination => r"^최대 ([0-9]{1,})kW로 연중 무휴 이용 가능한 ([0-9]{1,}) Tesla 커넥터$",
    };
    Regex::new(pattern).expect("valid charger template regex")
}

/// Classify a panel of raw text lines into charger groups and auxiliary info.
///
/// Matching is permissive: a line matching neither template is not an error,
/// it overwrites the auxiliary info slot. Page order is preserved.
#[must_use]
pub fn parse_charger_lines(lines: &[&str]) -> ChargerPanel {
    let templates = [
        (ChargerType::Supercharger, template_for(ChargerType::Supercharger)),
        (ChargerType::Destination, template_for(ChargerType::Destination)),
    ];

    let mut panel = ChargerPanel::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let matched = templates.iter().find_map(|(charger_type, template)| {
            template
                .captures(line)
                .and_then(|caps| parse_charger(*charger_type, &caps))
        });

        match matched {
            Some(charger) => panel.chargers.push(charger),
            None => panel.info = Some(line.to_owned()),
        }
    }

    panel
}

fn parse_charger(charger_type: ChargerType, caps: &regex::Captures<'_>) -> Option<Charger> {
    let max_power_kw: u32 = caps.get(1)?.as_str().parse().ok()?;
    let port_count: u32 = caps.get(2)?.as_str().parse().ok()?;
    if max_power_kw == 0 || port_count == 0 {
        return None;
    }
    Some(Charger {
        charger_type,
        max_power_kw,
        port_count,
    })
}
