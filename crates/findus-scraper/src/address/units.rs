//! The closed set of administrative unit slots an address decomposes into.

/// One slot in the canonical unit order. Each slot is claimed by the word
/// whose trailing character matches its suffix (building numbers are the
/// bare-numeral exception).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKey {
    /// 도 — province
    Province,
    /// 시 — city
    City,
    /// 군 — county
    County,
    /// 구 — district
    District,
    /// 동 — neighborhood
    Neighborhood,
    /// 읍 — town
    Town,
    /// 면 — township
    Township,
    /// 리 — village
    Village,
    /// 로 — big road
    BigRoad,
    /// 길 — sub road
    SubRoad,
    /// bare lot / building numeral
    BuildingNumber,
}

impl UnitKey {
    /// Canonical concatenation order for reassembly.
    pub const CANONICAL_ORDER: [UnitKey; 11] = [
        UnitKey::Province,
        UnitKey::City,
        UnitKey::County,
        UnitKey::District,
        UnitKey::Neighborhood,
        UnitKey::Town,
        UnitKey::Township,
        UnitKey::Village,
        UnitKey::BigRoad,
        UnitKey::SubRoad,
        UnitKey::BuildingNumber,
    ];

    /// Maps a word's trailing character to the slot it classifies into.
    #[must_use]
    pub fn from_suffix(suffix: char) -> Option<UnitKey> {
        match suffix {
            '도' => Some(UnitKey::Province),
            '시' => Some(UnitKey::City),
            '군' => Some(UnitKey::County),
            '구' => Some(UnitKey::District),
            '동' => Some(UnitKey::Neighborhood),
            '읍' => Some(UnitKey::Town),
            '면' => Some(UnitKey::Township),
            '리' => Some(UnitKey::Village),
            '로' => Some(UnitKey::BigRoad),
            '길' => Some(UnitKey::SubRoad),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            UnitKey::Province => 0,
            UnitKey::City => 1,
            UnitKey::County => 2,
            UnitKey::District => 3,
            UnitKey::Neighborhood => 4,
            UnitKey::Town => 5,
            UnitKey::Township => 6,
            UnitKey::Village => 7,
            UnitKey::BigRoad => 8,
            UnitKey::SubRoad => 9,
            UnitKey::BuildingNumber => 10,
        }
    }
}

/// Mapping from unit slots to tokens. Empty string means the slot is absent.
/// At most one token per slot; classification is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressUnits {
    slots: [String; 11],
}

impl AddressUnits {
    #[must_use]
    pub fn get(&self, key: UnitKey) -> &str {
        &self.slots[key.index()]
    }

    pub(crate) fn set(&mut self, key: UnitKey, token: String) {
        self.slots[key.index()] = token;
    }

    pub(crate) fn clear(&mut self, key: UnitKey) {
        self.slots[key.index()].clear();
    }

    /// Claims `key` for `token` only when the slot is still empty.
    /// Returns whether the claim happened.
    pub(crate) fn claim(&mut self, key: UnitKey, token: String) -> bool {
        if self.get(key).is_empty() {
            self.set(key, token);
            true
        } else {
            false
        }
    }
}

/// Derived address form: road-name based or legacy lot/region based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// A big-road or sub-road slot is populated.
    Road,
    /// Neither road slot is populated.
    Local,
}
