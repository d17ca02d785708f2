//! Korean administrative address handling.
//!
//! Raw address strings scraped from the locator pages are inconsistent:
//! abbreviated province names, road and lot fragments glued together,
//! missing postal codes. [`tokenize`] decomposes a raw string into canonical
//! unit slots, [`assemble`] rebuilds a canonical string from them.

mod assemble;
mod tokenize;
mod units;

pub use assemble::assemble;
pub use tokenize::{repair_road_fragment, tokenize};
pub use units::{AddressKind, AddressUnits, UnitKey};
