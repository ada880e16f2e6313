/// Data model for stored elements
///
/// The container owns values of these types; callers only ever get
/// read-only views back.

use serde::{Deserialize, Serialize};

/// Highest atomic number the Add prompt accepts. Advisory only - the
/// container itself never checks it.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Symbols longer than this are silently cut down on construction
pub const SYMBOL_MAX_LEN: usize = 4;

/// Names longer than this are silently cut down on construction
pub const NAME_MAX_LEN: usize = 19;

/// One entry of the periodic table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
}

impl Element {
    /// Build an element, truncating over-long text fields.
    ///
    /// Truncation counts characters, not bytes, so multi-byte input can
    /// never be split inside a code point.
    pub fn new(atomic_number: u32, symbol: &str, name: &str, atomic_mass: f64) -> Self {
        Self {
            atomic_number,
            symbol: truncate(symbol, SYMBOL_MAX_LEN),
            name: truncate(name, NAME_MAX_LEN),
            atomic_mass,
        }
    }
}

/// Input for inserting a new element
///
/// Raw fields as collected from the caller, before truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementInput {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
}

impl From<ElementInput> for Element {
    fn from(input: ElementInput) -> Self {
        Element::new(
            input.atomic_number,
            &input.symbol,
            &input.name,
            input.atomic_mass,
        )
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
