//! Static lookup tables
//!
//! Every table is declared as a `const` slice of pairs and materialized into a
//! `HashMap` on first use. Tables are read-only for the life of the process and
//! may be read from any thread. A missing key is the expected case, not an
//! error: each strategy decides its own fallback.

mod chinese;
mod codes;
mod pools;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use pools::{
    CHINESE_HOT_WORDS, EMOJIS, ENGLISH_HOT_WORDS, MAX_INSERTS, SPECIAL_SYMBOLS,
};

/// A lazily built character table
pub struct CharTable {
    pairs: &'static [(char, &'static str)],
    map: OnceLock<HashMap<char, &'static str>>,
}

impl CharTable {
    const fn new(pairs: &'static [(char, &'static str)]) -> Self {
        Self {
            pairs,
            map: OnceLock::new(),
        }
    }

    /// Look up a single character
    pub fn get(&self, key: char) -> Option<&'static str> {
        self.map
            .get_or_init(|| self.pairs.iter().copied().collect())
            .get(&key)
            .copied()
    }

    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }
}

/// Latin letters, digits and punctuation to Morse code
pub static MORSE: CharTable = CharTable::new(codes::MORSE);

/// Latin letters, digits and punctuation to Braille cells
pub static BRAILLE: CharTable = CharTable::new(codes::BRAILLE);

/// Chinese characters to their component radicals
pub static DECOMPOSITION: CharTable = CharTable::new(chinese::DECOMPOSITION);

/// Simplified Chinese to traditional Chinese
pub static SIMPLIFIED_TO_TRADITIONAL: CharTable = CharTable::new(chinese::SIMPLIFIED_TO_TRADITIONAL);

/// Arabic digits to financial upper-case Chinese numerals
pub static DIGIT_TO_CHINESE_NUMERAL: CharTable = CharTable::new(chinese::DIGIT_TO_CHINESE_NUMERAL);

/// Simplified Chinese to "Martian text" look-alikes
pub static SIMPLIFIED_LEET: CharTable = CharTable::new(chinese::SIMPLIFIED_LEET);

/// Traditional Chinese to "Martian text" look-alikes
pub static TRADITIONAL_LEET: CharTable = CharTable::new(chinese::TRADITIONAL_LEET);

/// Digits to look-alike glyphs
pub static DIGIT_LEET: CharTable = CharTable::new(codes::DIGIT_LEET);

/// Leet-speak replacement for a single Latin letter, case-insensitive
pub fn letter_to_leet(c: char) -> Option<&'static str> {
    codes::letter_leet(c.to_ascii_lowercase())
}
