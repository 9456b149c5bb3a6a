//! Singlish (Latin-phonetic) → Sinhala transliteration.
//!
//! A static mapping table split into four lookup spaces (standalone vowels,
//! vowel signs, consonants, prenasalized specials) is compiled once into
//! byte-tries; `transliterate` runs a single longest-match pass over them.

mod convert;
pub mod table;
mod trie;

#[cfg(test)]
mod tests;

pub use convert::transliterate;
pub use table::{mapping_entries, MappingCategory, MappingEntry};
pub use trie::SinhalaTables;

/// True for code points in the Sinhala Unicode block (U+0D80–U+0DFF).
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}
