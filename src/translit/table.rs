//! Static Singlish → Sinhala mapping tables.
//!
//! Keys are case-sensitive: an uppercase first letter selects the
//! aspirated/retroflex variant of a consonant ("k" ක vs "K" ඛ, "th" ත vs
//! "TH" ථ). The tables are read-only after process start; lookup is exact,
//! never case-folded.

/// Standalone vowel glyphs, used at word start or after another vowel.
pub static VOWELS: &[(&str, &str)] = &[
    ("a", "අ"),
    ("aa", "ආ"),
    ("ae", "ඇ"),
    ("aee", "ඈ"),
    ("i", "ඉ"),
    ("ii", "ඊ"),
    ("u", "උ"),
    ("uu", "ඌ"),
    ("e", "එ"),
    ("ee", "ඒ"),
    ("ai", "ඓ"),
    ("o", "ඔ"),
    ("oo", "ඕ"),
    ("au", "ඖ"),
];

/// Combining vowel signs attached after a consonant. The keys mirror
/// `VOWELS`; "a" maps to the empty string because the inherent vowel is
/// written with no diacritic.
pub static VOWEL_SIGNS: &[(&str, &str)] = &[
    ("a", ""),
    ("aa", "ා"),
    ("ae", "ැ"),
    ("aee", "ෑ"),
    ("i", "ි"),
    ("ii", "ී"),
    ("u", "ු"),
    ("uu", "ූ"),
    ("e", "ෙ"),
    ("ee", "ේ"),
    ("ai", "ෛ"),
    ("o", "ො"),
    ("oo", "ෝ"),
    ("au", "ෞ"),
];

/// Base consonant glyphs.
pub static CONSONANTS: &[(&str, &str)] = &[
    ("k", "ක"),
    ("K", "ඛ"),
    ("g", "ග"),
    ("G", "ඝ"),
    ("ch", "ච"),
    ("CH", "ඡ"),
    ("j", "ජ"),
    ("J", "ඣ"),
    ("t", "ට"),
    ("T", "ඨ"),
    ("d", "ඩ"),
    ("D", "ඪ"),
    ("th", "ත"),
    ("TH", "ථ"),
    ("dh", "ද"),
    ("DH", "ධ"),
    ("n", "න"),
    ("N", "ණ"),
    ("p", "ප"),
    ("P", "ඵ"),
    ("b", "බ"),
    ("B", "භ"),
    ("m", "ම"),
    ("y", "ය"),
    ("r", "ර"),
    ("l", "ල"),
    ("L", "ළ"),
    ("v", "ව"),
    ("w", "ව"),
    ("s", "ස"),
    ("sh", "ශ"),
    ("S", "ෂ"),
    ("h", "හ"),
    ("f", "ෆ"),
];

/// Prenasalized sanyaka clusters and conjuncts. Matched with priority over
/// any decomposition into nasal + plain consonant.
pub static SPECIALS: &[(&str, &str)] = &[
    ("nG", "ඟ"),
    ("nD", "ඳ"),
    ("nDh", "ඬ"),
    ("nB", "ඹ"),
    ("ny", "ඤ"),
    ("kn", "ඥ"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingCategory {
    Vowel,
    VowelSign,
    Consonant,
    Special,
}

impl MappingCategory {
    pub fn label(self) -> &'static str {
        match self {
            MappingCategory::Vowel => "Vowels",
            MappingCategory::VowelSign => "Vowel Signs",
            MappingCategory::Consonant => "Consonants",
            MappingCategory::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub latin: &'static str,
    pub sinhala: &'static str,
    pub category: MappingCategory,
}

/// All mapping entries across the four lookup spaces, in table order.
/// Used by the help/mappings listing, not by the converter itself.
pub fn mapping_entries() -> impl Iterator<Item = MappingEntry> {
    let tagged = |entries: &'static [(&'static str, &'static str)], category| {
        entries.iter().map(move |&(latin, sinhala)| MappingEntry {
            latin,
            sinhala,
            category,
        })
    };
    tagged(VOWELS, MappingCategory::Vowel)
        .chain(tagged(CONSONANTS, MappingCategory::Consonant))
        .chain(tagged(VOWEL_SIGNS, MappingCategory::VowelSign))
        .chain(tagged(SPECIALS, MappingCategory::Special))
}
