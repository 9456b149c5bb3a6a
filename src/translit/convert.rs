use tracing::debug;

use super::trie::SinhalaTables;

/// Al-lakuna (U+0DCA), the vowel killer. Written after a consonant that is
/// directly followed by another consonant, since a cluster-initial
/// consonant carries no inherent vowel ("amma" → අම්ම).
const AL_LAKUNA: char = '\u{0DCA}';

/// Transliterate Singlish phonetic text into Sinhala script.
///
/// Total and pure: any input (including empty) yields an output, characters
/// outside the phonetic scheme pass through verbatim, and the result
/// depends only on the input and the static tables. Input is never
/// case-folded — "k" and "K" select different consonants.
///
/// Single left-to-right pass; at each position the longest matching key
/// wins (maximal munch), and the lookup spaces are tried in fixed priority:
/// specials, then consonants (with a trailing vowel-sign lookup), then
/// standalone vowels, then pass-through.
pub fn transliterate(input: &str) -> String {
    let tables = SinhalaTables::global();
    let mut out = String::with_capacity(input.len() * 2);
    let mut rest = input;

    while !rest.is_empty() {
        // Prenasalized clusters outrank their nasal+consonant decomposition,
        // and already encode a full syllable: no vowel-sign lookup follows.
        if let Some((len, glyph)) = tables.specials.longest_match(rest) {
            out.push_str(glyph);
            rest = &rest[len..];
            continue;
        }

        if let Some((len, glyph)) = tables.consonants.longest_match(rest) {
            out.push_str(glyph);
            let after = &rest[len..];
            if let Some((sign_len, sign)) = tables.vowel_signs.longest_match(after) {
                // The "a" sign is empty, so "ka" and "k" render identically.
                out.push_str(sign);
                rest = &after[sign_len..];
            } else {
                if begins_consonant(tables, after) {
                    out.push(AL_LAKUNA);
                }
                rest = after;
            }
            continue;
        }

        if let Some((len, glyph)) = tables.vowels.longest_match(rest) {
            out.push_str(glyph);
            rest = &rest[len..];
            continue;
        }

        // Pass-through for whitespace, punctuation, digits, and anything
        // else outside the scheme.
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
            rest = chars.as_str();
        }
    }

    debug!(in_len = input.len(), out_len = out.len());
    out
}

/// True when `input` starts another consonant or special cluster, i.e. the
/// preceding consonant sits cluster-initial and needs the vowel killer.
fn begins_consonant(tables: &SinhalaTables, input: &str) -> bool {
    tables.specials.longest_match(input).is_some()
        || tables.consonants.longest_match(input).is_some()
}
