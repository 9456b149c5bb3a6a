use std::collections::HashMap;
use std::sync::OnceLock;

use super::table::{CONSONANTS, SPECIALS, VOWELS, VOWEL_SIGNS};

struct Node {
    children: HashMap<u8, Node>,
    glyph: Option<&'static str>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            glyph: None,
        }
    }
}

/// Byte-trie over one lookup space, answering maximal-munch queries.
pub struct PrefixTrie {
    root: Node,
}

impl PrefixTrie {
    fn build(entries: &[(&'static str, &'static str)]) -> Self {
        let mut trie = PrefixTrie { root: Node::new() };
        for &(latin, sinhala) in entries {
            trie.insert(latin, sinhala);
        }
        trie
    }

    fn insert(&mut self, latin: &str, sinhala: &'static str) {
        let mut node = &mut self.root;
        for &b in latin.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.glyph = Some(sinhala);
    }

    /// Longest table key that is a prefix of `input`, with its byte length.
    /// Keys are ASCII, so the returned length is always a char boundary.
    pub fn longest_match(&self, input: &str) -> Option<(usize, &'static str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, &b) in input.as_bytes().iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => {
                    node = child;
                    if let Some(glyph) = child.glyph {
                        best = Some((i + 1, glyph));
                    }
                }
                None => break,
            }
        }
        best
    }
}

/// The four compiled lookup spaces. Built once, read-only afterwards, so
/// concurrent converters can share the singleton without coordination.
pub struct SinhalaTables {
    pub vowels: PrefixTrie,
    pub vowel_signs: PrefixTrie,
    pub consonants: PrefixTrie,
    pub specials: PrefixTrie,
}

impl SinhalaTables {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static SinhalaTables {
        static INSTANCE: OnceLock<SinhalaTables> = OnceLock::new();
        INSTANCE.get_or_init(|| SinhalaTables {
            vowels: PrefixTrie::build(VOWELS),
            vowel_signs: PrefixTrie::build(VOWEL_SIGNS),
            consonants: PrefixTrie::build(CONSONANTS),
            specials: PrefixTrie::build(SPECIALS),
        })
    }
}
