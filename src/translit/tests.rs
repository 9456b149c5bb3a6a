use proptest::prelude::*;

use super::transliterate;

#[test]
fn test_empty_input() {
    assert_eq!(transliterate(""), "");
}

#[test]
fn test_standalone_vowels() {
    assert_eq!(transliterate("a"), "අ");
    assert_eq!(transliterate("aa"), "ආ");
    assert_eq!(transliterate("u"), "උ");
    assert_eq!(transliterate("ee"), "ඒ");
    assert_eq!(transliterate("au"), "ඖ");
}

#[test]
fn test_vowel_maximal_munch() {
    // "aa" is one glyph, not two "a"s; "ai" is the diphthong, not a+i.
    assert_eq!(transliterate("aa"), "ආ");
    assert_ne!(transliterate("aa"), transliterate("a").repeat(2));
    assert_eq!(transliterate("ai"), "ඓ");
    assert_eq!(transliterate("a i"), "අ ඉ");
}

#[test]
fn test_bare_consonant_has_inherent_vowel() {
    assert_eq!(transliterate("k"), "ක");
    assert_eq!(transliterate("L"), "ළ");
    // Explicit "a" maps to the empty sign: identical output.
    assert_eq!(transliterate("ka"), transliterate("k"));
}

#[test]
fn test_vowel_sign_attachment() {
    assert_eq!(transliterate("kaa"), "කා");
    assert_eq!(transliterate("ki"), "කි");
    assert_eq!(transliterate("koo"), "කෝ");
    assert_eq!(transliterate("kau"), "කෞ");
    // Attached sign, not consonant followed by a standalone vowel.
    assert_ne!(transliterate("kaa"), transliterate("k") + &transliterate("aa"));
}

#[test]
fn test_consonant_maximal_munch() {
    assert_eq!(transliterate("th"), "ත");
    assert_ne!(transliterate("th"), transliterate("t") + &transliterate("h"));
    assert_eq!(transliterate("dhaa"), "දා");
    assert_eq!(transliterate("sha"), "ශ");
}

#[test]
fn test_case_sensitivity() {
    assert_eq!(transliterate("k"), "ක");
    assert_eq!(transliterate("K"), "ඛ");
    assert_ne!(transliterate("k"), transliterate("K"));
    assert_eq!(transliterate("tha"), "ත");
    assert_eq!(transliterate("THa"), "ථ");
    assert_eq!(transliterate("S"), "ෂ");
    assert_eq!(transliterate("sa Sa"), "ස ෂ");
}

#[test]
fn test_special_cluster_priority() {
    // The fused sanyaka glyph, never nasal + consonant.
    assert_eq!(transliterate("nG"), "ඟ");
    assert_eq!(transliterate("nB"), "ඹ");
    assert_eq!(transliterate("kn"), "ඥ");
    assert_ne!(transliterate("nG"), transliterate("n") + &transliterate("G"));
}

#[test]
fn test_special_cluster_consumes_full_syllable() {
    // A special already encodes consonant + inherent vowel, so no vowel
    // sign attaches: a following vowel is standalone.
    assert_eq!(transliterate("nGa"), "ඟඅ");
    assert_eq!(transliterate("nDaa"), "ඳආ");
    assert_eq!(transliterate("nyi"), "ඤඉ");
}

#[test]
fn test_special_cluster_maximal_munch() {
    // "nDh" is its own cluster, not "nD" followed by "h".
    assert_eq!(transliterate("nDh"), "ඬ");
    assert_eq!(transliterate("nD"), "ඳ");
}

#[test]
fn test_cluster_consonant_takes_al_lakuna() {
    // A consonant directly followed by another consonant carries the vowel
    // killer; a final consonant keeps its bare inherent-vowel form.
    assert_eq!(transliterate("amma"), "අම්ම");
    assert_eq!(transliterate("anna"), "අන්න");
    assert_eq!(transliterate("thth"), "ත්ත");
}

#[test]
fn test_pass_through_non_scheme_chars() {
    assert_eq!(transliterate("129 + 470"), "129 + 470");
    assert_eq!(transliterate("x"), "x");
    assert_eq!(transliterate("Z?!"), "Z?!");
    assert_eq!(transliterate("«»"), "«»");
}

#[test]
fn test_pass_through_mid_word() {
    // "H" is not a consonant key; it falls through between matches.
    assert_eq!(transliterate("tH"), "ටH");
    assert_eq!(transliterate("ka9ki"), "ක9කි");
}

#[test]
fn test_sentences() {
    assert_eq!(transliterate("oya kohedha?"), "ඔය කොහෙද?");
    assert_eq!(transliterate("mama gedhara yanawaa"), "මම ගෙදර යනවා");
    // Final consonant stays bare; the cluster "thr" takes the vowel killer.
    assert_eq!(transliterate("suba raathriyak"), "සුබ රාත්රියක");
}

#[test]
fn test_deterministic() {
    let input = "oya kohedha? mama gedhara!";
    assert_eq!(transliterate(input), transliterate(input));
}

proptest! {
    #[test]
    fn prop_non_scheme_input_is_identity(s in "[XZQxqz0-9 .,!?:;()_+-]*") {
        prop_assert_eq!(transliterate(&s), s);
    }

    #[test]
    fn prop_total_on_arbitrary_unicode(s in "\\PC*") {
        // Never panics, and repeated runs agree (pure function).
        let once = transliterate(&s);
        let twice = transliterate(&s);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_output_empty_only_for_empty_input(s in "\\PC+") {
        prop_assert!(!transliterate(&s).is_empty());
    }
}
