//! Property-based tests over the built-in tables.
//!
//! Tokens are sampled from the tables themselves so the properties cover
//! every reachable spelling rather than a hand-picked few.

use proptest::prelude::*;

use crate::engine::Transliterator;
use crate::tables::{Scheme, TableSet, VIRAMA};

/// Keys the scan can reach: one or two letters.
fn reachable(key: &str) -> bool {
    matches!(key.chars().count(), 1 | 2)
}

fn consonant_keys(scheme: Scheme) -> Vec<String> {
    let tables = TableSet::builtin(scheme);
    let mut keys: Vec<String> = tables
        .consonants()
        .map(|(k, _)| k.to_string())
        .filter(|k| reachable(k))
        .collect();
    keys.sort();
    keys
}

/// Combining vowels with a visible sign (everything but the inherent "a").
fn vowel_sign_keys(scheme: Scheme) -> Vec<String> {
    let tables = TableSet::builtin(scheme);
    let mut keys: Vec<String> = tables
        .combining_vowels()
        .filter(|(k, v)| reachable(k) && !v.is_empty())
        .map(|(k, _)| k.to_string())
        .collect();
    keys.sort();
    keys
}

fn arb_scheme() -> impl Strategy<Value = Scheme> {
    prop::sample::select(Scheme::ALL.to_vec())
}

fn arb_passthrough() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '7', '9', '.', ',', ';', '!', '?', '-', '(', ')', '"', '/', '|', '\u{0964}',
        '\u{4E00}',
    ])
}

fn arb_roman_char() -> impl Strategy<Value = char> {
    prop_oneof![
        5 => prop::sample::select(vec![
            'a', 'i', 'u', 'e', 'o', '\u{0101}', '\u{012B}', '\u{016B}',
        ]),
        5 => prop::sample::select(vec![
            'k', 'g', 'c', 'j', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r', 'l', 'v', 's', 'h',
            '\u{1E6D}', '\u{1E0D}', '\u{1E47}', '\u{015B}', '\u{1E63}', '\u{1E5B}', '\u{1E37}',
        ]),
        2 => prop::sample::select(vec![' ', '\'', '\u{1E41}', '\u{1E43}', '\u{1E25}', '\u{0325}']),
        1 => arb_passthrough(),
    ]
}

fn arb_any_char() -> impl Strategy<Value = char> {
    prop_oneof![
        9 => arb_roman_char(),
        1 => any::<char>(),
    ]
}

proptest! {
    #[test]
    fn consonant_then_vowel_sign_has_no_virama(
        scheme in arb_scheme(),
        ci in any::<prop::sample::Index>(),
        vi in any::<prop::sample::Index>(),
    ) {
        let consonants = consonant_keys(scheme);
        let vowels = vowel_sign_keys(scheme);
        let c = ci.get(&consonants);
        let v = vi.get(&vowels);
        let engine = Transliterator::new(scheme);
        let tables = engine.tables();

        let expected = format!(
            "{}{}",
            tables.consonant(c).unwrap(),
            tables.combining_vowel(v).unwrap()
        );
        prop_assert_eq!(engine.transliterate(&format!("{c}{v}")), expected);
    }

    #[test]
    fn bare_consonant_is_closed(
        scheme in arb_scheme(),
        ci in any::<prop::sample::Index>(),
    ) {
        let consonants = consonant_keys(scheme);
        let c = ci.get(&consonants);
        let engine = Transliterator::new(scheme);
        let signs = engine.tables().consonant(c).unwrap();

        prop_assert_eq!(engine.transliterate(c), format!("{signs}{VIRAMA}"));
        // Followed by another consonant: a virama joins them.
        prop_assert_eq!(
            engine.transliterate(&format!("{c}k")),
            format!("{signs}{VIRAMA}\u{0915}{VIRAMA}")
        );
    }

    #[test]
    fn passthrough_text_is_unchanged(
        scheme in arb_scheme(),
        text in prop::collection::vec(arb_passthrough(), 0..16),
    ) {
        let text: String = text.into_iter().collect();
        let engine = Transliterator::new(scheme);
        prop_assert_eq!(engine.transliterate(&text), text);
    }

    #[test]
    fn passthrough_after_consonant_gets_virama(
        scheme in arb_scheme(),
        ci in any::<prop::sample::Index>(),
        p in arb_passthrough(),
    ) {
        let consonants = consonant_keys(scheme);
        let c = ci.get(&consonants);
        let engine = Transliterator::new(scheme);
        let signs = engine.tables().consonant(c).unwrap();

        prop_assert_eq!(
            engine.transliterate(&format!("{c}{p}")),
            format!("{signs}{VIRAMA}{p}")
        );
    }

    #[test]
    fn space_between_passthrough_is_kept(
        scheme in arb_scheme(),
        a in arb_passthrough(),
        b in arb_passthrough(),
    ) {
        let engine = Transliterator::new(scheme);
        let text = format!("{a} {b}");
        prop_assert_eq!(engine.transliterate(&text), text);
    }

    #[test]
    fn total_and_deterministic(
        scheme in arb_scheme(),
        text in prop::collection::vec(arb_any_char(), 0..32),
    ) {
        let text: String = text.into_iter().collect();
        let engine = Transliterator::new(scheme);
        let first = engine.transliterate(&text);
        prop_assert_eq!(&engine.transliterate(&text), &first);
        prop_assert_eq!(&Transliterator::new(scheme).transliterate(&text), &first);
    }

    #[test]
    fn case_insensitive(
        scheme in arb_scheme(),
        text in prop::collection::vec(arb_roman_char(), 0..32),
    ) {
        let text: String = text.into_iter().collect();
        let engine = Transliterator::new(scheme);
        prop_assert_eq!(
            engine.transliterate(&text.to_uppercase()),
            engine.transliterate(&text.to_lowercase())
        );
    }
}
