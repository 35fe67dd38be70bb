//! Roman token → Devanagari codepoint tables.
//!
//! The tables ship as an embedded TOML asset holding the ISO 15919 spellings
//! plus an `[iast]` overlay. `TableSet` is the effective, scheme-specific view
//! the engine scans with: diacritics and the avagraha folded into the initial
//! vowels, accented vowels folded into their plain counterparts, and nothing
//! mutated after construction.

mod scheme;
mod source;

pub use scheme::{Scheme, UnknownScheme};
pub use source::{default_toml, parse_tables_toml, TableSource, DEFAULT_TABLES_TOML};

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use source::Category;

/// Suppresses the inherent vowel of the preceding consonant.
pub const VIRAMA: char = '\u{094D}';
/// Marks an elided initial "a"; written as an apostrophe in the Roman text.
pub const AVAGRAHA: char = '\u{093D}';
pub const ANUSVARA: char = '\u{0902}';

const APOSTROPHE: &str = "'";

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[consonants] table is empty")]
    EmptyConsonants,
    #[error("empty key in [{0}]")]
    EmptyKey(String),
    #[error("key {key:?} in [{category}] is not lowercase")]
    UppercaseKey { category: String, key: String },
    #[error("invalid codepoint {value:#06X} for key {key:?} in [{category}]")]
    InvalidCodepoint {
        category: String,
        key: String,
        value: u32,
    },
    #[error("{scheme} removes {key:?} from [{category}], which has no such key")]
    UnknownKey {
        scheme: Scheme,
        category: &'static str,
        key: String,
    },
    #[error("key {key:?} is defined twice when building [{category}] for {scheme}")]
    DuplicateKey {
        scheme: Scheme,
        category: &'static str,
        key: String,
    },
    #[error("expected exactly one single-letter anusvara spelling for {scheme}, found {found}")]
    AnusvaraSpelling { scheme: Scheme, found: usize },
}

/// The embedded asset, parsed once.
pub fn builtin_source() -> &'static TableSource {
    static INSTANCE: OnceLock<TableSource> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_tables_toml(DEFAULT_TABLES_TOML).expect("built-in tables TOML must be valid")
    })
}

/// Effective lookup tables for one scheme.
#[derive(Debug, Clone)]
pub struct TableSet {
    scheme: Scheme,
    consonants: HashMap<String, String>,
    initial_vowels: HashMap<String, String>,
    combining_vowels: HashMap<String, String>,
    numerals: HashMap<String, String>,
    anusvara_letter: char,
    anusvara_token: String,
    token_starts: HashSet<char>,
}

impl TableSet {
    /// Tables built from the embedded asset, accented vowels recognized.
    pub fn builtin(scheme: Scheme) -> TableSet {
        Self::from_source(builtin_source(), scheme, true)
            .expect("built-in tables must build for every scheme")
    }

    /// Build the effective tables for `scheme` from a parsed asset.
    ///
    /// When `accented_vowels` is false the accented categories are left out
    /// and accented letters fall through to passthrough.
    pub fn from_source(
        source: &TableSource,
        scheme: Scheme,
        accented_vowels: bool,
    ) -> Result<TableSet, TableError> {
        let mut consonants = source.consonants.clone();
        let mut initial_vowels = source.initial_vowels.clone();
        let mut combining_vowels = source.combining_vowels.clone();
        let mut diacritics = source.diacritics.clone();

        if scheme == Scheme::Iast {
            let overlay = &source.iast;
            for (category, table, remove, add) in [
                (
                    "consonants",
                    &mut consonants,
                    &overlay.remove.consonants,
                    &overlay.add.consonants,
                ),
                (
                    "initial_vowels",
                    &mut initial_vowels,
                    &overlay.remove.initial_vowels,
                    &overlay.add.initial_vowels,
                ),
                (
                    "combining_vowels",
                    &mut combining_vowels,
                    &overlay.remove.combining_vowels,
                    &overlay.add.combining_vowels,
                ),
                (
                    "diacritics",
                    &mut diacritics,
                    &overlay.remove.diacritics,
                    &overlay.add.diacritics,
                ),
            ] {
                for key in remove {
                    if table.remove(key).is_none() {
                        return Err(TableError::UnknownKey {
                            scheme,
                            category,
                            key: key.clone(),
                        });
                    }
                }
                merge(table, add, scheme, category)?;
            }
        }

        let anusvara = ANUSVARA.to_string();
        let letters: Vec<char> = diacritics
            .iter()
            .filter(|(_, value)| **value == anusvara)
            .filter_map(|(key, _)| single_char(key))
            .collect();
        let anusvara_letter = match letters.as_slice() {
            [letter] => *letter,
            _ => {
                return Err(TableError::AnusvaraSpelling {
                    scheme,
                    found: letters.len(),
                })
            }
        };

        merge(&mut initial_vowels, &diacritics, scheme, "initial_vowels")?;
        let avagraha = Category::from([(APOSTROPHE.to_string(), AVAGRAHA.to_string())]);
        merge(&mut initial_vowels, &avagraha, scheme, "initial_vowels")?;
        if accented_vowels {
            merge(
                &mut initial_vowels,
                &source.accented_initial_vowels,
                scheme,
                "initial_vowels",
            )?;
            merge(
                &mut combining_vowels,
                &source.accented_combining_vowels,
                scheme,
                "combining_vowels",
            )?;
        }

        let token_starts = consonants
            .keys()
            .chain(combining_vowels.keys())
            .filter_map(|key| single_char(key))
            .collect();

        tracing::debug!(
            %scheme,
            consonants = consonants.len(),
            initial_vowels = initial_vowels.len(),
            combining_vowels = combining_vowels.len(),
            "table set built"
        );

        Ok(TableSet {
            scheme,
            consonants: consonants.into_iter().collect(),
            initial_vowels: initial_vowels.into_iter().collect(),
            combining_vowels: combining_vowels.into_iter().collect(),
            numerals: source.numerals.clone().into_iter().collect(),
            anusvara_letter,
            anusvara_token: format!("{APOSTROPHE}{anusvara_letter}"),
            token_starts,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn consonant(&self, token: &str) -> Option<&str> {
        self.consonants.get(token).map(String::as_str)
    }

    /// Independent vowels, including diacritics and the avagraha.
    pub fn initial_vowel(&self, token: &str) -> Option<&str> {
        self.initial_vowels.get(token).map(String::as_str)
    }

    pub fn combining_vowel(&self, token: &str) -> Option<&str> {
        self.combining_vowels.get(token).map(String::as_str)
    }

    pub fn consonants(&self) -> impl Iterator<Item = (&str, &str)> {
        entries(&self.consonants)
    }

    pub fn initial_vowels(&self) -> impl Iterator<Item = (&str, &str)> {
        entries(&self.initial_vowels)
    }

    pub fn combining_vowels(&self) -> impl Iterator<Item = (&str, &str)> {
        entries(&self.combining_vowels)
    }

    /// Digit signs. Present for callers; the scan never consults them.
    pub fn numeral(&self, token: &str) -> Option<&str> {
        self.numerals.get(token).map(String::as_str)
    }

    /// The letter this scheme uses for anusvara (`ṁ` or `ṃ`).
    pub fn anusvara_letter(&self) -> char {
        self.anusvara_letter
    }

    /// Apostrophe followed by the anusvara letter.
    pub fn anusvara_token(&self) -> &str {
        &self.anusvara_token
    }

    /// Whether `next` may begin a transliterable unit: end of input, or a
    /// single-letter consonant or combining-vowel key.
    pub fn starts_token(&self, next: Option<char>) -> bool {
        next.map_or(true, |c| self.token_starts.contains(&c))
    }
}

fn merge(
    table: &mut Category,
    extra: &Category,
    scheme: Scheme,
    category: &'static str,
) -> Result<(), TableError> {
    for (key, value) in extra {
        if table.insert(key.clone(), value.clone()).is_some() {
            return Err(TableError::DuplicateKey {
                scheme,
                category,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn entries(table: &HashMap<String, String>) -> impl Iterator<Item = (&str, &str)> {
    table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
