use std::collections::BTreeMap;

use serde::Deserialize;

use super::TableError;

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// Validated token → rendered codepoints, one table category.
pub(super) type Category = BTreeMap<String, String>;

type RawCategory = BTreeMap<String, Vec<u32>>;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTables {
    consonants: RawCategory,
    #[serde(default)]
    initial_vowels: RawCategory,
    #[serde(default)]
    combining_vowels: RawCategory,
    #[serde(default)]
    diacritics: RawCategory,
    #[serde(default)]
    accented_initial_vowels: RawCategory,
    #[serde(default)]
    accented_combining_vowels: RawCategory,
    #[serde(default)]
    numerals: RawCategory,
    #[serde(default)]
    iast: RawOverlay,
}

/// The categories a scheme overlay may touch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct PerCategory<T> {
    pub consonants: T,
    pub initial_vowels: T,
    pub combining_vowels: T,
    pub diacritics: T,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOverlay {
    remove: PerCategory<Vec<String>>,
    add: PerCategory<RawCategory>,
}

/// Spellings a scheme drops from, and adds to, the base tables.
#[derive(Debug, Clone, Default)]
pub(super) struct Overlay {
    pub remove: PerCategory<Vec<String>>,
    pub add: PerCategory<Category>,
}

/// A parsed and validated table asset, before scheme selection.
#[derive(Debug, Clone)]
pub struct TableSource {
    pub(super) consonants: Category,
    pub(super) initial_vowels: Category,
    pub(super) combining_vowels: Category,
    pub(super) diacritics: Category,
    pub(super) accented_initial_vowels: Category,
    pub(super) accented_combining_vowels: Category,
    pub(super) numerals: Category,
    pub(super) iast: Overlay,
}

impl TableSource {
    /// Total number of mappings across every category, overlay included.
    pub fn len(&self) -> usize {
        let base = [
            &self.consonants,
            &self.initial_vowels,
            &self.combining_vowels,
            &self.diacritics,
            &self.accented_initial_vowels,
            &self.accented_combining_vowels,
            &self.numerals,
        ];
        let add = &self.iast.add;
        let overlay = [
            &add.consonants,
            &add.initial_vowels,
            &add.combining_vowels,
            &add.diacritics,
        ];
        base.iter().chain(overlay.iter()).map(|c| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse TOML text into a validated `TableSource`.
pub fn parse_tables_toml(toml_str: &str) -> Result<TableSource, TableError> {
    let raw: RawTables =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if raw.consonants.is_empty() {
        return Err(TableError::EmptyConsonants);
    }

    let remove = raw.iast.remove;
    for (category, keys) in [
        ("iast.remove.consonants", &remove.consonants),
        ("iast.remove.initial_vowels", &remove.initial_vowels),
        ("iast.remove.combining_vowels", &remove.combining_vowels),
        ("iast.remove.diacritics", &remove.diacritics),
    ] {
        for key in keys {
            check_key(category, key)?;
        }
    }

    let add = raw.iast.add;
    Ok(TableSource {
        consonants: render("consonants", raw.consonants)?,
        initial_vowels: render("initial_vowels", raw.initial_vowels)?,
        combining_vowels: render("combining_vowels", raw.combining_vowels)?,
        diacritics: render("diacritics", raw.diacritics)?,
        accented_initial_vowels: render("accented_initial_vowels", raw.accented_initial_vowels)?,
        accented_combining_vowels: render(
            "accented_combining_vowels",
            raw.accented_combining_vowels,
        )?,
        numerals: render("numerals", raw.numerals)?,
        iast: Overlay {
            remove,
            add: PerCategory {
                consonants: render("iast.add.consonants", add.consonants)?,
                initial_vowels: render("iast.add.initial_vowels", add.initial_vowels)?,
                combining_vowels: render("iast.add.combining_vowels", add.combining_vowels)?,
                diacritics: render("iast.add.diacritics", add.diacritics)?,
            },
        },
    })
}

fn check_key(category: &str, key: &str) -> Result<(), TableError> {
    if key.is_empty() {
        return Err(TableError::EmptyKey(category.to_string()));
    }
    // Input is lowercased before scanning; an uppercase key could never match.
    if key.to_lowercase() != key {
        return Err(TableError::UppercaseKey {
            category: category.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

fn render(category: &str, raw: RawCategory) -> Result<Category, TableError> {
    raw.into_iter()
        .map(|(key, codepoints)| {
            check_key(category, &key)?;
            let mut rendered = String::with_capacity(codepoints.len() * 3);
            for value in codepoints {
                let c = char::from_u32(value).ok_or_else(|| TableError::InvalidCodepoint {
                    category: category.to_string(),
                    key: key.clone(),
                    value,
                })?;
                rendered.push(c);
            }
            Ok((key, rendered))
        })
        .collect()
}
