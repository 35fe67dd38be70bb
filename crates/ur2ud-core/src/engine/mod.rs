//! Romanized text to Devanagari.
//!
//! The scan folds the input to lowercase and walks it left to right. At each
//! letter it first offers a two-letter token to the token rules, then falls
//! back to the single-letter lookahead rules, the token rules again for the
//! lone letter, and finally passthrough. A consonant still pending when the
//! input ends gets a closing virama.

pub mod rules;
#[cfg(test)]
mod tests;

pub use rules::{Outcome, ScanState};

use crate::settings::Settings;
use crate::tables::{Scheme, TableError, TableSet, TableSource, VIRAMA};

/// Per-letter scan events, emitted only with the `trace` feature.
macro_rules! scan_trace {
    ($($arg:tt)*) => {
        if cfg!(feature = "trace") {
            tracing::trace!($($arg)*);
        }
    };
}

/// Converts romanized text with one fixed, immutable table set.
///
/// Holds no per-call state, so a single instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Transliterator {
    tables: TableSet,
}

impl Transliterator {
    /// Built-in tables for `scheme`.
    pub fn new(scheme: Scheme) -> Self {
        Self::with_tables(TableSet::builtin(scheme))
    }

    pub fn with_tables(tables: TableSet) -> Self {
        Transliterator { tables }
    }

    /// Engine for the scheme and accent handling in `settings`, using the
    /// given asset.
    pub fn from_settings(source: &TableSource, settings: &Settings) -> Result<Self, TableError> {
        let tables = TableSet::from_source(
            source,
            settings.engine.scheme,
            settings.engine.accented_vowels,
        )?;
        Ok(Self::with_tables(tables))
    }

    pub fn scheme(&self) -> Scheme {
        self.tables.scheme()
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// Transliterate `text`. Never fails: anything the tables do not know is
    /// copied through unchanged.
    pub fn transliterate(&self, text: &str) -> String {
        let folded = text.to_lowercase();
        let letters = Letters::new(&folded);
        let mut out = String::with_capacity(folded.len() * 2);
        let mut state = ScanState::Start;
        let mut i = 0;

        while i < letters.len() {
            let (consumed, outcome) = self.step(&letters, i, state);
            outcome.write_to(&mut out);
            state = outcome.next;
            i += consumed;
        }

        if state.is_pending() {
            out.push(VIRAMA);
        }
        out
    }

    /// Decide the letters at `i`, returning how many were consumed.
    fn step<'a>(
        &'a self,
        letters: &Letters<'a>,
        i: usize,
        state: ScanState,
    ) -> (usize, Outcome<'a>) {
        let tables = &self.tables;

        // At the last letter this "pair" is the lone letter, which then skips
        // the lookahead rules below.
        let pair = letters.token(i, 2);
        if let Some((rule, outcome)) = rules::match_token(tables, pair, state) {
            scan_trace!(rule, token = pair, ?state, "matched pair");
            return (2, outcome);
        }

        let single = letters.token(i, 1);
        if let Some(current) = letters.get(i) {
            let next = letters.get(i + 1);
            if let Some((rule, outcome)) = rules::match_lookahead(tables, current, next, state) {
                scan_trace!(rule, token = single, ?state, "matched lookahead");
                return (1, outcome);
            }
        }

        if let Some((rule, outcome)) = rules::match_token(tables, single, state) {
            scan_trace!(rule, token = single, ?state, "matched letter");
            return (1, outcome);
        }

        scan_trace!(token = single, ?state, "passthrough");
        (1, rules::passthrough(single, state))
    }
}

/// Transliterate `text` with the built-in tables for `scheme`.
pub fn transliterate(text: &str, scheme: Scheme) -> String {
    Transliterator::new(scheme).transliterate(text)
}

/// Letter-indexed view of a string, handing out token slices without
/// allocating.
struct Letters<'a> {
    text: &'a str,
    /// Byte offset of every letter, plus `text.len()`.
    bounds: Vec<usize>,
}

impl<'a> Letters<'a> {
    fn new(text: &'a str) -> Self {
        let bounds = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Letters { text, bounds }
    }

    fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn get(&self, i: usize) -> Option<char> {
        if i >= self.len() {
            return None;
        }
        self.text[self.bounds[i]..].chars().next()
    }

    /// Up to `width` letters starting at `i`.
    fn token(&self, i: usize, width: usize) -> &'a str {
        let end = (i + width).min(self.len());
        &self.text[self.bounds[i]..self.bounds[end]]
    }
}
