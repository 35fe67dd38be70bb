//! Matcher rules for the scan loop.
//!
//! Each rule is a pure function of the tables, the text under the cursor and
//! the scan state. The engine tries them in slice order and takes the first
//! `Some`. Token rules see a one- or two-letter token; lookahead rules see a
//! single letter plus the letter after it.

use crate::tables::{TableSet, VIRAMA};

/// Where the scan is relative to the syllable being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No consonant pending.
    #[default]
    Start,
    /// The last sign emitted is a bare consonant whose vowel is undecided.
    PendingConsonant,
    /// The last step passed an unrecognized letter through.
    Other,
}

impl ScanState {
    pub fn is_pending(self) -> bool {
        self == ScanState::PendingConsonant
    }
}

/// What a rule decided for the text under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    /// Emit a virama before `emit`, closing the pending consonant.
    pub close_pending: bool,
    pub emit: &'a str,
    pub next: ScanState,
}

impl<'a> Outcome<'a> {
    fn new(emit: &'a str, next: ScanState) -> Self {
        Outcome {
            close_pending: false,
            emit,
            next,
        }
    }

    fn silent(next: ScanState) -> Self {
        Outcome::new("", next)
    }

    /// Append this outcome to `out`.
    pub fn write_to(&self, out: &mut String) {
        if self.close_pending {
            out.push(VIRAMA);
        }
        out.push_str(self.emit);
    }
}

pub type TokenRule = for<'a> fn(&'a TableSet, &'a str, ScanState) -> Option<Outcome<'a>>;

pub type LookaheadRule = fn(&TableSet, char, Option<char>, ScanState) -> Option<Outcome<'static>>;

/// Token rules in priority order.
pub const TOKEN_RULES: [(&str, TokenRule); 6] = [
    ("space_apostrophe", space_apostrophe),
    ("apostrophe_space", apostrophe_space),
    ("apostrophe_anusvara", apostrophe_anusvara),
    ("consonant", consonant),
    ("initial_vowel", initial_vowel),
    ("combining_vowel", combining_vowel),
];

/// Single-letter rules tried after the two-letter token fails, before the
/// letter itself is looked up.
pub const LOOKAHEAD_RULES: [(&str, LookaheadRule); 2] = [
    ("swallow_space", swallow_space),
    ("drop_apostrophe", drop_apostrophe),
];

const ANUSVARA_AVAGRAHA: &str = "\u{0902}\u{093D}";
const SPACE: &str = " ";

/// First token rule that matches, with its name.
pub fn match_token<'a>(
    tables: &'a TableSet,
    token: &'a str,
    state: ScanState,
) -> Option<(&'static str, Outcome<'a>)> {
    TOKEN_RULES
        .iter()
        .find_map(|&(name, rule)| rule(tables, token, state).map(|o| (name, o)))
}

/// First lookahead rule that matches, with its name.
pub fn match_lookahead(
    tables: &TableSet,
    current: char,
    next: Option<char>,
    state: ScanState,
) -> Option<(&'static str, Outcome<'static>)> {
    LOOKAHEAD_RULES
        .iter()
        .find_map(|&(name, rule)| rule(tables, current, next, state).map(|o| (name, o)))
}

/// Unrecognized letter: close any pending consonant and copy it through.
pub fn passthrough(token: &str, state: ScanState) -> Outcome<'_> {
    Outcome {
        close_pending: state.is_pending(),
        emit: token,
        next: ScanState::Other,
    }
}

/// `" '"` after a consonant: the consonant keeps its inherent vowel and both
/// letters vanish.
fn space_apostrophe<'a>(_: &'a TableSet, token: &'a str, state: ScanState) -> Option<Outcome<'a>> {
    (token == " '" && state.is_pending()).then(|| Outcome::silent(ScanState::Start))
}

/// `"' "` after a consonant: the consonant keeps its inherent vowel and a
/// single space is written.
fn apostrophe_space<'a>(_: &'a TableSet, token: &'a str, state: ScanState) -> Option<Outcome<'a>> {
    (token == "' " && state.is_pending()).then(|| Outcome::new(SPACE, ScanState::Start))
}

/// Apostrophe before the anusvara letter, in any state.
fn apostrophe_anusvara<'a>(
    tables: &'a TableSet,
    token: &'a str,
    _: ScanState,
) -> Option<Outcome<'a>> {
    (token == tables.anusvara_token()).then(|| Outcome::new(ANUSVARA_AVAGRAHA, ScanState::Start))
}

fn consonant<'a>(tables: &'a TableSet, token: &'a str, state: ScanState) -> Option<Outcome<'a>> {
    tables.consonant(token).map(|signs| Outcome {
        close_pending: state.is_pending(),
        emit: signs,
        next: ScanState::PendingConsonant,
    })
}

fn initial_vowel<'a>(
    tables: &'a TableSet,
    token: &'a str,
    state: ScanState,
) -> Option<Outcome<'a>> {
    if state.is_pending() {
        return None;
    }
    tables
        .initial_vowel(token)
        .map(|signs| Outcome::new(signs, state))
}

fn combining_vowel<'a>(
    tables: &'a TableSet,
    token: &'a str,
    state: ScanState,
) -> Option<Outcome<'a>> {
    if !state.is_pending() {
        return None;
    }
    tables
        .combining_vowel(token)
        .map(|signs| Outcome::new(signs, ScanState::Start))
}

/// A space inside a syllable, or before an avagraha, is dropped.
fn swallow_space(
    tables: &TableSet,
    current: char,
    next: Option<char>,
    state: ScanState,
) -> Option<Outcome<'static>> {
    if current != ' ' {
        return None;
    }
    let swallow = if state.is_pending() {
        tables.starts_token(next)
    } else {
        next == Some('\'')
    };
    swallow.then(|| Outcome::silent(state))
}

/// An apostrophe not followed by anything transliterable is punctuation,
/// not an avagraha.
fn drop_apostrophe(
    tables: &TableSet,
    current: char,
    next: Option<char>,
    _: ScanState,
) -> Option<Outcome<'static>> {
    (current == '\'' && !tables.starts_token(next)).then(|| Outcome::silent(ScanState::Start))
}
