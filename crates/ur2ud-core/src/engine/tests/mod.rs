mod proptest_props;

use super::Transliterator;
use crate::tables::Scheme;

pub(super) fn iso(text: &str) -> String {
    Transliterator::new(Scheme::Iso15919).transliterate(text)
}

pub(super) fn iast(text: &str) -> String {
    Transliterator::new(Scheme::Iast).transliterate(text)
}
