//! Small text helpers for header normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics from column names coming out of upstream exports.
///
/// Decomposes to NFD and drops the combining marks, so `situação` becomes
/// `situacao`. Characters without a decomposition pass through unchanged.
#[must_use]
pub fn strip_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
