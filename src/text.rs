//! Text folding and term matching shared by the extractor and the scorers.
//!
//! Everything that compares user text against a pattern table goes through
//! [`fold`] first, so tables only ever hold lowercase ASCII-folded patterns
//! (`kişi` is stored as `kisi`, `İstanbul` folds to `istanbul`).

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Words too common to count as free-text evidence.
const STOPWORDS: &[&str] = &[
    "about", "also", "bana", "bile", "both", "gibi", "have", "icin", "ihtiyac", "ihtiyacim",
    "into", "istiyorum", "just", "lazim", "looking", "need", "needs", "olan", "olarak",
    "proje", "projesi", "project", "some", "team", "that", "their", "there", "these", "they",
    "this", "those", "very", "want", "with", "would", "your",
];

/// Lowercase, strip diacritics and fold Turkish dotless `ı` to `i`.
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}

/// Whole-term containment on already folded text.
///
/// A term matches when the characters on either side of the occurrence are
/// not alphanumeric, so `go` does not match inside `google` while `node.js`
/// and `c++` still match.
#[must_use]
pub fn contains_term(folded_haystack: &str, folded_term: &str) -> bool {
    if folded_term.is_empty() {
        return false;
    }
    folded_haystack
        .match_indices(folded_term)
        .any(|(start, matched)| {
            let end = start + matched.len();
            let before_ok = folded_haystack[..start]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
            let after_ok = folded_haystack[end..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
            before_ok && after_ok
        })
}

/// Distinct content words (four characters or longer, not stopwords) in
/// first-seen order.
#[must_use]
pub fn significant_terms(text: &str) -> Vec<String> {
    let folded = fold(text);
    let mut seen = HashSet::new();
    folded
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|word| word.chars().count() >= 4)
        .filter(|word| !STOPWORDS.contains(word))
        .filter(|word| seen.insert((*word).to_string()))
        .map(str::to_string)
        .collect()
}

/// Split a free-form list field ("Istanbul, Ankara") into trimmed parts.
#[must_use]
pub fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(|c| separators.contains(&c))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
