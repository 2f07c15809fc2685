//! Tokenization — maximal ASCII-alphabetic runs of length ≥ 2, lowercased.
//!
//! Digits, punctuation, and symbols act purely as separators: "C++" yields
//! nothing (the run "C" is too short), "node.js" yields {"node", "js"}.
//! No stemming and no stopword removal here — the vectorizer applies its own
//! stopword filter, the gap analyzer deliberately does not.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{2,}").expect("valid token pattern"));

/// Extracts the unique token set of `text`. Never fails; empty input yields
/// an empty set. `BTreeSet` so set difference iterates in ascending order.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    term_stream(text).collect()
}

/// Like [`tokenize`] but keeps duplicates and order — the term-frequency
/// view the vectorizer counts over.
pub fn term_stream(text: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
}
