// Text preprocessing — must reproduce the training-time pipeline exactly,
// or count vectors won't line up with what the model was fitted on.
//
// The token pattern treats hyphenated and apostrophe-joined words as one
// token ("full-stack", "bachelor's"). Digits and punctuation are dropped
// entirely, not treated as boundaries that preserve anything.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::stopwords::StopwordSet;

/// Minimum surviving token length. Single-letter tokens ("a", "I") are
/// removed regardless of stopword membership.
const MIN_TOKEN_LEN: usize = 2;

fn token_pattern() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // Input is lowercased before matching, so [a-z] is sufficient.
    TOKEN_RE.get_or_init(|| Regex::new(r"[a-z]+(?:[-'][a-z]+)?").unwrap())
}

/// Normalize raw text into a cleaned, space-joined token string.
///
/// Lowercases, tokenizes on the pattern above, drops tokens shorter than
/// two characters, drops stopwords, and joins the survivors with single
/// spaces in their original order. Pure — same input, same output, and
/// empty input yields an empty string.
pub fn preprocess(raw_text: &str, stopwords: &StopwordSet) -> String {
    let lowered = raw_text.to_lowercase();

    let tokens: Vec<&str> = token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .filter(|token| !stopwords.contains(token))
        .collect();

    tokens.join(" ")
}
