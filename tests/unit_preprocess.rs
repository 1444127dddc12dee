// Unit tests for text preprocessing.
//
// The preprocessing contract has to match what the classifier was trained
// on exactly, so these tests pin the tokenization rules down tightly.

use corkboard::classify::preprocess::preprocess;
use corkboard::classify::stopwords::StopwordSet;

fn common_stopwords() -> StopwordSet {
    StopwordSet::from_words(["this", "is", "a", "for", "with", "in", "the", "and"])
}

// ============================================================
// Core contract
// ============================================================

#[test]
fn test_job_description_cleans_to_expected_string() {
    let stopwords = common_stopwords();
    assert_eq!(
        preprocess("This is a TEST job description!", &stopwords),
        "test job description"
    );
}

#[test]
fn deterministic_for_same_input() {
    let stopwords = common_stopwords();
    let input = "Senior Rust Engineer — distributed systems, 5+ years";
    assert_eq!(
        preprocess(input, &stopwords),
        preprocess(input, &stopwords)
    );
}

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(preprocess("", &common_stopwords()), "");
}

#[test]
fn whitespace_only_input_yields_empty_string() {
    assert_eq!(preprocess("   \t\n  ", &common_stopwords()), "");
}

// ============================================================
// Tokenization rules
// ============================================================

#[test]
fn lowercases_everything() {
    let stopwords = StopwordSet::from_words(Vec::<String>::new());
    assert_eq!(preprocess("BACKEND Developer", &stopwords), "backend developer");
}

#[test]
fn hyphenated_words_are_one_token() {
    let stopwords = StopwordSet::from_words(Vec::<String>::new());
    assert_eq!(
        preprocess("full-stack role", &stopwords),
        "full-stack role"
    );
}

#[test]
fn apostrophe_words_are_one_token() {
    let stopwords = StopwordSet::from_words(Vec::<String>::new());
    assert_eq!(
        preprocess("bachelor's degree", &stopwords),
        "bachelor's degree"
    );
}

#[test]
fn only_one_joined_extension_per_token() {
    let stopwords = StopwordSet::from_words(Vec::<String>::new());
    // A second hyphen starts a fresh token rather than extending the first.
    assert_eq!(
        preprocess("state-of-the-art", &stopwords),
        "state-of the-art"
    );
}

#[test]
fn digits_and_punctuation_are_dropped_entirely() {
    let stopwords = StopwordSet::from_words(Vec::<String>::new());
    assert_eq!(
        preprocess("C++ & Java, 10+ years! (remote)", &stopwords),
        "java years remote"
    );
}

#[test]
fn single_letter_tokens_removed_regardless_of_stopwords() {
    // "a" and "i" are not in this stopword set, but still too short.
    let stopwords = StopwordSet::from_words(["the"]);
    assert_eq!(preprocess("I want a job", &stopwords), "want job");
}

#[test]
fn stopwords_filtered_after_case_normalization() {
    let stopwords = StopwordSet::from_words(["the"]);
    assert_eq!(preprocess("THE The the role", &stopwords), "role");
}

#[test]
fn relative_order_preserved() {
    let stopwords = common_stopwords();
    assert_eq!(
        preprocess("build and ship backend services", &stopwords),
        "build ship backend services"
    );
}
