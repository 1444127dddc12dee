// Unit tests for the vocabulary loader and count vectorization.

use corkboard::classify::error::ClassifyError;
use corkboard::classify::vectorize::vectorize;
use corkboard::classify::vocab::Vocabulary;

// ============================================================
// Vocabulary parsing
// ============================================================

#[test]
fn parses_token_index_lines() {
    let vocab = Vocabulary::parse("job:0\ndeveloper:1\nnurse:2\n").unwrap();
    assert_eq!(vocab.index_of("job"), Some(0));
    assert_eq!(vocab.index_of("developer"), Some(1));
    assert_eq!(vocab.index_of("nurse"), Some(2));
    assert_eq!(vocab.vector_len(), 3);
    assert_eq!(vocab.token_count(), 3);
}

#[test]
fn trims_whitespace_around_token_and_index() {
    let vocab = Vocabulary::parse("  job : 0 \n").unwrap();
    assert_eq!(vocab.index_of("job"), Some(0));
}

#[test]
fn blank_lines_are_skipped() {
    let vocab = Vocabulary::parse("job:0\n\n\ndeveloper:1\n").unwrap();
    assert_eq!(vocab.token_count(), 2);
}

#[test]
fn splits_on_first_colon_only() {
    // Everything after the first colon is the index portion, so a stray
    // second colon makes the index unparsable — malformed, not truncated.
    let err = Vocabulary::parse("job:1:2").unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedVocabulary { .. }));
}

#[test]
fn duplicate_token_last_occurrence_wins() {
    let vocab = Vocabulary::parse("job:0\njob:5\n").unwrap();
    assert_eq!(vocab.index_of("job"), Some(5));
    assert_eq!(vocab.vector_len(), 6);
}

#[test]
fn index_gaps_extend_vector_length() {
    let vocab = Vocabulary::parse("job:0\ndeveloper:9\n").unwrap();
    assert_eq!(vocab.vector_len(), 10);
}

#[test]
fn missing_colon_is_malformed() {
    let err = Vocabulary::parse("job 0").unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::MalformedVocabulary { line_no: 1, .. }
    ));
}

#[test]
fn non_integer_index_is_malformed() {
    let err = Vocabulary::parse("job:zero").unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedVocabulary { .. }));
}

#[test]
fn negative_index_is_malformed() {
    let err = Vocabulary::parse("job:-1").unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedVocabulary { .. }));
}

#[test]
fn empty_vocabulary_gives_zero_length_vectors() {
    let vocab = Vocabulary::parse("").unwrap();
    assert_eq!(vocab.vector_len(), 0);
    assert!(vectorize("anything here", &vocab).is_empty());
}

// ============================================================
// Vectorization
// ============================================================

#[test]
fn counts_align_to_vocabulary_indices() {
    let vocab = Vocabulary::from_entries([("job", 0), ("developer", 1)]);
    assert_eq!(vectorize("job job developer", &vocab), vec![2, 1]);
}

#[test]
fn out_of_vocabulary_tokens_are_ignored() {
    let vocab = Vocabulary::from_entries([("job", 0), ("developer", 1)]);
    let vector = vectorize("job quantum blockchain developer ferris", &vocab);
    assert_eq!(vector, vec![1, 1]);
    assert_eq!(vector.len(), vocab.vector_len());
}

#[test]
fn empty_text_yields_all_zeros() {
    let vocab = Vocabulary::from_entries([("job", 0), ("developer", 1)]);
    assert_eq!(vectorize("", &vocab), vec![0, 0]);
}

#[test]
fn unmapped_gap_positions_stay_zero() {
    let vocab = Vocabulary::from_entries([("job", 0), ("developer", 4)]);
    assert_eq!(vectorize("developer job", &vocab), vec![1, 0, 0, 0, 1]);
}
