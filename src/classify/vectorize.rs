// Vocabulary-bound count vectorization.
//
// The input is the output of `preprocess`, so a plain whitespace split is
// enough — no re-tokenization. Tokens absent from the vocabulary are
// silently ignored: the vectorizer never grows the vocabulary and never
// reports out-of-vocabulary tokens.

use super::vocab::Vocabulary;

/// Per-document bag-of-words frequencies, aligned to the vocabulary.
/// Built fresh for each classification call, never persisted.
pub type CountVector = Vec<u32>;

/// Convert a preprocessed token string into a count vector of fixed length
/// `vocab.vector_len()`. Pure, no failure modes.
pub fn vectorize(preprocessed_text: &str, vocab: &Vocabulary) -> CountVector {
    let mut counts = vec![0u32; vocab.vector_len()];

    for token in preprocessed_text.split_whitespace() {
        if let Some(idx) = vocab.index_of(token) {
            counts[idx] += 1;
        }
    }

    counts
}
