// Fixed vocabulary — the token→index mapping that defines count-vector
// dimensionality. Loaded once from a `token:index` file and never mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::ClassifyError;

/// Immutable mapping from token to column index in the count vector.
///
/// Indices are expected to be unique; gaps are tolerated, so the vector
/// length is `max index + 1` rather than the entry count.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    vector_len: usize,
}

impl Vocabulary {
    /// Load a vocabulary file: one `token:index` pair per line, split on
    /// the first colon, both sides trimmed, index a non-negative base-10
    /// integer. A duplicate token overwrites the earlier entry.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ClassifyError::unavailable(path, e))?;
        Self::parse(&contents).map(|vocab| {
            debug!(
                tokens = vocab.index.len(),
                vector_len = vocab.vector_len,
                path = %path.display(),
                "Loaded vocabulary"
            );
            vocab
        })
    }

    /// Parse vocabulary text. Separated from `load` so tests can feed
    /// literal strings without touching the filesystem.
    pub fn parse(contents: &str) -> Result<Self, ClassifyError> {
        let mut index = HashMap::new();

        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let malformed = || ClassifyError::MalformedVocabulary {
                line_no: line_no + 1,
                line: line.to_string(),
            };

            let (token, idx) = line.split_once(':').ok_or_else(malformed)?;
            let idx: usize = idx.trim().parse().map_err(|_| malformed())?;

            // Last occurrence of a duplicate token wins.
            index.insert(token.trim().to_string(), idx);
        }

        let vector_len = index.values().map(|&i| i + 1).max().unwrap_or(0);

        Ok(Self { index, vector_len })
    }

    /// Build a vocabulary from (token, index) pairs — used by tests.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let index: HashMap<String, usize> = entries
            .into_iter()
            .map(|(token, idx)| (token.into(), idx))
            .collect();
        let vector_len = index.values().map(|&i| i + 1).max().unwrap_or(0);
        Self { index, vector_len }
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Length of the count vector this vocabulary defines.
    pub fn vector_len(&self) -> usize {
        self.vector_len
    }

    /// Number of distinct tokens in the vocabulary.
    pub fn token_count(&self) -> usize {
        self.index.len()
    }
}
