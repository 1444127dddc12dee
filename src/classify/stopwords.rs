// Stopword set — loaded once at startup, read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::ClassifyError;

/// An immutable set of lowercase stopwords. Tokens found in this set are
/// dropped during preprocessing, matching what was done at training time.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load stopwords from a newline-delimited file: one word per line,
    /// trimmed and lowercased. Duplicates collapse silently.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ClassifyError::unavailable(path, e))?;

        let words: HashSet<String> = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        debug!(count = words.len(), path = %path.display(), "Loaded stopwords");

        Ok(Self { words })
    }

    /// Build a set directly from words — used by tests and the CLI.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
