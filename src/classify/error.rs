// Error taxonomy for the classification pipeline.
//
// Startup errors (resources, artifacts) and per-call prediction errors are
// kept in one enum so the facade can fold any of them into its string
// contract: the web layer branches on the "Unable to classify" prefix
// rather than on a structured type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A required startup resource (stopwords, vocabulary) could not be read.
    #[error("could not read {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A vocabulary line violates the `token:index` format.
    #[error("malformed vocabulary at line {line_no}: {line:?}")]
    MalformedVocabulary { line_no: usize, line: String },

    /// No model artifact matched in any of the candidate directories.
    #[error("no model artifact found in {searched:?}")]
    ModelNotFound { searched: Vec<PathBuf> },

    /// The label encoder artifact is missing from its configured path.
    #[error("label encoder not found at {path}")]
    LabelEncoderNotFound { path: PathBuf },

    /// A startup artifact exists but could not be deserialized.
    #[error("could not deserialize {path}: {message}")]
    MalformedArtifact { path: PathBuf, message: String },

    /// The pipeline never loaded; every classify call reports this until
    /// the process restarts.
    #[error("Unable to classify due to missing model or label encoder")]
    Degraded,

    /// A single classification call failed (bad vector shape, unseen class
    /// id on decode). Recovered at the facade, never propagated as a panic.
    #[error("Unable to classify: {0}")]
    Prediction(String),
}

impl ClassifyError {
    /// Convenience for wrapping a read failure of a startup resource.
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
