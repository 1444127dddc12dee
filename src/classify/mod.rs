// Text classification pipeline — the core of Corkboard.
//
// Raw description → preprocess (lowercase, tokenize, drop short tokens and
// stopwords) → vectorize (fixed-vocabulary counts) → linear model predict →
// label decode. Everything here is loaded once at startup and read-only
// afterwards; classify calls allocate only per-call intermediates.

pub mod error;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod stopwords;
pub mod vectorize;
pub mod vocab;

pub use error::ClassifyError;
pub use pipeline::{ArtifactPaths, JobClassifier};
