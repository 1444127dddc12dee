// Classification facade — owns the artifact lifecycle and exposes the one
// operation the rest of the application uses.
//
// All four artifacts (stopwords, vocabulary, classifier, label encoder) are
// loaded once at startup. If any load fails, the facade stays constructible
// but enters a permanent degraded state: every classify call short-circuits
// to the same error message until the process restarts. The web layer keeps
// serving listing pages either way.

use std::env;
use std::path::PathBuf;

use tracing::{error, info, warn};

use super::error::ClassifyError;
use super::model::{find_model_file, LabelEncoder, TrainedClassifier};
use super::preprocess::preprocess;
use super::stopwords::StopwordSet;
use super::vectorize::vectorize;
use super::vocab::Vocabulary;

/// Where the startup artifacts live. Built from `Config`; tests construct
/// one directly over a fixture directory.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub stopwords: PathBuf,
    pub vocabulary: PathBuf,
    /// Candidate directories for the model artifact, searched in order.
    pub model_dirs: Vec<PathBuf>,
    pub label_encoder: PathBuf,
}

/// The fully loaded pipeline state. Immutable after construction; shared
/// read-only across request handlers, so concurrent classify calls need
/// no locking.
struct ClassifierContext {
    stopwords: StopwordSet,
    vocabulary: Vocabulary,
    model: TrainedClassifier,
    encoder: LabelEncoder,
}

/// The classifier facade. `Send + Sync` because every field is read-only
/// after construction; share it via `Arc`.
pub struct JobClassifier {
    context: Option<ClassifierContext>,
}

impl JobClassifier {
    /// Load all artifacts. Never fails: a load error is logged with the
    /// searched paths and current directory, and the facade comes up
    /// degraded instead of aborting the process.
    pub fn load(paths: &ArtifactPaths) -> Self {
        match Self::load_context(paths) {
            Ok(context) => {
                info!(
                    classes = context.model.class_count(),
                    vocab_tokens = context.vocabulary.token_count(),
                    stopwords = context.stopwords.len(),
                    "Classifier ready"
                );
                Self {
                    context: Some(context),
                }
            }
            Err(e) => {
                let cwd = env::current_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "<unknown>".to_string());
                error!(
                    error = %e,
                    model_dirs = ?paths.model_dirs,
                    label_encoder = %paths.label_encoder.display(),
                    stopwords = %paths.stopwords.display(),
                    vocabulary = %paths.vocabulary.display(),
                    cwd = %cwd,
                    "Failed to load classification artifacts; serving degraded"
                );
                Self { context: None }
            }
        }
    }

    fn load_context(paths: &ArtifactPaths) -> Result<ClassifierContext, ClassifyError> {
        let stopwords = StopwordSet::load(&paths.stopwords)?;
        let vocabulary = Vocabulary::load(&paths.vocabulary)?;

        let model_path = find_model_file(&paths.model_dirs)?;
        info!(path = %model_path.display(), "Resolved model artifact");
        let model = TrainedClassifier::load(&model_path)?;
        let encoder = LabelEncoder::load(&paths.label_encoder)?;

        if model.n_features != vocabulary.vector_len() {
            // Not fatal here — predict rejects the mismatched vector on
            // every call, which surfaces the problem per-request.
            warn!(
                model_features = model.n_features,
                vocab_len = vocabulary.vector_len(),
                "Model and vocabulary dimensionality disagree"
            );
        }
        if model.class_count() != encoder.labels().len() {
            warn!(
                model_classes = model.class_count(),
                encoder_labels = encoder.labels().len(),
                "Model and label encoder class counts disagree"
            );
        }

        Ok(ClassifierContext {
            stopwords,
            vocabulary,
            model,
            encoder,
        })
    }

    /// Whether artifact loading failed at startup.
    pub fn is_degraded(&self) -> bool {
        self.context.is_none()
    }

    /// Category names the classifier can emit, in class-id order.
    /// `None` when degraded.
    pub fn labels(&self) -> Option<&[String]> {
        self.context.as_ref().map(|c| c.encoder.labels())
    }

    /// Preprocess a description with the loaded stopword set. `None` when
    /// degraded — callers fall back to the raw text.
    pub fn preprocessed(&self, raw_text: &str) -> Option<String> {
        self.context
            .as_ref()
            .map(|c| preprocess(raw_text, &c.stopwords))
    }

    /// Classify a raw job description into a category label.
    ///
    /// Degraded facades answer immediately with `ClassifyError::Degraded`.
    /// Otherwise: preprocess, vectorize against the fixed vocabulary,
    /// predict, decode. Any failure comes back as a typed error, never a
    /// panic.
    pub fn classify(&self, raw_text: &str) -> Result<String, ClassifyError> {
        let Some(context) = &self.context else {
            return Err(ClassifyError::Degraded);
        };

        let cleaned = preprocess(raw_text, &context.stopwords);
        let vector = vectorize(&cleaned, &context.vocabulary);
        let class_id = context.model.predict(&vector)?;
        let label = context.encoder.decode(class_id)?;

        Ok(label.to_string())
    }

    /// String-contract wrapper used by the web layer: the category label on
    /// success, otherwise a message starting with "Unable to classify".
    /// Callers branch on that prefix, not on a structured type.
    pub fn classify_job(&self, description: &str) -> String {
        match self.classify(description) {
            Ok(label) => label,
            Err(ClassifyError::Degraded) => ClassifyError::Degraded.to_string(),
            Err(e @ ClassifyError::Prediction(_)) => {
                warn!(error = %e, "Classification call failed");
                e.to_string()
            }
            // Load-stage variants can't occur after construction, but fold
            // them into the same contract rather than panicking.
            Err(e) => {
                warn!(error = %e, "Classification call failed");
                format!("Unable to classify: {e}")
            }
        }
    }
}
