// Trained model artifacts — the fitted classifier and its label encoder.
//
// Both are produced by an offline training run and deserialized once at
// startup. The classifier is a linear multi-class model over count vectors:
// one weight row and intercept per class, prediction by argmax of decision
// scores. The label encoder is the class-id → category-name table fitted
// against the same label order as the classifier's output space — that
// pairing is an external invariant the loader assumes, not verifies.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::error::ClassifyError;
use super::vectorize::CountVector;

/// Model artifacts are named `best_model_<algo>.json` by the training run;
/// the search matches on this prefix so retraining with a different
/// algorithm doesn't require a config change.
pub const MODEL_FILE_PREFIX: &str = "best_model_";
pub const MODEL_FILE_EXT: &str = ".json";

/// Filename of the label encoder artifact within the models directory.
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";

/// A pre-fitted linear multi-class classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainedClassifier {
    /// Expected input dimensionality — must equal the vocabulary's
    /// vector length for predictions to mean anything.
    pub n_features: usize,
    /// Per-class weight rows, each of length `n_features`.
    weights: Vec<Vec<f64>>,
    /// Per-class intercepts, same order as `weights`.
    intercepts: Vec<f64>,
}

impl TrainedClassifier {
    /// Deserialize a classifier from a JSON artifact and check its internal
    /// shape consistency (row count vs intercepts, row length vs n_features).
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ClassifyError::unavailable(path, e))?;
        let model: Self =
            serde_json::from_str(&contents).map_err(|e| ClassifyError::MalformedArtifact {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if model.weights.is_empty()
            || model.weights.len() != model.intercepts.len()
            || model.weights.iter().any(|row| row.len() != model.n_features)
        {
            return Err(ClassifyError::MalformedArtifact {
                path: path.to_path_buf(),
                message: format!(
                    "inconsistent shapes: {} weight rows, {} intercepts, n_features {}",
                    model.weights.len(),
                    model.intercepts.len(),
                    model.n_features
                ),
            });
        }

        debug!(
            classes = model.weights.len(),
            n_features = model.n_features,
            path = %path.display(),
            "Loaded classifier"
        );

        Ok(model)
    }

    /// Number of classes in the model's output space.
    pub fn class_count(&self) -> usize {
        self.weights.len()
    }

    /// Predict the class id for a single count vector.
    ///
    /// The vector must have exactly `n_features` entries — a mismatch means
    /// the vocabulary and model artifacts are out of sync, which is a
    /// per-call error, not a panic. Argmax ties resolve to the lowest id.
    pub fn predict(&self, vector: &CountVector) -> Result<usize, ClassifyError> {
        if vector.len() != self.n_features {
            return Err(ClassifyError::Prediction(format!(
                "input has {} features, model expects {}",
                vector.len(),
                self.n_features
            )));
        }

        let mut best_class = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for (class_id, (row, intercept)) in
            self.weights.iter().zip(&self.intercepts).enumerate()
        {
            let score: f64 = row
                .iter()
                .zip(vector)
                .map(|(w, &count)| w * f64::from(count))
                .sum::<f64>()
                + intercept;

            if score > best_score {
                best_score = score;
                best_class = class_id;
            }
        }

        Ok(best_class)
    }
}

/// Bidirectional mapping between class ids and category names.
/// Stored as a JSON array; the class id is the array position.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LabelEncoder {
    labels: Vec<String>,
}

impl LabelEncoder {
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        if !path.exists() {
            return Err(ClassifyError::LabelEncoderNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents =
            fs::read_to_string(path).map_err(|e| ClassifyError::unavailable(path, e))?;
        let encoder: Self =
            serde_json::from_str(&contents).map_err(|e| ClassifyError::MalformedArtifact {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(labels = encoder.labels.len(), path = %path.display(), "Loaded label encoder");

        Ok(encoder)
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode a class id into its category name. An id outside the fitted
    /// label set is a per-call error — it never escapes as a panic.
    pub fn decode(&self, class_id: usize) -> Result<&str, ClassifyError> {
        self.labels
            .get(class_id)
            .map(String::as_str)
            .ok_or_else(|| {
                ClassifyError::Prediction(format!(
                    "class id {} outside label set of {}",
                    class_id,
                    self.labels.len()
                ))
            })
    }

    /// All category names, in class-id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Search an ordered list of candidate directories for a model artifact.
///
/// First directory containing a match wins; within a directory, entries are
/// checked in sorted order so the choice is deterministic. Unreadable
/// directories are skipped rather than treated as fatal — a missing
/// directory just means the artifact isn't there.
pub fn find_model_file(directories: &[PathBuf]) -> Result<PathBuf, ClassifyError> {
    for dir in directories {
        let Ok(entries) = fs::read_dir(dir) else {
            debug!(dir = %dir.display(), "Skipping unreadable model directory");
            continue;
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        for name in names {
            if name.starts_with(MODEL_FILE_PREFIX) && name.ends_with(MODEL_FILE_EXT) {
                return Ok(dir.join(name));
            }
        }
    }

    Err(ClassifyError::ModelNotFound {
        searched: directories.to_vec(),
    })
}
