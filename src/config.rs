use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::classify::model::LABEL_ENCODER_FILE;
use crate::classify::ArtifactPaths;

/// Names of the fixed resources inside the data directory. These match
/// what the training export produces.
pub const STOPWORDS_FILE: &str = "stopwords_en.txt";
pub const VOCAB_FILE: &str = "vocab.txt";
pub const LISTINGS_FILE: &str = "preprocessed_jobs.txt";
pub const POSTED_FILE: &str = "posted_jobs.json";

/// Central configuration loaded from environment variables. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory holding stopwords, vocabulary, and the job listings file.
    pub data_dir: PathBuf,
    /// Directory holding the trained model and label encoder artifacts.
    pub model_dir: PathBuf,
    /// Flat listings file (defaults to LISTINGS_FILE inside data_dir).
    pub listings_path: PathBuf,
    /// JSON sidecar for user-submitted jobs.
    pub posted_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default, so a checkout with a populated ./data directory runs with
    /// no .env at all.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("CORKBOARD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let model_dir = env::var("CORKBOARD_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        let listings_path = env::var("CORKBOARD_JOBS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(LISTINGS_FILE));

        let posted_path = env::var("CORKBOARD_POSTED_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(POSTED_FILE));

        Ok(Self {
            data_dir,
            model_dir,
            listings_path,
            posted_path,
        })
    }

    /// Where the classifier looks for its artifacts. The model search is
    /// ordered: data dir first, then the model dir, then the working
    /// directory — first match wins.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            stopwords: self.data_dir.join(STOPWORDS_FILE),
            vocabulary: self.data_dir.join(VOCAB_FILE),
            model_dirs: vec![
                self.data_dir.clone(),
                self.model_dir.clone(),
                PathBuf::from("."),
            ],
            label_encoder: self.model_dir.join(LABEL_ENCODER_FILE),
        }
    }
}

/// Default directory for model artifacts: the platform data directory
/// (~/.local/share/corkboard/models/ on Linux).
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("corkboard")
        .join("models")
}
