// Job data models — the types that flow between the store, the web layer,
// and the persistence sidecar. Kept separate from the store so other
// modules can use them without caring where jobs came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single job posting. Listings loaded from the flat file have
/// `posted_at: None`; user-submitted jobs carry their submission time and
/// are the only ones persisted to the JSON sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Stable id used in /job/{id} URLs.
    pub webindex: u64,
    pub title: String,
    pub company: String,
    pub category: String,
    /// Raw description as submitted. Listings from the flat file only
    /// carry the preprocessed form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub processed_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

/// A job submission from the posting form, before the store assigns a
/// webindex and timestamp.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub category: String,
    pub description: String,
    pub processed_description: String,
}
