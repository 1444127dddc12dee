// Job store trait — the seam between the web layer and storage.
//
// The default implementation keeps jobs in memory, seeded from a flat
// listings file, with user submissions persisted to a JSON sidecar. A real
// database can be swapped in later without touching the handlers.

use anyhow::Result;
use async_trait::async_trait;

use super::model::{Job, NewJob};

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All jobs, listing order.
    async fn list(&self) -> Vec<Job>;

    /// Look up a single job by webindex.
    async fn get(&self, webindex: u64) -> Option<Job>;

    /// Jobs in the given category (exact match).
    async fn by_category(&self, category: &str) -> Vec<Job>;

    /// Distinct category names, sorted.
    async fn categories(&self) -> Vec<String>;

    /// Add a user-submitted job: assigns a webindex and timestamp,
    /// persists it, and returns the stored job.
    async fn add(&self, new: NewJob) -> Result<Job>;
}
