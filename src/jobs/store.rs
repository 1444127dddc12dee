// Flat-file backed job store.
//
// Listings live in a block-structured text file: a `Category:` line opens a
// new entry, following `Key: value` lines fill in its fields, and a blank
// line closes it. User-submitted jobs are appended in memory and persisted
// to a JSON sidecar so they survive restarts; the flat file itself is never
// rewritten.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::model::{Job, NewJob};
use super::traits::JobStore;

pub struct FlatFileStore {
    jobs: RwLock<Vec<Job>>,
    /// JSON sidecar holding user-submitted jobs.
    posted_path: PathBuf,
}

impl FlatFileStore {
    /// Load listings from the flat file, then re-apply any previously
    /// submitted jobs from the sidecar.
    pub fn open(listings_path: &Path, posted_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(listings_path)
            .with_context(|| format!("could not read listings file {}", listings_path.display()))?;
        let mut jobs = parse_listings(&contents);
        info!(
            jobs = jobs.len(),
            path = %listings_path.display(),
            "Loaded job listings"
        );

        if posted_path.exists() {
            let posted_raw = fs::read_to_string(posted_path).with_context(|| {
                format!("could not read posted jobs file {}", posted_path.display())
            })?;
            let posted: Vec<Job> = serde_json::from_str(&posted_raw).with_context(|| {
                format!("malformed posted jobs file {}", posted_path.display())
            })?;
            info!(jobs = posted.len(), "Restored user-submitted jobs");
            jobs.extend(posted);
        }

        Ok(Self {
            jobs: RwLock::new(jobs),
            posted_path: posted_path.to_path_buf(),
        })
    }

    /// An empty store persisting to the given sidecar — used by tests and
    /// by `serve` when no listings file exists yet.
    pub fn empty(posted_path: &Path) -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            posted_path: posted_path.to_path_buf(),
        }
    }

    fn persist_posted(&self, jobs: &[Job]) -> Result<()> {
        let posted: Vec<&Job> = jobs.iter().filter(|j| j.posted_at.is_some()).collect();
        let json = serde_json::to_string_pretty(&posted)?;
        fs::write(&self.posted_path, json).with_context(|| {
            format!("could not write posted jobs to {}", self.posted_path.display())
        })
    }
}

#[async_trait]
impl JobStore for FlatFileStore {
    async fn list(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    async fn get(&self, webindex: u64) -> Option<Job> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|j| j.webindex == webindex)
            .cloned()
    }

    async fn by_category(&self, category: &str) -> Vec<Job> {
        self.jobs
            .read()
            .await
            .iter()
            .filter(|j| j.category == category)
            .cloned()
            .collect()
    }

    async fn categories(&self) -> Vec<String> {
        let jobs = self.jobs.read().await;
        let set: BTreeSet<&str> = jobs.iter().map(|j| j.category.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    async fn add(&self, new: NewJob) -> Result<Job> {
        let mut jobs = self.jobs.write().await;

        // max + 1 rather than len + 1: flat-file webindexes are arbitrary,
        // and /job/{id} lookups must stay unambiguous.
        let webindex = jobs.iter().map(|j| j.webindex).max().unwrap_or(0) + 1;

        let job = Job {
            webindex,
            title: new.title,
            company: new.company,
            category: new.category,
            description: Some(new.description),
            processed_description: new.processed_description,
            posted_at: Some(Utc::now()),
        };

        jobs.push(job.clone());
        if let Err(e) = self.persist_posted(&jobs) {
            // Keep memory and disk consistent: a job we couldn't persist
            // must not stay visible in listings, or a retry would create
            // a duplicate under a second webindex.
            jobs.pop();
            return Err(e);
        }

        info!(webindex, title = %job.title, "Job posted");
        Ok(job)
    }
}

/// Parse the block-structured listings file.
///
/// Keys are normalized the way the training data was exported: lowercased
/// with spaces replaced by underscores, so `Webindex:` becomes `webindex`.
/// Values keep everything after the first colon. Entries missing a parsable
/// webindex are skipped with a warning rather than failing the whole load.
pub fn parse_listings(contents: &str) -> Vec<Job> {
    let mut jobs = Vec::new();
    let mut current: Option<RawEntry> = None;

    for line in contents.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("Category:") {
            // A Category line opens a new entry, closing any previous one.
            if let Some(entry) = current.take() {
                push_entry(&mut jobs, entry);
            }
            current = Some(RawEntry {
                category: rest.trim().to_string(),
                ..RawEntry::default()
            });
        } else if let Some((key, value)) = line.split_once(':') {
            if let Some(entry) = current.as_mut() {
                let key = key.trim().to_lowercase().replace(' ', "_");
                let value = value.trim();
                match key.as_str() {
                    "title" => entry.title = value.to_string(),
                    "company" => entry.company = value.to_string(),
                    "webindex" => entry.webindex = value.parse().ok(),
                    "description" => entry.description = value.to_string(),
                    // Unknown keys are tolerated; the export format has
                    // grown fields before.
                    _ => {}
                }
            }
        } else if line.is_empty() {
            if let Some(entry) = current.take() {
                push_entry(&mut jobs, entry);
            }
        }
    }

    // File may not end with a blank line.
    if let Some(entry) = current.take() {
        push_entry(&mut jobs, entry);
    }

    jobs
}

#[derive(Default)]
struct RawEntry {
    category: String,
    title: String,
    company: String,
    webindex: Option<u64>,
    description: String,
}

fn push_entry(jobs: &mut Vec<Job>, entry: RawEntry) {
    let Some(webindex) = entry.webindex else {
        warn!(title = %entry.title, "Skipping listing without a webindex");
        return;
    };
    jobs.push(Job {
        webindex,
        title: entry.title,
        company: entry.company,
        category: entry.category,
        description: None,
        processed_description: entry.description,
        posted_at: None,
    });
}
