//! Job catalog — the fixed set of postings used for recommendations.
//!
//! Loaded once at startup and shared read-only through `AppState`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/jobs.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
}

impl JobCatalog {
    /// Loads the catalog from `path`, or the embedded default catalog when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read job catalog '{}'", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid job catalog '{}'", path.display()))
            }
            None => Self::from_json(DEFAULT_CATALOG_JSON).context("Invalid embedded job catalog"),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let jobs: Vec<JobRecord> = serde_json::from_str(raw)?;
        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
