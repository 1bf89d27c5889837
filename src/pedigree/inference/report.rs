use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

use super::engine::InferenceStats;
use super::posterior::PosteriorTable;
use crate::pedigree::common::errors::Result;

/// Serializable record of one inference run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PosteriorReport {
    /// Format version
    pub version: u32,
    /// When the posteriors were computed
    pub generated_at: DateTime<Utc>,
    /// Data file or scenario the family came from
    pub source: String,
    pub stats: InferenceStats,
    pub people: PosteriorTable,
}

impl PosteriorReport {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(source: &str, stats: InferenceStats, people: PosteriorTable) -> Self {
        PosteriorReport {
            version: Self::CURRENT_VERSION,
            generated_at: Utc::now(),
            source: source.to_string(),
            stats,
            people,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        info!("Writing posterior report to {}", path);
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
