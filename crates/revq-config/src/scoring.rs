//! Scoring engine configuration.

use serde::{Deserialize, Serialize};

fn default_priority_extensions() -> Vec<String> {
    [".go", ".tf", ".py"].map(String::from).to_vec()
}

fn default_urgent_keywords() -> Vec<String> {
    ["URGENT", "EMERGENCY", "緊急", "重要", "急ぎ"]
        .map(String::from)
        .to_vec()
}

/// Default commit lookback window, in days.
const fn default_lookback_days() -> u32 {
    365
}

/// Default number of concurrent commit/diff fetches.
const fn default_concurrency() -> usize {
    4
}

/// Longest accepted lookback window (100 years).
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Path suffixes that earn diff points.
    #[serde(default = "default_priority_extensions")]
    pub priority_extensions: Vec<String>,

    /// Keywords that mark an item urgent.
    #[serde(default = "default_urgent_keywords")]
    pub urgent_keywords: Vec<String>,

    /// Commit history window for the authorship signal, in days.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// Maximum in-flight commit/diff fetches.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            priority_extensions: default_priority_extensions(),
            urgent_keywords: default_urgent_keywords(),
            lookback_days: default_lookback_days(),
            concurrency: default_concurrency(),
        }
    }
}
