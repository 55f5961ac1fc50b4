//! Stats report data model.
//!
//! One JSON document per page load, mapping block ids to per-block stats.
//! The report is immutable once parsed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type StatsReport = HashMap<String, BlockStats>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStats {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub design_stage: Option<String>,
    #[serde(default)]
    pub verification_stage: Option<String>,
    #[serde(default)]
    pub total_runs: Option<u64>,
    #[serde(default)]
    pub total_passing: Option<u64>,
}

impl BlockStats {
    /// Both stage codes present and non-empty.
    pub fn has_stages(&self) -> bool {
        stage_present(&self.design_stage) && stage_present(&self.verification_stage)
    }

    /// Both test counts present and non-zero. A report with zero runs
    /// suppresses the test row.
    pub fn has_test_counts(&self) -> bool {
        count_present(self.total_runs) && count_present(self.total_passing)
    }
}

fn stage_present(stage: &Option<String>) -> bool {
    stage.as_deref().is_some_and(|s| !s.is_empty())
}

fn count_present(count: Option<u64>) -> bool {
    count.is_some_and(|c| c > 0)
}

/// Parse a JSON stats report body.
pub fn parse_report(body: &str) -> serde_json::Result<StatsReport> {
    serde_json::from_str(body)
}
