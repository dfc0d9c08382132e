use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full-mode base weights recorded alongside every batch so historical
/// scores stay interpretable after a weight change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustWeights {
    pub faithfulness: f64,
    pub precision: f64,
    pub similarity: f64,
}

/// Aggregate statistics over one dataset run.
///
/// Means and percentiles are computed only over items without a top-level
/// error; counts cover the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,

    pub mean_trust: f64,
    pub mean_faithfulness: f64,
    pub mean_precision: f64,
    pub mean_recall: f64,
    pub mean_similarity: f64,
    pub mean_coverage: f64,

    /// Nearest-rank p95 over per-item generation latencies.
    pub p95_generation_ms: u64,
    /// Nearest-rank p95 over per-item evaluation latencies.
    pub p95_evaluation_ms: u64,
    pub avg_generation_ms: f64,
    pub avg_evaluation_ms: f64,
    pub total_ms: u64,
    pub cold_starts: usize,

    /// Diagnosis tag → item count. BTreeMap for stable serialization.
    pub diagnosis_counts: BTreeMap<String, usize>,

    pub concurrency: usize,
    pub weights: TrustWeights,
    pub evaluation_version: String,
}
