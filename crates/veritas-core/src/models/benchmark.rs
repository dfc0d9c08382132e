use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::statistics::BatchStatistics;

/// Persisted summary of one benchmark run. Appended to the benchmark
/// store and never mutated afterward. The serialized shape is a stable,
/// additive-only contract across versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Shared across all model runs of one leaderboard invocation.
    pub benchmark_id: String,
    pub timestamp: DateTime<Utc>,
    /// Content hash of the serialized dataset; correlates records from the
    /// same input set across model runs.
    pub dataset_hash: String,
    pub generation_model: String,
    pub evaluation_model: String,
    pub statistics: BatchStatistics,
}

/// Content hash of a serializable dataset, as a blake3 hex string.
pub fn dataset_hash<T: Serialize>(dataset: &T) -> String {
    // Serialization of our own value types does not fail; fall back to an
    // empty document rather than poisoning the run.
    let bytes = serde_json::to_vec(dataset).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}
