use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Batch evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum in-flight query evaluations per batch.
    pub max_concurrency: usize,
    /// Evaluation latency above which an item is flagged as a cold start
    /// (heuristic for first-call model warm-up).
    pub cold_start_threshold_ms: u64,
    /// Version tag stamped into benchmark records.
    pub evaluation_version: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_concurrency: defaults::DEFAULT_MAX_CONCURRENCY,
            cold_start_threshold_ms: defaults::DEFAULT_COLD_START_THRESHOLD_MS,
            evaluation_version: constants::EVALUATION_VERSION.to_string(),
        }
    }
}
