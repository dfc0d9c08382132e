use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust scoring configuration.
///
/// The cap and compensation constants are fixed heuristics from production
/// tuning with no documented derivation; they are configurable rather than
/// hardcoded so deployments can adjust without a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Full mode: weight of the LLM-judged faithfulness score.
    pub faithfulness_weight: f64,
    /// Full mode: weight of precision@K.
    pub precision_weight: f64,
    /// Full mode: weight of ground-truth similarity.
    pub similarity_weight: f64,

    /// Lightweight mode component weights.
    pub light_retrieval_weight: f64,
    pub light_coverage_weight: f64,
    pub light_validity_weight: f64,
    /// Lightweight cap when citations remained invalid after the retry.
    pub light_citation_cap: f64,

    /// Full mode: citation sub-score blend (coverage vs validity).
    pub citation_coverage_weight: f64,
    pub citation_validity_weight: f64,
    /// Full mode: blend of base score vs citation sub-score.
    pub base_blend_weight: f64,
    pub citation_blend_weight: f64,
    /// Full-mode cap when citations remained invalid after the retry.
    pub full_citation_cap: f64,

    /// Semantic compensation: when faithfulness and similarity both clear
    /// these thresholds, the combined score is floored at
    /// `compensation_floor`.
    pub compensation_faithfulness_threshold: f64,
    pub compensation_similarity_threshold: f64,
    pub compensation_floor: f64,

    /// Similarity assumed in full mode when no ground truth was supplied.
    pub similarity_without_truth: f64,
    /// Faithfulness assumed in full mode when the judge was not requested.
    /// Neutral rather than zero: an unmeasured signal must not sink the
    /// base score.
    pub faithfulness_without_judge: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            faithfulness_weight: defaults::DEFAULT_FAITHFULNESS_WEIGHT,
            precision_weight: defaults::DEFAULT_PRECISION_WEIGHT,
            similarity_weight: defaults::DEFAULT_SIMILARITY_WEIGHT,
            light_retrieval_weight: defaults::DEFAULT_LIGHT_RETRIEVAL_WEIGHT,
            light_coverage_weight: defaults::DEFAULT_LIGHT_COVERAGE_WEIGHT,
            light_validity_weight: defaults::DEFAULT_LIGHT_VALIDITY_WEIGHT,
            light_citation_cap: defaults::DEFAULT_LIGHT_CITATION_CAP,
            citation_coverage_weight: defaults::DEFAULT_CITATION_COVERAGE_WEIGHT,
            citation_validity_weight: defaults::DEFAULT_CITATION_VALIDITY_WEIGHT,
            base_blend_weight: defaults::DEFAULT_BASE_BLEND_WEIGHT,
            citation_blend_weight: defaults::DEFAULT_CITATION_BLEND_WEIGHT,
            full_citation_cap: defaults::DEFAULT_FULL_CITATION_CAP,
            compensation_faithfulness_threshold: defaults::DEFAULT_COMPENSATION_FAITHFULNESS,
            compensation_similarity_threshold: defaults::DEFAULT_COMPENSATION_SIMILARITY,
            compensation_floor: defaults::DEFAULT_COMPENSATION_FLOOR,
            similarity_without_truth: defaults::DEFAULT_SIMILARITY_WITHOUT_TRUTH,
            faithfulness_without_judge: defaults::DEFAULT_FAITHFULNESS_WITHOUT_JUDGE,
        }
    }
}
