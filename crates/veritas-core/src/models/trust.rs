use serde::{Deserialize, Serialize};

/// Which scoring mode produced a [`TrustBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustMode {
    /// Retrieval quality + citation discipline only. Used when neither
    /// ground truth nor faithfulness judging was requested.
    Lightweight,
    /// Faithfulness + precision@K + similarity, blended with the citation
    /// sub-score.
    Full,
}

/// Explainable trust score. Every sub-score that contributed to the final
/// number is exposed for inspection and testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBreakdown {
    pub mode: TrustMode,
    /// Final score, always clamped to [0, 1].
    pub score: f64,

    // Lightweight components (also feed the full-mode citation sub-score).
    pub retrieval_quality: f64,
    pub citation_coverage: f64,
    pub citation_validity: f64,

    // Full-mode components. None in lightweight mode.
    pub faithfulness: Option<f64>,
    pub precision_at_k: Option<f64>,
    pub similarity: Option<f64>,
    /// Weighted faithfulness/precision/similarity blend before the
    /// citation blend.
    pub base: Option<f64>,
    /// 0.7 * coverage + 0.3 * validity.
    pub citation_score: Option<f64>,
    /// Blend of base and citation_score after compensation, before caps.
    pub combined: Option<f64>,

    /// Whether the semantic-compensation floor was applied.
    pub semantic_compensation_applied: bool,
    /// Whether the invalid-after-retry citation cap was applied.
    pub capped_by_citation_policy: bool,
    /// Only set when a cap was applied.
    pub cap_value: Option<f64>,
}

impl TrustBreakdown {
    /// A zero-score lightweight breakdown, used for refusals and
    /// failed items.
    pub fn zero() -> Self {
        Self {
            mode: TrustMode::Lightweight,
            score: 0.0,
            retrieval_quality: 0.0,
            citation_coverage: 0.0,
            citation_validity: 0.0,
            faithfulness: None,
            precision_at_k: None,
            similarity: None,
            base: None,
            citation_score: None,
            combined: None,
            semantic_compensation_applied: false,
            capped_by_citation_policy: false,
            cap_value: None,
        }
    }
}
