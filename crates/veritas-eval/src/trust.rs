//! Two-mode trust scoring with citation-policy caps and semantic
//! compensation. Pure function over clamped inputs; the returned breakdown
//! exposes every sub-score used.

use veritas_core::config::TrustConfig;
use veritas_core::models::{TrustBreakdown, TrustMode};

/// Inputs to the trust scorer, gathered by the query evaluator.
#[derive(Debug, Clone)]
pub struct TrustInputs {
    pub mode: TrustMode,
    /// Mean post-rank chunk confidence.
    pub retrieval_quality: f64,
    pub citation_coverage: f64,
    pub citation_validity: f64,
    /// LLM-judged groundedness; full mode only.
    pub faithfulness: Option<f64>,
    pub precision_at_k: Option<f64>,
    /// Ground-truth similarity; defaults per config when absent in full mode.
    pub similarity: Option<f64>,
    /// Whether citations were still invalid after the one-shot retry.
    pub citation_invalid_after_retry: bool,
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Compute the trust breakdown for one evaluated query.
pub fn score(inputs: &TrustInputs, cfg: &TrustConfig) -> TrustBreakdown {
    match inputs.mode {
        TrustMode::Lightweight => score_lightweight(inputs, cfg),
        TrustMode::Full => score_full(inputs, cfg),
    }
}

fn score_lightweight(inputs: &TrustInputs, cfg: &TrustConfig) -> TrustBreakdown {
    let retrieval_quality = clamp01(inputs.retrieval_quality);
    let coverage = clamp01(inputs.citation_coverage);
    let validity = clamp01(inputs.citation_validity);

    let raw = cfg.light_retrieval_weight * retrieval_quality
        + cfg.light_coverage_weight * coverage
        + cfg.light_validity_weight * validity;
    let mut score = clamp01(raw);

    let mut capped = false;
    let mut cap_value = None;
    if inputs.citation_invalid_after_retry && score > cfg.light_citation_cap {
        score = cfg.light_citation_cap;
        capped = true;
        cap_value = Some(cfg.light_citation_cap);
    }

    TrustBreakdown {
        mode: TrustMode::Lightweight,
        score,
        retrieval_quality,
        citation_coverage: coverage,
        citation_validity: validity,
        faithfulness: None,
        precision_at_k: None,
        similarity: None,
        base: None,
        citation_score: None,
        combined: None,
        semantic_compensation_applied: false,
        capped_by_citation_policy: capped,
        cap_value,
    }
}

fn score_full(inputs: &TrustInputs, cfg: &TrustConfig) -> TrustBreakdown {
    let retrieval_quality = clamp01(inputs.retrieval_quality);
    let coverage = clamp01(inputs.citation_coverage);
    let validity = clamp01(inputs.citation_validity);

    let faithfulness = clamp01(
        inputs
            .faithfulness
            .unwrap_or(cfg.faithfulness_without_judge),
    );
    let precision = clamp01(inputs.precision_at_k.unwrap_or(0.0));
    let similarity = clamp01(inputs.similarity.unwrap_or(cfg.similarity_without_truth));

    let base = cfg.faithfulness_weight * faithfulness
        + cfg.precision_weight * precision
        + cfg.similarity_weight * similarity;
    let citation_score =
        cfg.citation_coverage_weight * coverage + cfg.citation_validity_weight * validity;
    let mut combined =
        cfg.base_blend_weight * base + cfg.citation_blend_weight * citation_score;

    // Semantic compensation: a well-grounded, semantically correct answer
    // is not collapsed by weak citation/precision signals.
    let mut compensated = false;
    if faithfulness >= cfg.compensation_faithfulness_threshold
        && similarity > cfg.compensation_similarity_threshold
        && combined < cfg.compensation_floor
    {
        combined = cfg.compensation_floor;
        compensated = true;
        tracing::debug!(
            faithfulness,
            similarity,
            floor = cfg.compensation_floor,
            "semantic compensation applied"
        );
    }

    let mut score = clamp01(combined);

    let mut capped = false;
    let mut cap_value = None;
    if inputs.citation_invalid_after_retry && score > cfg.full_citation_cap {
        score = cfg.full_citation_cap;
        capped = true;
        cap_value = Some(cfg.full_citation_cap);
    }

    TrustBreakdown {
        mode: TrustMode::Full,
        score,
        retrieval_quality,
        citation_coverage: coverage,
        citation_validity: validity,
        faithfulness: Some(faithfulness),
        precision_at_k: Some(precision),
        similarity: Some(similarity),
        base: Some(base),
        citation_score: Some(citation_score),
        combined: Some(combined),
        semantic_compensation_applied: compensated,
        capped_by_citation_policy: capped,
        cap_value,
    }
}
