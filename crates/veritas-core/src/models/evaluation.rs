use serde::{Deserialize, Serialize};

use super::citation::CitationReport;
use super::trust::TrustBreakdown;

/// Per-stage latency breakdown for one query evaluation, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    pub embed_ms: u64,
    pub retrieve_ms: u64,
    pub generate_ms: u64,
    pub validate_ms: u64,
    /// Zero unless the one-shot citation retry fired.
    pub regenerate_ms: u64,
    pub faithfulness_ms: u64,
    pub similarity_ms: u64,
    pub score_ms: u64,
    pub total_ms: u64,
}

impl StageTimings {
    /// Time spent in the generation model (initial answer + retry).
    pub fn generation_ms(&self) -> u64 {
        self.generate_ms + self.regenerate_ms
    }

    /// Time spent evaluating rather than generating.
    pub fn evaluation_ms(&self) -> u64 {
        self.total_ms.saturating_sub(self.generation_ms())
    }
}

/// Root-cause classification of one evaluated query, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    /// precision@K below 0.5 — the wrong evidence was retrieved.
    RetrievalIssue,
    /// Faithfulness below 0.5 — the answer is not grounded in the evidence.
    HallucinationIssue,
    /// Ground-truth similarity below 0.5.
    AnswerQualityIssue,
    /// Citations remained invalid.
    CitationIssue,
    Healthy,
    /// The item failed with a top-level error.
    Error,
}

impl Diagnosis {
    /// Classify a successful evaluation. Checks run in priority order;
    /// signals that were not computed (None) are treated as passing.
    pub fn classify(
        precision_at_k: Option<f64>,
        faithfulness: Option<f64>,
        similarity: Option<f64>,
        citations_valid: bool,
    ) -> Self {
        if precision_at_k.is_some_and(|p| p < 0.5) {
            Self::RetrievalIssue
        } else if faithfulness.is_some_and(|f| f < 0.5) {
            Self::HallucinationIssue
        } else if similarity.is_some_and(|s| s < 0.5) {
            Self::AnswerQualityIssue
        } else if !citations_valid {
            Self::CitationIssue
        } else {
            Self::Healthy
        }
    }

    /// Stable string tag used in statistics maps and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::RetrievalIssue => "retrieval_issue",
            Self::HallucinationIssue => "hallucination_issue",
            Self::AnswerQualityIssue => "answer_quality_issue",
            Self::CitationIssue => "citation_issue",
            Self::Healthy => "healthy",
            Self::Error => "error",
        }
    }
}

/// One fully evaluated query: answer, signals, trust score, diagnosis
/// and timings. `error` is set (and everything else zeroed) when the item
/// failed with a collaborator error inside a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryEvaluation {
    pub query: String,
    pub answer: String,
    pub ground_truth: Option<String>,
    /// Normalized `documentId_year` keys of the ranked chunks.
    pub retrieved_ids: Vec<String>,
    pub precision_at_k: f64,
    pub recall_at_k: f64,
    pub faithfulness: Option<f64>,
    pub similarity: Option<f64>,
    pub citations: CitationReport,
    pub trust: TrustBreakdown,
    pub diagnosis: Diagnosis,
    pub cold_start: bool,
    pub timings: StageTimings,
    pub error: Option<String>,
}

impl QueryEvaluation {
    /// Zero-score placeholder for an item that failed with a top-level
    /// error. Keeps the batch result array full length.
    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: String::new(),
            ground_truth: None,
            retrieved_ids: Vec::new(),
            precision_at_k: 0.0,
            recall_at_k: 0.0,
            faithfulness: None,
            similarity: None,
            citations: CitationReport::empty(),
            trust: TrustBreakdown::zero(),
            diagnosis: Diagnosis::Error,
            cold_start: false,
            timings: StageTimings::default(),
            error: Some(message.into()),
        }
    }
}
