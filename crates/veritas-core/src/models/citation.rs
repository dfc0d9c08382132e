use serde::{Deserialize, Serialize};

/// Machine-readable citation problems, accumulated during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationIssue {
    /// The answer carries no `[n]` markers at all.
    MissingCitations,
    /// At least one cited index falls outside `1..=source_count`.
    InvalidReferenceIndices,
    /// Coverage of factual sentences fell below the threshold.
    InsufficientCitationCoverage,
}

/// Outcome of checking a generated answer's citations against the
/// retrieved sources. Produced by a pure function: identical inputs
/// always yield an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationReport {
    /// Raw citation indices in order of appearance.
    pub citations: Vec<usize>,
    /// Sorted distinct citation indices.
    pub unique_citations: Vec<usize>,
    /// Cited indices outside `1..=source_count`.
    pub invalid_citations: Vec<usize>,
    pub has_citations: bool,
    pub factual_sentence_count: usize,
    pub cited_sentence_count: usize,
    /// cited / factual, 0.0 when there are no factual sentences.
    pub coverage: f64,
    /// 1.0 iff citations exist and none are invalid, else 0.0.
    pub citation_validity: f64,
    /// Validity plus coverage >= the threshold.
    pub is_valid: bool,
    /// Number of regeneration attempts consumed (0 or 1).
    pub retry_count: u32,
    pub issues: Vec<CitationIssue>,
}

impl CitationReport {
    /// Report for an answer that was never citation-checked (refusals,
    /// failed items). Everything zeroed, marked invalid.
    pub fn empty() -> Self {
        Self {
            citations: Vec::new(),
            unique_citations: Vec::new(),
            invalid_citations: Vec::new(),
            has_citations: false,
            factual_sentence_count: 0,
            cited_sentence_count: 0,
            coverage: 0.0,
            citation_validity: 0.0,
            is_valid: false,
            retry_count: 0,
            issues: Vec::new(),
        }
    }
}
