//! Citation validator behavior: extraction, coverage, validity, issue tags.

use veritas_core::models::CitationIssue;
use veritas_eval::citation::{extract_citations, split_sentences, validate};

// ─── Extraction ───

#[test]
fn extracts_citations_in_order_of_appearance() {
    let citations = extract_citations("B [2] then A [1] then A again [1].");
    assert_eq!(citations, vec![2, 1, 1]);
}

#[test]
fn sentence_split_handles_terminators_and_newlines() {
    let sentences = split_sentences("First sentence. Second one!\nThird via newline");
    assert_eq!(
        sentences,
        vec!["First sentence.", "Second one!", "Third via newline"]
    );
}

#[test]
fn decimal_points_do_not_split_sentences() {
    let sentences = split_sentences("The fee is 3.5 percent of tuition [1].");
    assert_eq!(sentences.len(), 1);
}

// ─── Validation ───

#[test]
fn fully_cited_answer_is_valid() {
    let report = validate("The deadline is June 15 [1]. Fees are waived for finalists [2].", 2);
    assert!(report.is_valid);
    assert_eq!(report.unique_citations, vec![1, 2]);
    assert_eq!(report.coverage, 1.0);
    assert_eq!(report.citation_validity, 1.0);
    assert!(report.issues.is_empty());
}

#[test]
fn out_of_range_citation_is_invalid() {
    let report = validate("The deadline is June 15 [3].", 2);
    assert_eq!(report.invalid_citations, vec![3]);
    assert!(!report.is_valid);
    assert_eq!(report.citation_validity, 0.0);
    assert!(report.issues.contains(&CitationIssue::InvalidReferenceIndices));
}

#[test]
fn half_covered_answer_fails_threshold() {
    let report = validate(
        "The deadline is June 15 for all programs [1]. Late submissions are never accepted at all.",
        2,
    );
    assert_eq!(report.factual_sentence_count, 2);
    assert_eq!(report.cited_sentence_count, 1);
    assert_eq!(report.coverage, 0.5);
    assert!(!report.is_valid);
    assert!(report
        .issues
        .contains(&CitationIssue::InsufficientCitationCoverage));
}

#[test]
fn uncited_answer_reports_missing_citations() {
    let report = validate("The deadline is June 15 for all programs.", 2);
    assert!(!report.has_citations);
    assert_eq!(report.coverage, 0.0);
    assert!(report.issues.contains(&CitationIssue::MissingCitations));
}

#[test]
fn zero_index_citation_is_invalid() {
    let report = validate("The deadline is June 15 already [0].", 2);
    assert_eq!(report.invalid_citations, vec![0]);
    assert!(!report.is_valid);
}

#[test]
fn short_fragments_are_not_factual() {
    // Under 20 chars: not factual, so coverage has no denominator.
    let report = validate("Yes [1].", 1);
    assert_eq!(report.factual_sentence_count, 0);
    assert_eq!(report.coverage, 0.0);
}

#[test]
fn validator_is_idempotent() {
    let answer = "The deadline is June 15 [1]. Fees are waived for finalists [2].";
    let first = validate(answer, 2);
    let second = validate(answer, 2);
    assert_eq!(first, second);
}
