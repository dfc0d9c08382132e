//! Citation extraction and validation.
//!
//! Pure functions: identical inputs always yield identical reports. Policy
//! outcomes here (missing citations, low coverage) are never errors — the
//! trust scorer turns them into caps.

use std::sync::LazyLock;

use regex::Regex;

use veritas_core::constants::{COVERAGE_THRESHOLD, FACTUAL_SENTENCE_MIN_LEN};
use veritas_core::models::{CitationIssue, CitationReport};

static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("citation regex"));

/// Extract `[n]` citation indices in order of appearance.
pub fn extract_citations(answer: &str) -> Vec<usize> {
    CITATION_RE
        .captures_iter(answer)
        .filter_map(|cap| cap[1].parse::<usize>().ok())
        .collect()
}

/// Split an answer into sentences. Boundaries are `.`, `!`, `?` followed by
/// whitespace (or end of text), and newlines.
pub fn split_sentences(answer: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = answer.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            push_sentence(&mut sentences, &mut current);
            continue;
        }
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_boundary {
                push_sentence(&mut sentences, &mut current);
            }
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// A sentence is factual when it is long enough to carry a claim and
/// contains at least one letter or digit.
fn is_factual(sentence: &str) -> bool {
    sentence.chars().count() >= FACTUAL_SENTENCE_MIN_LEN
        && sentence.chars().any(|c| c.is_alphanumeric())
}

/// Validate an answer's citations against `source_count` retrieved sources.
pub fn validate(answer: &str, source_count: usize) -> CitationReport {
    let citations = extract_citations(answer);

    let mut unique_citations: Vec<usize> = citations.clone();
    unique_citations.sort_unstable();
    unique_citations.dedup();

    let invalid_citations: Vec<usize> = unique_citations
        .iter()
        .copied()
        .filter(|&n| n < 1 || n > source_count)
        .collect();

    let has_citations = !citations.is_empty();

    let sentences = split_sentences(answer);
    let factual: Vec<&String> = sentences.iter().filter(|s| is_factual(s)).collect();
    let factual_sentence_count = factual.len();
    let cited_sentence_count = factual
        .iter()
        .filter(|s| CITATION_RE.is_match(s))
        .count();

    let coverage = if factual_sentence_count == 0 {
        0.0
    } else {
        cited_sentence_count as f64 / factual_sentence_count as f64
    };

    let citation_validity = if has_citations && invalid_citations.is_empty() {
        1.0
    } else {
        0.0
    };

    let is_valid =
        has_citations && invalid_citations.is_empty() && coverage >= COVERAGE_THRESHOLD;

    let mut issues = Vec::new();
    if !has_citations {
        issues.push(CitationIssue::MissingCitations);
    }
    if !invalid_citations.is_empty() {
        issues.push(CitationIssue::InvalidReferenceIndices);
    }
    if has_citations && coverage < COVERAGE_THRESHOLD {
        issues.push(CitationIssue::InsufficientCitationCoverage);
    }

    CitationReport {
        citations,
        unique_citations,
        invalid_citations,
        has_citations,
        factual_sentence_count,
        cited_sentence_count,
        coverage,
        citation_validity,
        is_valid,
        retry_count: 0,
        issues,
    }
}
