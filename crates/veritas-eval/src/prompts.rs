//! Prompt builders for answer generation, citation-retry feedback, and the
//! faithfulness judge.

use veritas_core::models::{CitationIssue, CitationReport, RetrievedChunk};

/// Render the numbered source block shared by all prompts.
fn numbered_sources(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, c.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prompt for the initial answer: numbered sources plus citation rules.
pub fn answer_prompt(query: &str, chunks: &[RetrievedChunk]) -> String {
    format!(
        r#"Answer the question using ONLY the numbered sources below.

SOURCES:
{sources}

RULES:
- Cite sources with bracketed numbers, e.g. [1] or [2], after every factual statement.
- Only cite source numbers that exist above (1 to {count}).
- If the sources do not contain the answer, say so explicitly.

QUESTION:
{query}

ANSWER:"#,
        sources = numbered_sources(chunks),
        count = chunks.len(),
        query = query,
    )
}

/// Fixed answer returned when retrieval produced no evidence at all.
pub const REFUSAL_ANSWER: &str =
    "I could not find supporting material for this question in the knowledge base.";

/// Feedback prompt for the one-shot citation regeneration. Enumerates the
/// specific violations so the model can correct them.
pub fn regeneration_prompt(
    query: &str,
    chunks: &[RetrievedChunk],
    previous_answer: &str,
    report: &CitationReport,
) -> String {
    let mut violations = Vec::new();
    for issue in &report.issues {
        match issue {
            CitationIssue::MissingCitations => {
                violations.push("The answer contains no [n] citations at all.".to_string());
            }
            CitationIssue::InvalidReferenceIndices => {
                violations.push(format!(
                    "These cited source numbers do not exist: {:?}. Valid numbers are 1 to {}.",
                    report.invalid_citations,
                    chunks.len()
                ));
            }
            CitationIssue::InsufficientCitationCoverage => {
                violations.push(format!(
                    "Only {} of {} factual sentences carry a citation; every factual sentence needs one.",
                    report.cited_sentence_count, report.factual_sentence_count
                ));
            }
        }
    }

    format!(
        r#"Your previous answer had citation problems and must be rewritten.

PROBLEMS:
{problems}

SOURCES:
{sources}

PREVIOUS ANSWER:
{previous}

Rewrite the answer to the question below, fixing every problem listed. Cite
only existing source numbers and attach a citation to every factual sentence.

QUESTION:
{query}

ANSWER:"#,
        problems = violations.join("\n"),
        sources = numbered_sources(chunks),
        previous = previous_answer,
        query = query,
    )
}

/// Prompt asking a judge model for a 0–1 groundedness score.
pub fn faithfulness_prompt(answer: &str, chunks: &[RetrievedChunk]) -> String {
    format!(
        r#"You are grading whether an answer is faithful to its sources.

SOURCES:
{sources}

ANSWER:
{answer}

Check every claim in the answer against the sources. Respond with a single
number between 0.0 and 1.0, where 1.0 means every claim is supported and
0.0 means none are. Respond with only the number."#,
        sources = numbered_sources(chunks),
        answer = answer,
    )
}

/// Parse the judge's response: the first token that parses as a float,
/// clamped to [0, 1]. None when no number is present.
pub fn parse_judge_score(raw: &str) -> Option<f64> {
    raw.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|s| !s.is_empty())
        .find_map(|s| s.parse::<f64>().ok())
        .map(|v| v.clamp(0.0, 1.0))
}
