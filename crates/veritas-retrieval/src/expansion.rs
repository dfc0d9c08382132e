//! Cross-language query expansion.
//!
//! The corpus is predominantly non-Latin while users frequently ask in
//! English. When retrieval is driven by raw query text (no precomputed
//! embedding), a Latin-script query is expanded with target-language hint
//! terms keyed by the inferred intent, improving lexical recall.

use crate::intent::QueryIntent;
use crate::lexical;

/// Target-language hint terms per intent.
const HINT_TERMS: &[(QueryIntent, &[&str])] = &[
    (
        QueryIntent::Admission,
        &["поступление", "прием", "абитуриент", "зачисление"],
    ),
    (
        QueryIntent::Documents,
        &["документы", "справка", "аттестат", "заявление"],
    ),
    (
        QueryIntent::Integrity,
        &["плагиат", "академическая", "честность"],
    ),
    (
        QueryIntent::Scholarship,
        &["стипендия", "грант", "оплата", "обучение"],
    ),
    (
        QueryIntent::Infrastructure,
        &["общежитие", "кампус", "библиотека"],
    ),
    (
        QueryIntent::Regulations,
        &["правила", "положение", "устав"],
    ),
];

/// Cap on appended hint terms, to avoid drowning the original query.
const MAX_HINTS: usize = 4;

/// Expand a Latin-script query with target-language hints for its intent.
///
/// Returns the query unchanged when it is not Latin-script, the intent is
/// general, or no hints are configured for the intent.
pub fn expand_query(query: &str, intent: QueryIntent) -> String {
    if !lexical::is_latin_query(query) {
        return query.to_string();
    }

    let hints: Vec<&str> = HINT_TERMS
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, terms)| terms.iter().copied().take(MAX_HINTS).collect())
        .unwrap_or_default();

    if hints.is_empty() {
        return query.to_string();
    }

    tracing::debug!(?intent, hints = hints.len(), "expanded cross-language query");
    format!("{} {}", query, hints.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_query_gains_hints() {
        let expanded = expand_query("admission deadline", QueryIntent::Admission);
        assert!(expanded.contains("поступление"));
        assert!(expanded.starts_with("admission deadline"));
    }

    #[test]
    fn non_latin_query_is_untouched() {
        let q = "какие правила поступления";
        assert_eq!(expand_query(q, QueryIntent::Admission), q);
    }

    #[test]
    fn general_intent_is_untouched() {
        assert_eq!(
            expand_query("hello there", QueryIntent::General),
            "hello there"
        );
    }
}
