//! Query intent inference and the intent → category boost matrix.
//!
//! The intent is inferred from keyword hits over the normalized query and
//! drives two rerank signals: a rank-diminishing boost for chunks whose
//! category matches the intent, and a penalty for off-category chunks when
//! no explicit document-type filter was requested.

use crate::lexical;

/// Coarse topic of a user query over the institutional corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryIntent {
    Admission,
    Documents,
    Integrity,
    Scholarship,
    Infrastructure,
    Regulations,
    /// No keyword matched; category signals stay neutral.
    General,
}

impl QueryIntent {
    /// Category label this intent corresponds to in chunk metadata.
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Self::Admission => Some("admission"),
            Self::Documents => Some("documents"),
            Self::Integrity => Some("integrity"),
            Self::Scholarship => Some("scholarship"),
            Self::Infrastructure => Some("infrastructure"),
            Self::Regulations => Some("regulations"),
            Self::General => None,
        }
    }

    /// Case-insensitive match of a chunk category against this intent.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category()
            .is_some_and(|c| category.eq_ignore_ascii_case(c))
    }
}

/// Keyword table: intent ← trigger terms (already lowercase, unfolded
/// forms handled by the lexical normalizer).
const KEYWORDS: &[(QueryIntent, &[&str])] = &[
    (
        QueryIntent::Admission,
        &[
            "admission", "admissions", "apply", "enroll", "enrollment", "entrance", "intake",
            "applicant",
        ],
    ),
    (
        QueryIntent::Documents,
        &[
            "document",
            "documents",
            "certificate",
            "transcript",
            "diploma",
            "form",
            "reference",
        ],
    ),
    (
        QueryIntent::Integrity,
        &[
            "plagiarism",
            "cheating",
            "integrity",
            "misconduct",
            "ethics",
            "honesty",
        ],
    ),
    (
        QueryIntent::Scholarship,
        &[
            "scholarship",
            "stipend",
            "grant",
            "tuition",
            "fee",
            "fees",
            "financial",
        ],
    ),
    (
        QueryIntent::Infrastructure,
        &[
            "campus",
            "dormitory",
            "hostel",
            "library",
            "laboratory",
            "facility",
            "facilities",
        ],
    ),
    (
        QueryIntent::Regulations,
        &[
            "rule",
            "rules",
            "regulation",
            "regulations",
            "policy",
            "charter",
            "statute",
        ],
    ),
];

/// Infer the intent of a query by keyword hit count. Ties resolve to the
/// first intent in table order; zero hits means [`QueryIntent::General`].
pub fn classify(query: &str) -> QueryIntent {
    let tokens = lexical::tokenize(query);
    let mut best = QueryIntent::General;
    let mut best_hits = 0usize;

    for (intent, keywords) in KEYWORDS {
        let hits = tokens
            .iter()
            .filter(|t| keywords.contains(&t.as_str()))
            .count();
        if hits > best_hits {
            best = *intent;
            best_hits = hits;
        }
    }

    best
}

/// Trigger terms for an intent, used by cross-language query expansion.
pub fn keywords(intent: QueryIntent) -> &'static [&'static str] {
    KEYWORDS
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, kw)| *kw)
        .unwrap_or(&[])
}

/// Rank-diminishing category boost: full boost at rank 0, decaying as
/// `base / (1 + decay * rank)`.
pub fn category_boost(base: f64, decay: f64, rank: usize) -> f64 {
    base / (1.0 + decay * rank as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword_majority() {
        assert_eq!(
            classify("what documents do I need for admission enrollment"),
            QueryIntent::Admission
        );
        assert_eq!(classify("plagiarism policy"), QueryIntent::Integrity);
        assert_eq!(classify("weather tomorrow"), QueryIntent::General);
    }

    #[test]
    fn boost_decays_with_rank() {
        let b0 = category_boost(0.12, 0.3, 0);
        let b3 = category_boost(0.12, 0.3, 3);
        assert!(b0 > b3);
        assert_eq!(b0, 0.12);
    }
}
