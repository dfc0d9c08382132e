//! Ranker pipeline: filters, version preference, denoising, scoring order,
//! truncation.

use serde_json::json;

use veritas_core::config::RetrievalConfig;
use veritas_core::models::RetrievedChunk;
use veritas_core::traits::SearchHit;
use veritas_retrieval::{RankFilters, Ranker};

fn chunk(id: &str, text: &str, distance: f64, metadata: serde_json::Value) -> RetrievedChunk {
    RetrievedChunk::from_search_hit(SearchHit {
        id: id.to_string(),
        text: text.to_string(),
        distance,
        metadata,
    })
}

fn prose(topic: &str) -> String {
    format!("The university regulations describe {topic} in detail, including deadlines and responsible offices.")
}

fn default_ranker() -> Ranker {
    Ranker::new(RetrievalConfig::default())
}

fn filters(top_k: usize) -> RankFilters {
    RankFilters {
        top_k,
        ..Default::default()
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let ranked = default_ranker().rank(Vec::new(), "admission deadline", &filters(5));
    assert!(ranked.is_empty());
}

#[test]
fn year_filter_is_exact() {
    let chunks = vec![
        chunk("rules_2022_chunk0", &prose("submission"), 0.1, json!({})),
        chunk("rules_2024_chunk0", &prose("submission"), 0.2, json!({})),
    ];
    let mut f = filters(5);
    f.year = Some(2022);
    let ranked = default_ranker().rank(chunks, "submission rules", &f);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].document_year, Some(2022));
}

#[test]
fn document_type_filter_is_case_insensitive_with_category_fallback() {
    let chunks = vec![
        chunk(
            "a_chunk0",
            &prose("admission"),
            0.1,
            json!({"document_type": "Regulations"}),
        ),
        chunk(
            "b_chunk0",
            &prose("admission"),
            0.1,
            json!({"category": "regulations"}),
        ),
        chunk(
            "c_chunk0",
            &prose("admission"),
            0.1,
            json!({"document_type": "faq"}),
        ),
    ];
    let mut f = filters(5);
    f.document_type = Some("REGULATIONS".to_string());
    let ranked = default_ranker().rank(chunks, "admission", &f);
    let ids: Vec<_> = ranked.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a_chunk0", "b_chunk0"]);
}

#[test]
fn without_year_filter_newest_version_wins_but_undated_survive() {
    let chunks = vec![
        chunk("rules_2022_chunk0", &prose("fees"), 0.05, json!({})),
        chunk("rules_2024_chunk0", &prose("fees"), 0.3, json!({})),
        chunk("glossary_chunk0", &prose("terminology"), 0.4, json!({})),
    ];
    let ranked = default_ranker().rank(chunks, "fee rules", &filters(5));
    let ids: Vec<_> = ranked.iter().map(|c| c.id.as_str()).collect();
    assert!(!ids.contains(&"rules_2022_chunk0"));
    assert!(ids.contains(&"rules_2024_chunk0"));
    assert!(ids.contains(&"glossary_chunk0"));
}

#[test]
fn noise_chunks_are_dropped() {
    let chunks = vec![
        chunk("noise_chunk0", "...---...---...!!!", 0.01, json!({})),
        chunk("real_chunk0", &prose("scholarships"), 0.2, json!({})),
    ];
    let ranked = default_ranker().rank(chunks, "scholarship rules", &filters(5));
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "real_chunk0");
}

#[test]
fn denoising_never_empties_the_result() {
    let chunks = vec![
        chunk("noise_a_chunk0", "### --- ###", 0.1, json!({})),
        chunk("noise_b_chunk0", "!!!", 0.2, json!({})),
    ];
    let ranked = default_ranker().rank(chunks, "anything", &filters(5));
    assert_eq!(ranked.len(), 2);
}

#[test]
fn lexical_overlap_outranks_distance_ties() {
    let chunks = vec![
        chunk("offtopic_chunk0", &prose("parking permits"), 0.2, json!({})),
        chunk(
            "ontopic_chunk0",
            "Scholarship applications open in March; the stipend committee reviews them monthly.",
            0.2,
            json!({}),
        ),
    ];
    let ranked = default_ranker().rank(chunks, "scholarship stipend", &filters(2));
    assert_eq!(ranked[0].id, "ontopic_chunk0");
}

#[test]
fn category_match_boosts_intent_aligned_chunks() {
    let chunks = vec![
        chunk(
            "general_chunk0",
            &prose("the layout of campus buildings"),
            0.2,
            json!({"category": "infrastructure"}),
        ),
        chunk(
            "admission_chunk0",
            &prose("the structure of committees"),
            0.2,
            json!({"category": "admission"}),
        ),
    ];
    let ranked = default_ranker().rank(chunks, "how to apply for admission", &filters(2));
    assert_eq!(ranked[0].id, "admission_chunk0");
}

#[test]
fn near_duplicates_are_penalized() {
    let text = prose("identical content");
    let chunks = vec![
        chunk("first_chunk0", &text, 0.10, json!({})),
        chunk("copy_chunk0", &text, 0.11, json!({})),
        chunk("other_chunk0", &prose("different content"), 0.12, json!({})),
    ];
    let ranked = default_ranker().rank(chunks, "identical content", &filters(3));
    // The duplicate falls behind the distinct chunk despite closer distance.
    assert_eq!(ranked[0].id, "first_chunk0");
    assert_eq!(ranked[1].id, "other_chunk0");
    assert_eq!(ranked[2].id, "copy_chunk0");
}

#[test]
fn results_truncate_to_top_k() {
    let chunks: Vec<_> = (0..10)
        .map(|i| chunk(&format!("doc{i}_chunk0"), &prose("many topics"), 0.1 + i as f64 * 0.01, json!({})))
        .collect();
    let ranked = default_ranker().rank(chunks, "many topics", &filters(3));
    assert_eq!(ranked.len(), 3);
}

#[test]
fn exact_score_ties_keep_original_order() {
    // Equal distances, zero lexical overlap, no categories: the blended
    // scores tie exactly and the input order must survive the sort.
    let chunks = vec![
        chunk("first_chunk0", &prose("library opening hours"), 0.25, json!({})),
        chunk("second_chunk0", &prose("dormitory room assignments"), 0.25, json!({})),
    ];
    let ranked = default_ranker().rank(chunks, "zzz qqq xxx", &filters(2));
    assert_eq!(ranked[0].id, "first_chunk0");
    assert_eq!(ranked[1].id, "second_chunk0");
}
