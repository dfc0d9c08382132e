//! Staged reranking pipeline: metadata filter → version preference →
//! denoise → blended scoring → stable sort → truncate.

use tracing::{debug, info};

use veritas_core::config::RetrievalConfig;
use veritas_core::models::RetrievedChunk;

use crate::denoise;
use crate::intent::{self, QueryIntent};
use crate::lexical;

/// Explicit retrieval filters resolved at the API boundary.
#[derive(Debug, Clone, Default)]
pub struct RankFilters {
    /// Keep only chunks from documents of this exact year.
    pub year: Option<i32>,
    /// Keep only chunks of this document type (case-insensitive; chunk
    /// category is the fallback field).
    pub document_type: Option<String>,
    /// Final result length.
    pub top_k: usize,
}

impl RankFilters {
    /// Whether any explicit filter is set.
    pub fn any_active(&self) -> bool {
        self.year.is_some() || self.document_type.is_some()
    }
}

/// Text shorter than this (in content tokens) attracts the low-info
/// penalty even when it survived denoising.
const LOW_INFO_TOKEN_COUNT: usize = 8;

/// Length of the compacted text prefix used for near-duplicate detection.
const DUPLICATE_PREFIX_CHARS: usize = 120;

/// The retrieval ranker.
pub struct Ranker {
    config: RetrievalConfig,
}

impl Ranker {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Neighbor count to request from the vector store. Widened beyond
    /// `top_k` whenever a filter or rerank signal is active, so the pool
    /// does not starve after filtering; bounded by `max_pool`.
    pub fn widened_pool(&self, top_k: usize, filters: &RankFilters) -> usize {
        let widened = if filters.any_active() || self.config.pool_multiplier > 1 {
            top_k.saturating_mul(self.config.pool_multiplier)
        } else {
            top_k
        };
        widened.clamp(top_k, self.config.max_pool.max(top_k))
    }

    /// Rank raw hits for a query. Returns at most `filters.top_k` chunks,
    /// best first. Empty input yields empty output, never an error.
    pub fn rank(
        &self,
        raw: Vec<RetrievedChunk>,
        query: &str,
        filters: &RankFilters,
    ) -> Vec<RetrievedChunk> {
        if raw.is_empty() {
            return Vec::new();
        }
        let initial = raw.len();

        // Stage 1: metadata filters.
        let filtered = apply_filters(raw, filters);

        // Stage 2: version preference — without an explicit year, keep only
        // the newest dated documents, but never discard undated evidence.
        let preferred = if filters.year.is_none() {
            prefer_latest_version(filtered)
        } else {
            filtered
        };

        // Stage 3: denoise (skips itself rather than emptying the pool).
        let clean = denoise::denoise(preferred);

        // Stage 4: blended scoring.
        let query_intent = intent::classify(query);
        let query_tokens = lexical::tokenize(query);
        debug!(?query_intent, tokens = query_tokens.len(), "scoring candidates");

        let mut scored = self.score_candidates(clean, &query_tokens, query_intent, filters);

        // Stage 5: stable sort — score desc, then raw distance asc, then
        // original order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    a.chunk
                        .distance
                        .partial_cmp(&b.chunk.distance)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
                .then(a.index.cmp(&b.index))
        });

        // Stage 6: truncate.
        scored.truncate(filters.top_k);

        info!(
            initial,
            ranked = scored.len(),
            top_k = filters.top_k,
            "ranking complete"
        );

        scored.into_iter().map(|s| s.chunk).collect()
    }

    fn score_candidates(
        &self,
        chunks: Vec<RetrievedChunk>,
        query_tokens: &[String],
        query_intent: QueryIntent,
        filters: &RankFilters,
    ) -> Vec<ScoredChunk> {
        let cfg = &self.config;
        let mut seen_prefixes: Vec<String> = Vec::new();
        let mut category_rank = 0usize;

        chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let semantic = chunk.confidence;
                let sample = lexical::chunk_sample(&chunk);
                let lexical_overlap = lexical::overlap(query_tokens, &sample);

                let category = chunk.document_type.as_deref();
                let matches_intent = category.is_some_and(|c| query_intent.matches_category(c));

                let boost = if matches_intent {
                    let b = intent::category_boost(
                        cfg.category_boost,
                        cfg.category_boost_decay,
                        category_rank,
                    );
                    category_rank += 1;
                    b
                } else {
                    0.0
                };

                // Off-category penalty only applies when the caller did not
                // pin a document type explicitly.
                let off_category = if filters.document_type.is_none()
                    && query_intent != QueryIntent::General
                    && category.is_some()
                    && !matches_intent
                {
                    cfg.off_category_penalty
                } else {
                    0.0
                };

                let prefix: String = lexical::normalize(&chunk.text)
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .take(DUPLICATE_PREFIX_CHARS)
                    .collect();
                let duplicate = if !prefix.is_empty() && seen_prefixes.contains(&prefix) {
                    cfg.duplicate_penalty
                } else {
                    seen_prefixes.push(prefix);
                    0.0
                };

                let low_info = if text_token_count(&chunk.text) < LOW_INFO_TOKEN_COUNT {
                    cfg.low_info_penalty
                } else {
                    0.0
                };

                let score = cfg.semantic_weight * semantic
                    + cfg.lexical_weight * lexical_overlap
                    + boost
                    - duplicate
                    - low_info
                    - off_category;

                ScoredChunk {
                    chunk,
                    score,
                    index,
                }
            })
            .collect()
    }
}

struct ScoredChunk {
    chunk: RetrievedChunk,
    score: f64,
    index: usize,
}

fn text_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Stage 1: exact year, case-insensitive document type (category fallback).
fn apply_filters(chunks: Vec<RetrievedChunk>, filters: &RankFilters) -> Vec<RetrievedChunk> {
    chunks
        .into_iter()
        .filter(|c| match filters.year {
            Some(year) => c.document_year == Some(year),
            None => true,
        })
        .filter(|c| match &filters.document_type {
            Some(doc_type) => c
                .document_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(doc_type)),
            None => true,
        })
        .collect()
}

/// Stage 2: among dated chunks keep only those at the maximum year, then
/// concatenate every year-less chunk. Undated evidence is never discarded.
fn prefer_latest_version(chunks: Vec<RetrievedChunk>) -> Vec<RetrievedChunk> {
    let max_year = chunks.iter().filter_map(|c| c.document_year).max();
    let Some(max_year) = max_year else {
        return chunks;
    };

    chunks
        .into_iter()
        .filter(|c| c.document_year.is_none() || c.document_year == Some(max_year))
        .collect()
}
