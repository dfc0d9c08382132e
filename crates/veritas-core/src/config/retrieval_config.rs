use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Retrieval ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks returned after ranking.
    pub top_k: usize,
    /// Pool widening factor applied when any filter or rerank signal is
    /// active: the vector store is asked for `top_k * pool_multiplier`
    /// neighbors so filtering does not starve the final cut.
    pub pool_multiplier: usize,
    /// Hard ceiling on the widened pool.
    pub max_pool: usize,
    /// Weight of the semantic score (1 − distance, clamped).
    pub semantic_weight: f64,
    /// Weight of the query/chunk lexical overlap.
    pub lexical_weight: f64,
    /// Boost for chunks whose category matches the inferred query intent.
    pub category_boost: f64,
    /// Per-rank decay applied to the category boost.
    pub category_boost_decay: f64,
    /// Penalty for near-duplicate chunks.
    pub duplicate_penalty: f64,
    /// Penalty for low-information chunks that survived denoising.
    pub low_info_penalty: f64,
    /// Penalty for chunks outside the inferred intent when no explicit
    /// document type filter was requested.
    pub off_category_penalty: f64,
    /// Whether cross-language query expansion is enabled.
    pub query_expansion: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            pool_multiplier: defaults::DEFAULT_POOL_MULTIPLIER,
            max_pool: constants::MAX_CANDIDATE_POOL,
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            lexical_weight: defaults::DEFAULT_LEXICAL_WEIGHT,
            category_boost: defaults::DEFAULT_CATEGORY_BOOST,
            category_boost_decay: defaults::DEFAULT_CATEGORY_BOOST_DECAY,
            duplicate_penalty: defaults::DEFAULT_DUPLICATE_PENALTY,
            low_info_penalty: defaults::DEFAULT_LOW_INFO_PENALTY,
            off_category_penalty: defaults::DEFAULT_OFF_CATEGORY_PENALTY,
            query_expansion: true,
        }
    }
}
