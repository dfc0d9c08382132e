//! Default values for all configuration structs.
//!
//! The trust-scoring constants (caps, compensation thresholds, cold-start
//! cutoff) are heuristics carried over from production tuning; they are kept
//! here as named defaults so deployments can override them via TOML.

// ── Retrieval ──
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_POOL_MULTIPLIER: usize = 3;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.68;
pub const DEFAULT_LEXICAL_WEIGHT: f64 = 0.26;
pub const DEFAULT_CATEGORY_BOOST: f64 = 0.12;
pub const DEFAULT_CATEGORY_BOOST_DECAY: f64 = 0.30;
pub const DEFAULT_DUPLICATE_PENALTY: f64 = 0.15;
pub const DEFAULT_LOW_INFO_PENALTY: f64 = 0.08;
pub const DEFAULT_OFF_CATEGORY_PENALTY: f64 = 0.05;

// ── Trust scoring ──
pub const DEFAULT_FAITHFULNESS_WEIGHT: f64 = 0.4;
pub const DEFAULT_PRECISION_WEIGHT: f64 = 0.3;
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.3;

pub const DEFAULT_LIGHT_RETRIEVAL_WEIGHT: f64 = 0.60;
pub const DEFAULT_LIGHT_COVERAGE_WEIGHT: f64 = 0.25;
pub const DEFAULT_LIGHT_VALIDITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_LIGHT_CITATION_CAP: f64 = 0.35;

pub const DEFAULT_CITATION_COVERAGE_WEIGHT: f64 = 0.7;
pub const DEFAULT_CITATION_VALIDITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_BASE_BLEND_WEIGHT: f64 = 0.8;
pub const DEFAULT_CITATION_BLEND_WEIGHT: f64 = 0.2;
pub const DEFAULT_FULL_CITATION_CAP: f64 = 0.60;

pub const DEFAULT_COMPENSATION_FAITHFULNESS: f64 = 0.90;
pub const DEFAULT_COMPENSATION_SIMILARITY: f64 = 0.75;
pub const DEFAULT_COMPENSATION_FLOOR: f64 = 0.75;

pub const DEFAULT_SIMILARITY_WITHOUT_TRUTH: f64 = 0.5;
pub const DEFAULT_FAITHFULNESS_WITHOUT_JUDGE: f64 = 0.5;

// ── Evaluation ──
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
pub const DEFAULT_COLD_START_THRESHOLD_MS: u64 = 30_000;
