//! # veritas-eval
//!
//! The trust evaluation engine: citation validation, two-mode trust
//! scoring, the single-query evaluator state machine, the
//! concurrency-bounded batch evaluator, and the multi-model leaderboard.

pub mod batch;
pub mod citation;
pub mod leaderboard;
pub mod metrics;
pub mod prompts;
pub mod query_eval;
pub mod trust;

pub use batch::{BatchEvaluator, BatchOutcome, DatasetItem};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use query_eval::{EvalOptions, QueryEvaluator};
pub use trust::TrustInputs;
