//! Value objects flowing through the evaluation pipeline.
//!
//! All entities here are created and consumed within a single evaluation
//! call; only the persisted [`BenchmarkRecord`] outlives its batch.

mod benchmark;
mod chunk;
mod citation;
mod evaluation;
mod statistics;
mod trust;

pub use benchmark::{dataset_hash, BenchmarkRecord};
pub use chunk::RetrievedChunk;
pub use citation::{CitationIssue, CitationReport};
pub use evaluation::{Diagnosis, QueryEvaluation, StageTimings};
pub use statistics::{BatchStatistics, TrustWeights};
pub use trust::{TrustBreakdown, TrustMode};
