//! # veritas-core
//!
//! Foundation crate for the Veritas trust evaluation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EvalConfig, RetrievalConfig, TrustConfig, VeritasConfig};
pub use errors::{VeritasError, VeritasResult};
pub use models::{
    BatchStatistics, BenchmarkRecord, CitationReport, Diagnosis, QueryEvaluation, RetrievedChunk,
    StageTimings, TrustBreakdown, TrustMode,
};
pub use traits::{BenchmarkStore, Embedder, SearchHit, TextGenerator, VectorSearch};
