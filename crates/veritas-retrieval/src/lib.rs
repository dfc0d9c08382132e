//! # veritas-retrieval
//!
//! Retrieval ranking: takes raw nearest-neighbor hits and a query, applies
//! metadata filters, prefers the newest document versions, drops noise
//! chunks, and reorders by a blended semantic + lexical + category score.

pub mod collection_cache;
pub mod denoise;
pub mod expansion;
pub mod intent;
pub mod lexical;
pub mod ranker;

pub use collection_cache::CollectionCache;
pub use intent::QueryIntent;
pub use ranker::{RankFilters, Ranker};
