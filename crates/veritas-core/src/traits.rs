//! Collaborator seams: text generation, embedding, vector search, and the
//! benchmark record store. The core treats all four as black boxes; real
//! clients and in-memory test doubles plug in behind these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::VeritasResult;
use crate::models::BenchmarkRecord;

/// One raw nearest-neighbor hit from the vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
    pub distance: f64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Text generation client.
///
/// Fails with `UnreachableModel` or `ModelNotFound`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`. `model = None` uses the
    /// client's default model.
    async fn generate(&self, prompt: &str, model: Option<&str>) -> VeritasResult<String>;
}

/// Embedding client.
///
/// Fails with `UnreachableModel` or `EmptyEmbedding`.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> VeritasResult<Vec<f32>>;
}

/// Vector store search.
///
/// Fails with `CollectionNotFound` or `UnreachableStore`.
#[async_trait]
pub trait VectorSearch: Send + Sync {
    async fn search(
        &self,
        collection_id: &str,
        vector: &[f32],
        top_k: usize,
    ) -> VeritasResult<Vec<SearchHit>>;
}

/// Append-only benchmark record sink.
///
/// Implementations guarantee at-least-once durability of appended records
/// within one process; cross-process write atomicity is explicitly out of
/// scope.
#[async_trait]
pub trait BenchmarkStore: Send + Sync {
    async fn append(&self, record: &BenchmarkRecord) -> VeritasResult<()>;

    /// All previously persisted records, oldest first.
    async fn history(&self) -> VeritasResult<Vec<BenchmarkRecord>>;
}
