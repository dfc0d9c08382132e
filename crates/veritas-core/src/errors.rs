//! Error taxonomy for the evaluation pipeline.
//!
//! Three families: input errors (rejected before any external call),
//! collaborator errors (normalized from the generation/embedding/vector-store
//! clients, fail only the affected item in a batch), and storage errors.
//! Validation-policy outcomes (invalid citations, low coverage) are never
//! errors — they are scored and capped.

/// All errors surfaced by the Veritas core.
#[derive(Debug, thiserror::Error)]
pub enum VeritasError {
    // ── Input errors ──
    #[error("query is empty")]
    EmptyQuery,

    #[error("collection id is empty")]
    EmptyCollection,

    #[error("dataset is empty")]
    EmptyDataset,

    // ── Collaborator errors ──
    #[error("model unreachable: {reason}")]
    UnreachableModel { reason: String },

    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    #[error("embedding input is empty")]
    EmptyEmbedding,

    #[error("collection not found: {collection}")]
    CollectionNotFound { collection: String },

    #[error("vector store unreachable: {reason}")]
    UnreachableStore { reason: String },

    // ── Storage errors ──
    #[error("benchmark store failure: {reason}")]
    Storage { reason: String },

    #[error("benchmark record rejected: {reason}")]
    InvalidRecord { reason: String },
}

impl VeritasError {
    /// Whether this error belongs to the input family — raised before
    /// any external call was made.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuery | Self::EmptyCollection | Self::EmptyDataset
        )
    }
}

/// Convenience alias used across all workspace crates.
pub type VeritasResult<T> = Result<T, VeritasError>;
