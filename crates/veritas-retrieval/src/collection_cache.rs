//! Collection name → id resolution cache.
//!
//! Owned by the serving layer that fronts the evaluator: it resolves
//! user-facing collection names to store ids once and passes the resolved
//! id down; the evaluation pipeline itself only ever sees resolved ids.
//!
//! An explicit object shared across concurrent evaluations, not ambient
//! global state. Values are idempotent mappings, so racing inserts of the
//! same key are last-writer-wins by design.

use std::future::Future;

use dashmap::DashMap;

use veritas_core::errors::{VeritasError, VeritasResult};

/// Concurrent name → collection-id cache.
#[derive(Debug, Default)]
pub struct CollectionCache {
    map: DashMap<String, String>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached id for a collection name, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.map.get(name).map(|v| v.clone())
    }

    /// Resolve a collection name through the cache, calling `resolve` on a
    /// miss and storing the result. Concurrent misses on the same key may
    /// both resolve; the last writer wins.
    pub async fn get_or_resolve<F, Fut>(&self, name: &str, resolve: F) -> VeritasResult<String>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = VeritasResult<String>>,
    {
        if name.is_empty() {
            return Err(VeritasError::EmptyCollection);
        }
        if let Some(id) = self.get(name) {
            return Ok(id);
        }

        let id = resolve(name.to_string()).await?;
        self.map.insert(name.to_string(), id.clone());
        tracing::debug!(name, id = %id, "cached collection id");
        Ok(id)
    }

    /// Number of cached mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_once_then_hits_cache() {
        let cache = CollectionCache::new();
        let id = cache
            .get_or_resolve("handbook", |_| async { Ok("col-1".to_string()) })
            .await
            .unwrap();
        assert_eq!(id, "col-1");

        // Second call must not invoke the resolver.
        let id = cache
            .get_or_resolve("handbook", |_| async {
                Err(VeritasError::UnreachableStore {
                    reason: "must not be called".into(),
                })
            })
            .await
            .unwrap();
        assert_eq!(id, "col-1");
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let cache = CollectionCache::new();
        let err = cache
            .get_or_resolve("", |_| async { Ok("x".to_string()) })
            .await
            .unwrap_err();
        assert!(matches!(err, VeritasError::EmptyCollection));
    }
}
