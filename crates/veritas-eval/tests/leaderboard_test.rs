//! Multi-model leaderboard: shared benchmark id and latency-adjusted
//! ranking.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{hit, MemoryStore, MockEmbedder, MockSearch, CITED_ANSWER};
use veritas_core::config::{EvalConfig, RetrievalConfig, TrustConfig};
use veritas_core::errors::VeritasResult;
use veritas_core::traits::TextGenerator;
use veritas_eval::leaderboard::run_leaderboard;
use veritas_eval::{BatchEvaluator, DatasetItem, EvalOptions, QueryEvaluator};

/// Generator whose latency depends on the requested model.
struct PerModelGenerator;

#[async_trait]
impl TextGenerator for PerModelGenerator {
    async fn generate(&self, _prompt: &str, model: Option<&str>) -> VeritasResult<String> {
        let delay = match model {
            Some("slow-model") => Duration::from_millis(120),
            _ => Duration::from_millis(5),
        };
        tokio::time::sleep(delay).await;
        Ok(CITED_ANSWER.to_string())
    }
}

fn items() -> Vec<DatasetItem> {
    vec![
        DatasetItem {
            query: "admission deadline".to_string(),
            ground_truth: None,
            relevant_ids: Vec::new(),
            year: None,
            document_type: None,
        },
        DatasetItem {
            query: "scholarship rules".to_string(),
            ground_truth: None,
            relevant_ids: Vec::new(),
            year: None,
            document_type: None,
        },
    ]
}

#[tokio::test]
async fn ranks_models_by_latency_adjusted_trust() {
    let store = MemoryStore::new();
    let evaluator = QueryEvaluator::new(
        Arc::new(PerModelGenerator),
        Arc::new(MockEmbedder),
        Arc::new(MockSearch::with_hits(vec![hit("rules_2024_chunk0", 0.0)])),
        RetrievalConfig::default(),
        TrustConfig::default(),
        EvalConfig::default(),
    );
    let batch = BatchEvaluator::new(evaluator, store.clone());

    let models = vec!["slow-model".to_string(), "fast-model".to_string()];
    let board = run_leaderboard(&batch, "col", &items(), &models, &EvalOptions::default())
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 2);
    // Same trust for both models; the faster one wins on adjusted score.
    assert_eq!(board.entries[0].model, "fast-model");
    assert!(board.entries[0].adjusted_score > board.entries[1].adjusted_score);

    // Both runs persisted under the shared benchmark id.
    let records = store.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.benchmark_id == board.benchmark_id));
    assert_eq!(records[0].dataset_hash, records[1].dataset_hash);
}
