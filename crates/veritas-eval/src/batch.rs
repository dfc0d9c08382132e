//! Batch evaluation: bounded concurrency with submission-order results,
//! per-item failure isolation, aggregate statistics, and guarded
//! persistence of a benchmark record.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::{
    dataset_hash, BatchStatistics, BenchmarkRecord, QueryEvaluation, TrustWeights,
};
use veritas_core::traits::BenchmarkStore;

use crate::metrics;
use crate::query_eval::{EvalOptions, QueryEvaluator};

/// One dataset entry for batch evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetItem {
    pub query: String,
    #[serde(default)]
    pub ground_truth: Option<String>,
    /// Relevant document filenames (with or without `.txt`).
    #[serde(default)]
    pub relevant_ids: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub document_type: Option<String>,
}

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// One entry per dataset item, in submission order.
    pub results: Vec<QueryEvaluation>,
    pub statistics: BatchStatistics,
    /// The persisted record, None when the persistence guard rejected it.
    pub record: Option<BenchmarkRecord>,
}

/// Runs a dataset through the query evaluator under a concurrency bound.
pub struct BatchEvaluator {
    evaluator: QueryEvaluator,
    store: Arc<dyn BenchmarkStore>,
}

impl BatchEvaluator {
    pub fn new(evaluator: QueryEvaluator, store: Arc<dyn BenchmarkStore>) -> Self {
        Self { evaluator, store }
    }

    pub fn evaluator(&self) -> &QueryEvaluator {
        &self.evaluator
    }

    /// Evaluate a dataset. `benchmark_id` groups records of one leaderboard
    /// run; pass a fresh id for standalone batches.
    ///
    /// Items are admitted FIFO with at most `max_concurrency` in flight;
    /// results come back in submission order. A failing item never aborts
    /// the batch — it becomes a zero-score result with the error captured.
    pub async fn run(
        &self,
        collection_id: &str,
        dataset: &[DatasetItem],
        base_opts: &EvalOptions,
        benchmark_id: &str,
    ) -> VeritasResult<BatchOutcome> {
        if dataset.is_empty() {
            return Err(VeritasError::EmptyDataset);
        }

        let concurrency = self.evaluator.eval_config().max_concurrency.max(1);
        let started = Instant::now();

        let results: Vec<QueryEvaluation> = stream::iter(dataset.iter())
            .map(|item| {
                let opts = EvalOptions {
                    ground_truth: item.ground_truth.clone(),
                    relevant_ids: item.relevant_ids.clone(),
                    year: item.year.or(base_opts.year),
                    document_type: item.document_type.clone().or_else(|| {
                        base_opts.document_type.clone()
                    }),
                    ..base_opts.clone()
                };
                async move {
                    match self.evaluator.evaluate(collection_id, &item.query, &opts).await {
                        Ok(result) => result,
                        Err(err) => {
                            warn!(query = %item.query, error = %err, "item failed, isolating");
                            QueryEvaluation::failed(&item.query, err.to_string())
                        }
                    }
                }
            })
            .buffered(concurrency)
            .collect()
            .await;

        let total_ms = started.elapsed().as_millis() as u64;
        let statistics = self.compute_statistics(&results, concurrency, total_ms);

        info!(
            total = statistics.total,
            succeeded = statistics.succeeded,
            mean_trust = statistics.mean_trust,
            total_ms,
            "batch complete"
        );

        let record = self
            .persist(dataset, &statistics, base_opts, benchmark_id)
            .await?;

        Ok(BatchOutcome {
            results,
            statistics,
            record,
        })
    }

    fn compute_statistics(
        &self,
        results: &[QueryEvaluation],
        concurrency: usize,
        total_ms: u64,
    ) -> BatchStatistics {
        let ok: Vec<&QueryEvaluation> = results.iter().filter(|r| r.error.is_none()).collect();

        let collect = |f: &dyn Fn(&QueryEvaluation) -> Option<f64>| -> Vec<f64> {
            ok.iter().filter_map(|r| f(r)).collect()
        };

        let trust_scores = collect(&|r| Some(r.trust.score));
        let faithfulness = collect(&|r| r.faithfulness);
        let precision = collect(&|r| Some(r.precision_at_k));
        let recall = collect(&|r| Some(r.recall_at_k));
        let similarity = collect(&|r| r.similarity);
        let coverage = collect(&|r| Some(r.citations.coverage));

        let generation: Vec<u64> = ok.iter().map(|r| r.timings.generation_ms()).collect();
        let evaluation: Vec<u64> = ok.iter().map(|r| r.timings.evaluation_ms()).collect();

        let mut diagnosis_counts: BTreeMap<String, usize> = BTreeMap::new();
        for r in results {
            *diagnosis_counts.entry(r.diagnosis.tag().to_string()).or_default() += 1;
        }

        let trust_cfg = self.evaluator.trust_config();

        BatchStatistics {
            total: results.len(),
            succeeded: ok.len(),
            failed: results.len() - ok.len(),
            mean_trust: metrics::mean(&trust_scores),
            mean_faithfulness: metrics::mean(&faithfulness),
            mean_precision: metrics::mean(&precision),
            mean_recall: metrics::mean(&recall),
            mean_similarity: metrics::mean(&similarity),
            mean_coverage: metrics::mean(&coverage),
            p95_generation_ms: metrics::p95(&generation),
            p95_evaluation_ms: metrics::p95(&evaluation),
            avg_generation_ms: metrics::mean(
                &generation.iter().map(|&v| v as f64).collect::<Vec<_>>(),
            ),
            avg_evaluation_ms: metrics::mean(
                &evaluation.iter().map(|&v| v as f64).collect::<Vec<_>>(),
            ),
            total_ms,
            cold_starts: ok.iter().filter(|r| r.cold_start).count(),
            diagnosis_counts,
            concurrency,
            weights: TrustWeights {
                faithfulness: trust_cfg.faithfulness_weight,
                precision: trust_cfg.precision_weight,
                similarity: trust_cfg.similarity_weight,
            },
            evaluation_version: self.evaluator.eval_config().evaluation_version.clone(),
        }
    }

    /// Persistence guard: a record is written only for a non-degenerate run.
    /// Guards against silently logging a broken run as a zero-score
    /// baseline.
    async fn persist(
        &self,
        dataset: &[DatasetItem],
        statistics: &BatchStatistics,
        opts: &EvalOptions,
        benchmark_id: &str,
    ) -> VeritasResult<Option<BenchmarkRecord>> {
        if statistics.total_ms == 0 {
            warn!("persistence guard: zero total latency, record rejected");
            return Ok(None);
        }
        if statistics.mean_trust == 0.0 && statistics.succeeded > 0 {
            warn!("persistence guard: zero trust with successful items, record rejected");
            return Ok(None);
        }

        let record = BenchmarkRecord {
            benchmark_id: benchmark_id.to_string(),
            timestamp: chrono::Utc::now(),
            dataset_hash: dataset_hash(&dataset),
            generation_model: opts
                .generation_model
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            evaluation_model: opts
                .evaluation_model
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            statistics: statistics.clone(),
        };
        self.store.append(&record).await?;
        Ok(Some(record))
    }
}
