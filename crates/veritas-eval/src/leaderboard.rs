//! Multi-model leaderboard: one batch per candidate generation model under
//! a shared benchmark id, ranked by a latency-adjusted trust score.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use veritas_core::errors::VeritasResult;
use veritas_core::models::BatchStatistics;

use crate::batch::{BatchEvaluator, DatasetItem};
use crate::query_eval::EvalOptions;

/// Latency cost divisor: one combined millisecond of average latency costs
/// 1/100000 of a trust point.
const LATENCY_COST_DIVISOR: f64 = 100_000.0;

/// One model's leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub model: String,
    pub trust: f64,
    /// `trust − (avg_generation + avg_evaluation) / 100000`.
    pub adjusted_score: f64,
    pub statistics: Option<BatchStatistics>,
    /// Set when the whole batch failed for this model.
    pub error: Option<String>,
}

/// Ranked outcome of a multi-model run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Shared across every model's benchmark record.
    pub benchmark_id: String,
    /// Entries ordered best-first; ties keep candidate order.
    pub entries: Vec<LeaderboardEntry>,
}

/// Run the batch once per candidate model and rank the outcomes.
///
/// Models run sequentially: their benchmark records serialize through the
/// same in-process store, and stable tie order falls out of the candidate
/// order. A model whose entire batch fails is kept on the board with a
/// zero score and the error captured.
pub async fn run_leaderboard(
    batch: &BatchEvaluator,
    collection_id: &str,
    dataset: &[DatasetItem],
    models: &[String],
    base_opts: &EvalOptions,
) -> VeritasResult<Leaderboard> {
    let benchmark_id = Uuid::new_v4().to_string();
    let mut entries = Vec::with_capacity(models.len());

    for model in models {
        let opts = EvalOptions {
            generation_model: Some(model.clone()),
            ..base_opts.clone()
        };

        match batch.run(collection_id, dataset, &opts, &benchmark_id).await {
            Ok(outcome) => {
                let stats = outcome.statistics;
                let latency_cost =
                    (stats.avg_generation_ms + stats.avg_evaluation_ms) / LATENCY_COST_DIVISOR;
                entries.push(LeaderboardEntry {
                    model: model.clone(),
                    trust: stats.mean_trust,
                    adjusted_score: stats.mean_trust - latency_cost,
                    statistics: Some(stats),
                    error: None,
                });
            }
            Err(err) => {
                warn!(model, error = %err, "leaderboard batch failed for model");
                entries.push(LeaderboardEntry {
                    model: model.clone(),
                    trust: 0.0,
                    adjusted_score: 0.0,
                    statistics: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    // Stable sort keeps candidate order on ties.
    entries.sort_by(|a, b| {
        b.adjusted_score
            .partial_cmp(&a.adjusted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(
        benchmark_id = %benchmark_id,
        models = models.len(),
        winner = entries.first().map(|e| e.model.as_str()).unwrap_or(""),
        "leaderboard complete"
    );

    Ok(Leaderboard {
        benchmark_id,
        entries,
    })
}
