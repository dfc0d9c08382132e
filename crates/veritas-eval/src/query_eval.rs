//! Single-query evaluator: embed → retrieve → generate → validate →
//! (retry once) → score, with per-stage latency capture.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use veritas_core::config::{EvalConfig, RetrievalConfig, TrustConfig};
use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::{
    CitationReport, Diagnosis, QueryEvaluation, RetrievedChunk, StageTimings, TrustBreakdown,
    TrustMode,
};
use veritas_core::traits::{Embedder, TextGenerator, VectorSearch};
use veritas_retrieval::{RankFilters, Ranker};

use crate::citation;
use crate::metrics;
use crate::prompts;
use crate::trust::{self, TrustInputs};

/// Per-query evaluation options, resolved at the API boundary. Callers that
/// only care about `top_k` construct this with `Default` and set one field.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    pub top_k: usize,
    pub year: Option<i32>,
    pub document_type: Option<String>,
    /// Reference answer; enables the similarity signal and full-mode scoring.
    pub ground_truth: Option<String>,
    /// Whether to run the LLM faithfulness judge; enables full-mode scoring.
    pub judge_faithfulness: bool,
    /// Relevant document ids (filenames, `.txt` tolerated) for
    /// precision/recall.
    pub relevant_ids: Vec<String>,
    pub generation_model: Option<String>,
    pub evaluation_model: Option<String>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            top_k: RetrievalConfig::default().top_k,
            year: None,
            document_type: None,
            ground_truth: None,
            judge_faithfulness: false,
            relevant_ids: Vec::new(),
            generation_model: None,
            evaluation_model: None,
        }
    }
}

/// Orchestrates one retrieval → generation → validation → scoring cycle.
pub struct QueryEvaluator {
    generator: Arc<dyn TextGenerator>,
    embedder: Arc<dyn Embedder>,
    search: Arc<dyn VectorSearch>,
    ranker: Ranker,
    trust_config: TrustConfig,
    eval_config: EvalConfig,
}

impl QueryEvaluator {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        embedder: Arc<dyn Embedder>,
        search: Arc<dyn VectorSearch>,
        retrieval_config: RetrievalConfig,
        trust_config: TrustConfig,
        eval_config: EvalConfig,
    ) -> Self {
        Self {
            generator,
            embedder,
            search,
            ranker: Ranker::new(retrieval_config),
            trust_config,
            eval_config,
        }
    }

    pub fn eval_config(&self) -> &EvalConfig {
        &self.eval_config
    }

    pub fn trust_config(&self) -> &TrustConfig {
        &self.trust_config
    }

    /// Evaluate one query against a collection.
    ///
    /// Input errors (empty query/collection) are rejected before any
    /// external call. Collaborator errors propagate to the caller; the
    /// batch evaluator turns them into per-item failures.
    pub async fn evaluate(
        &self,
        collection_id: &str,
        query: &str,
        opts: &EvalOptions,
    ) -> VeritasResult<QueryEvaluation> {
        if query.trim().is_empty() {
            return Err(VeritasError::EmptyQuery);
        }
        if collection_id.is_empty() {
            return Err(VeritasError::EmptyCollection);
        }

        let started = Instant::now();
        let mut timings = StageTimings::default();

        // ── Embed ──
        // Retrieval here is driven by raw query text, so cross-language
        // expansion must run before embedding: the hint terms have to reach
        // the search vector as well as the lexical rerank.
        let stage = Instant::now();
        let search_query = self.expanded_query(query);
        let query_vector = self.embedder.embed(&search_query).await?;
        timings.embed_ms = stage.elapsed().as_millis() as u64;

        // ── Retrieve ──
        let stage = Instant::now();
        let chunks = self
            .retrieve(collection_id, &search_query, &query_vector, opts)
            .await?;
        timings.retrieve_ms = stage.elapsed().as_millis() as u64;

        if chunks.is_empty() {
            debug!(query, "no evidence retrieved, short-circuiting");
            timings.total_ms = started.elapsed().as_millis() as u64;
            return Ok(self.refusal(query, opts, timings));
        }

        // ── Generate ──
        let stage = Instant::now();
        let prompt = prompts::answer_prompt(query, &chunks);
        let mut answer = self
            .generator
            .generate(&prompt, opts.generation_model.as_deref())
            .await?;
        timings.generate_ms = stage.elapsed().as_millis() as u64;

        // ── Validate citations, retry exactly once ──
        let stage = Instant::now();
        let mut report = citation::validate(&answer, chunks.len());
        timings.validate_ms = stage.elapsed().as_millis() as u64;

        if !report.is_valid {
            debug!(issues = ?report.issues, "citations invalid, regenerating once");
            let stage = Instant::now();
            let retry_prompt = prompts::regeneration_prompt(query, &chunks, &answer, &report);
            answer = self
                .generator
                .generate(&retry_prompt, opts.generation_model.as_deref())
                .await?;
            timings.regenerate_ms = stage.elapsed().as_millis() as u64;

            report = citation::validate(&answer, chunks.len());
            report.retry_count = 1;
        }
        let citation_invalid_after_retry = report.retry_count == 1 && !report.is_valid;

        // ── Faithfulness and similarity, concurrently ──
        let full_mode = opts.judge_faithfulness || opts.ground_truth.is_some();
        let (faithfulness, similarity) = self
            .judge_signals(&answer, &chunks, opts, &mut timings)
            .await?;

        // ── Score ──
        let stage = Instant::now();
        let retrieved_ids: Vec<String> =
            chunks.iter().map(|c| c.normalized_document_key()).collect();
        let relevant: HashSet<String> = opts
            .relevant_ids
            .iter()
            .map(|id| metrics::normalize_relevant_id(id))
            .collect();
        let precision = metrics::precision_at_k(&retrieved_ids, &relevant);
        let recall = metrics::recall_at_k(&retrieved_ids, &relevant);

        let retrieval_quality =
            metrics::mean(&chunks.iter().map(|c| c.confidence).collect::<Vec<_>>());

        // Precision is only a signal when the caller labelled relevant
        // documents.
        let labelled_precision = if opts.relevant_ids.is_empty() {
            None
        } else {
            Some(precision)
        };

        let inputs = TrustInputs {
            mode: if full_mode {
                TrustMode::Full
            } else {
                TrustMode::Lightweight
            },
            retrieval_quality,
            citation_coverage: report.coverage,
            citation_validity: report.citation_validity,
            faithfulness,
            precision_at_k: labelled_precision,
            similarity,
            citation_invalid_after_retry,
        };
        let trust = trust::score(&inputs, &self.trust_config);
        timings.score_ms = stage.elapsed().as_millis() as u64;
        timings.total_ms = started.elapsed().as_millis() as u64;

        // Diagnosis is a pure function of the other fields, computed last.
        let diagnosis =
            Diagnosis::classify(labelled_precision, faithfulness, similarity, report.is_valid);
        let cold_start = timings.evaluation_ms() > self.eval_config.cold_start_threshold_ms;

        info!(
            query,
            trust = trust.score,
            diagnosis = diagnosis.tag(),
            total_ms = timings.total_ms,
            "query evaluated"
        );

        Ok(QueryEvaluation {
            query: query.to_string(),
            answer,
            ground_truth: opts.ground_truth.clone(),
            retrieved_ids,
            precision_at_k: precision,
            recall_at_k: recall,
            faithfulness,
            similarity,
            citations: report,
            trust,
            diagnosis,
            cold_start,
            timings,
            error: None,
        })
    }

    /// Cross-language expansion of the raw query, when enabled. The
    /// expanded text drives both the search embedding and the lexical
    /// rerank.
    fn expanded_query(&self, query: &str) -> String {
        if self.ranker.config().query_expansion {
            let query_intent = veritas_retrieval::intent::classify(query);
            veritas_retrieval::expansion::expand_query(query, query_intent)
        } else {
            query.to_string()
        }
    }

    /// Widened-pool search plus ranking.
    async fn retrieve(
        &self,
        collection_id: &str,
        search_query: &str,
        query_vector: &[f32],
        opts: &EvalOptions,
    ) -> VeritasResult<Vec<RetrievedChunk>> {
        let filters = RankFilters {
            year: opts.year,
            document_type: opts.document_type.clone(),
            top_k: opts.top_k,
        };
        let pool = self.ranker.widened_pool(opts.top_k, &filters);

        let hits = self.search.search(collection_id, query_vector, pool).await?;
        let chunks: Vec<RetrievedChunk> =
            hits.into_iter().map(RetrievedChunk::from_search_hit).collect();
        debug!(hits = chunks.len(), pool, "vector search returned");

        Ok(self.ranker.rank(chunks, search_query, &filters))
    }

    /// Run the faithfulness judge and ground-truth similarity concurrently.
    /// Neither blocks citation handling; both are optional.
    async fn judge_signals(
        &self,
        answer: &str,
        chunks: &[RetrievedChunk],
        opts: &EvalOptions,
        timings: &mut StageTimings,
    ) -> VeritasResult<(Option<f64>, Option<f64>)> {
        let faithfulness_fut = async {
            if !opts.judge_faithfulness {
                return Ok::<(Option<f64>, u64), VeritasError>((None, 0));
            }
            let stage = Instant::now();
            let prompt = prompts::faithfulness_prompt(answer, chunks);
            let raw = self
                .generator
                .generate(&prompt, opts.evaluation_model.as_deref())
                .await?;
            let score = match prompts::parse_judge_score(&raw) {
                Some(s) => s,
                None => {
                    // A judge formatting failure should not tank the answer.
                    warn!(raw, "unparsable faithfulness judgement, scoring neutral");
                    0.5
                }
            };
            Ok((Some(score), stage.elapsed().as_millis() as u64))
        };

        let similarity_fut = async {
            let Some(truth) = &opts.ground_truth else {
                return Ok::<(Option<f64>, u64), VeritasError>((None, 0));
            };
            let stage = Instant::now();
            let (answer_vec, truth_vec) =
                tokio::try_join!(self.embedder.embed(answer), self.embedder.embed(truth))?;
            let sim = metrics::cosine_similarity(&answer_vec, &truth_vec);
            Ok((Some(sim), stage.elapsed().as_millis() as u64))
        };

        let (faith, sim) = tokio::try_join!(faithfulness_fut, similarity_fut)?;
        timings.faithfulness_ms = faith.1;
        timings.similarity_ms = sim.1;
        Ok((faith.0, sim.0))
    }

    /// Fixed refusal result for a query with zero retrieved evidence:
    /// lightweight mode, trust 0.
    fn refusal(&self, query: &str, opts: &EvalOptions, timings: StageTimings) -> QueryEvaluation {
        QueryEvaluation {
            query: query.to_string(),
            answer: prompts::REFUSAL_ANSWER.to_string(),
            ground_truth: opts.ground_truth.clone(),
            retrieved_ids: Vec::new(),
            precision_at_k: 0.0,
            recall_at_k: 0.0,
            faithfulness: None,
            similarity: None,
            citations: CitationReport::empty(),
            trust: TrustBreakdown::zero(),
            diagnosis: Diagnosis::RetrievalIssue,
            cold_start: false,
            timings,
            error: None,
        }
    }
}
