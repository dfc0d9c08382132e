//! Shared test doubles for the evaluator test suites.

// Each integration-test binary compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::BenchmarkRecord;
use veritas_core::traits::{BenchmarkStore, Embedder, SearchHit, TextGenerator, VectorSearch};

/// An answer with full, valid citation discipline against one source.
pub const CITED_ANSWER: &str = "Applicants must submit notarized transcripts before June 15 [1].";

/// An answer with no citations at all.
pub const UNCITED_ANSWER: &str = "Applicants must submit notarized transcripts before June 15.";

/// Scripted generator: answers in sequence, tracks call count and the
/// maximum number of concurrently running calls.
pub struct MockGenerator {
    answers: Mutex<Vec<String>>,
    /// Returned when the script runs dry.
    fallback: String,
    /// Returned for faithfulness-judge prompts.
    judge_score: String,
    pub calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub delay: Duration,
    /// Queries containing this marker fail with UnreachableModel.
    pub fail_marker: Option<String>,
}

impl MockGenerator {
    pub fn new(fallback: &str) -> Self {
        Self {
            answers: Mutex::new(Vec::new()),
            fallback: fallback.to_string(),
            judge_score: "0.9".to_string(),
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail_marker: None,
        }
    }

    /// Queue scripted answers, consumed first-in-first-out.
    pub fn script(self, answers: &[&str]) -> Self {
        *self.answers.lock().unwrap() = answers.iter().rev().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_judge_score(mut self, score: &str) -> Self {
        self.judge_score = score.to_string();
        self
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, _model: Option<&str>) -> VeritasResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(marker) = &self.fail_marker {
            if prompt.contains(marker.as_str()) {
                return Err(VeritasError::UnreachableModel {
                    reason: "scripted failure".into(),
                });
            }
        }

        if prompt.starts_with("You are grading") {
            return Ok(self.judge_score.clone());
        }

        let scripted = self.answers.lock().unwrap().pop();
        Ok(scripted.unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Deterministic embedder: a constant unit-ish vector, so any two texts are
/// perfectly similar.
pub struct MockEmbedder;

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> VeritasResult<Vec<f32>> {
        if text.is_empty() {
            return Err(VeritasError::EmptyEmbedding);
        }
        Ok(vec![0.5, 0.5, 0.5, 0.5])
    }
}

/// Embedder that records every input it is asked to embed.
pub struct RecordingEmbedder {
    pub inputs: Mutex<Vec<String>>,
}

impl RecordingEmbedder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inputs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Embedder for RecordingEmbedder {
    async fn embed(&self, text: &str) -> VeritasResult<Vec<f32>> {
        if text.is_empty() {
            return Err(VeritasError::EmptyEmbedding);
        }
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(vec![0.5, 0.5, 0.5, 0.5])
    }
}

/// Static vector store returning the configured hits for every search.
pub struct MockSearch {
    pub hits: Vec<SearchHit>,
}

impl MockSearch {
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    pub fn empty() -> Self {
        Self { hits: Vec::new() }
    }
}

#[async_trait]
impl VectorSearch for MockSearch {
    async fn search(
        &self,
        _collection_id: &str,
        _vector: &[f32],
        top_k: usize,
    ) -> VeritasResult<Vec<SearchHit>> {
        Ok(self.hits.iter().take(top_k).cloned().collect())
    }
}

/// A well-formed evidence hit.
pub fn hit(id: &str, distance: f64) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        text: "Applicants must submit notarized transcripts to the admission office before \
               June 15 of the intake year."
            .to_string(),
        distance,
        metadata: serde_json::Value::Null,
    }
}

/// In-memory benchmark store.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Mutex<Vec<BenchmarkRecord>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl BenchmarkStore for MemoryStore {
    async fn append(&self, record: &BenchmarkRecord) -> VeritasResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn history(&self) -> VeritasResult<Vec<BenchmarkRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}
