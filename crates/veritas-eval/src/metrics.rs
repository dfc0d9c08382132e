//! Retrieval and latency metrics: precision@K, recall@K, cosine similarity,
//! nearest-rank p95 and means. All denominators are zero-safe.

use std::collections::HashSet;

/// Normalize a relevant-document id: strip a trailing `.txt` so filenames
/// compare against `documentId_year` keys.
pub fn normalize_relevant_id(id: &str) -> String {
    id.strip_suffix(".txt").unwrap_or(id).to_string()
}

/// Fraction of retrieved ids that are relevant. 0 for an empty retrieved
/// set.
pub fn precision_at_k(retrieved: &[String], relevant: &HashSet<String>) -> f64 {
    if retrieved.is_empty() {
        return 0.0;
    }
    let hits = retrieved.iter().filter(|id| relevant.contains(*id)).count();
    hits as f64 / retrieved.len() as f64
}

/// Fraction of relevant ids that were retrieved. 0 when either side is
/// empty.
pub fn recall_at_k(retrieved: &[String], relevant: &HashSet<String>) -> f64 {
    if relevant.is_empty() || retrieved.is_empty() {
        return 0.0;
    }
    let retrieved_set: HashSet<&String> = retrieved.iter().collect();
    let hits = relevant.iter().filter(|id| retrieved_set.contains(id)).count();
    hits as f64 / relevant.len() as f64
}

/// Cosine similarity of two embeddings, 0 on dimension mismatch or zero
/// norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += (*x as f64) * (*y as f64);
        norm_a += (*x as f64) * (*x as f64);
        norm_b += (*y as f64) * (*y as f64);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Nearest-rank 95th percentile: `sorted[floor(0.95 * (n - 1))]`.
/// 0 for an empty input.
pub fn p95(latencies_ms: &[u64]) -> u64 {
    if latencies_ms.is_empty() {
        return 0;
    }
    let mut sorted = latencies_ms.to_vec();
    sorted.sort_unstable();
    let idx = (0.95 * (sorted.len() - 1) as f64).floor() as usize;
    sorted[idx]
}

/// Arithmetic mean, 0 for an empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
