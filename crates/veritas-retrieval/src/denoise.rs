//! Chunk denoising: drops punctuation-dominated, near-empty, or highly
//! repetitive passages before ranking.

use std::collections::HashSet;

use veritas_core::constants::{
    MAX_PUNCT_FRACTION, MAX_REPETITIVE_DISTINCT, MIN_ALNUM_CHARS, PUNCT_CHECK_MIN_LEN,
};
use veritas_core::models::RetrievedChunk;

/// Whether a chunk's text carries too little information to be evidence.
pub fn is_noise(text: &str) -> bool {
    let trimmed = text.trim();

    let alnum = trimmed.chars().filter(|c| c.is_alphanumeric()).count();
    if alnum < MIN_ALNUM_CHARS {
        return true;
    }

    let len = trimmed.chars().count();
    if len >= PUNCT_CHECK_MIN_LEN {
        let punct = trimmed
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count();
        if punct as f64 / len as f64 > MAX_PUNCT_FRACTION {
            return true;
        }
    }

    let distinct: HashSet<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    distinct.len() <= MAX_REPETITIVE_DISTINCT
}

/// Remove noise chunks. If denoising would remove everything, the input is
/// returned untouched — an empty result is never produced for this reason
/// alone.
pub fn denoise(chunks: Vec<RetrievedChunk>) -> Vec<RetrievedChunk> {
    let kept: Vec<RetrievedChunk> = chunks
        .iter()
        .filter(|c| !is_noise(&c.text))
        .cloned()
        .collect();

    if kept.is_empty() && !chunks.is_empty() {
        tracing::warn!(
            candidates = chunks.len(),
            "denoising would remove all candidates, skipping"
        );
        return chunks;
    }

    kept
}
