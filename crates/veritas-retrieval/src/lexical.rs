//! Query tokenization and lexical overlap scoring.
//!
//! Tokens are lowercased, diacritic-folded, stripped of stop-words and
//! anything shorter than three characters. Overlap is the fraction of query
//! tokens present in a sample built from a chunk's text prefix, title and
//! section labels.

use veritas_core::constants::MIN_TOKEN_LEN;
use veritas_core::models::RetrievedChunk;

/// How much of the chunk text participates in the lexical sample. A prefix
/// keeps the overlap check cheap on long chunks.
const SAMPLE_PREFIX_CHARS: usize = 400;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "was", "were", "with", "this", "that", "what", "which", "when",
    "where", "how", "who", "can", "could", "should", "would", "will", "does", "did", "has", "have",
    "had", "not", "you", "your", "about", "into", "from", "them", "they", "their", "there",
];

/// Fold common Latin diacritics to their base letter. Non-Latin characters
/// pass through unchanged.
fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        'ß' => 's',
        other => other,
    }
}

/// Normalize a string: lowercase and diacritic-fold every character.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_char)
        .collect()
}

/// Split a query into normalized content tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(String::from)
        .collect()
}

/// Build the normalized lexical sample for a chunk: text prefix plus title
/// and section labels.
pub fn chunk_sample(chunk: &RetrievedChunk) -> String {
    let mut sample: String = chunk.text.chars().take(SAMPLE_PREFIX_CHARS).collect();
    for label in [&chunk.title, &chunk.section, &chunk.subsection]
        .into_iter()
        .flatten()
    {
        sample.push(' ');
        sample.push_str(label);
    }
    normalize(&sample)
}

/// Fraction of query tokens present in the sample. Zero when the query has
/// no content tokens.
pub fn overlap(query_tokens: &[String], sample: &str) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let hits = query_tokens
        .iter()
        .filter(|t| sample.contains(t.as_str()))
        .count();
    hits as f64 / query_tokens.len() as f64
}

/// Whether a query is predominantly Latin-script. Drives cross-language
/// expansion against non-Latin corpora.
pub fn is_latin_query(query: &str) -> bool {
    let mut latin = 0usize;
    let mut other = 0usize;
    for c in query.chars().filter(|c| c.is_alphabetic()) {
        if c.is_ascii_alphabetic() {
            latin += 1;
        } else {
            other += 1;
        }
    }
    latin > 0 && latin >= other * 3
}
