/// Veritas system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version tag stamped into every benchmark record. Bumped when the
/// scoring algorithm changes in a way that breaks longitudinal comparison.
pub const EVALUATION_VERSION: &str = "2";

/// Minimum alphanumeric characters a chunk needs to carry information.
pub const MIN_ALNUM_CHARS: usize = 6;

/// Punctuation fraction above which a chunk is considered noise.
/// Only applied to strings of at least [`PUNCT_CHECK_MIN_LEN`] chars.
pub const MAX_PUNCT_FRACTION: f64 = 0.70;
pub const PUNCT_CHECK_MIN_LEN: usize = 12;

/// Chunks with this many or fewer distinct non-whitespace characters
/// are treated as repetitive noise.
pub const MAX_REPETITIVE_DISTINCT: usize = 2;

/// Minimum characters for a sentence to count as factual.
pub const FACTUAL_SENTENCE_MIN_LEN: usize = 20;

/// Citation coverage required for an answer to validate.
pub const COVERAGE_THRESHOLD: f64 = 0.8;

/// Hard ceiling on the widened candidate pool requested from the
/// vector store, regardless of filters. Bounds retrieval latency.
pub const MAX_CANDIDATE_POOL: usize = 50;

/// Minimum token length considered for lexical overlap.
pub const MIN_TOKEN_LEN: usize = 3;
