//! Error types for pith.

/// Errors that can occur during summarization.
///
/// All variants are detected eagerly, before any similarity computation;
/// a failed call never emits a partial summary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Compression ratio outside `[0.0, 1.0]`, or NaN.
    #[error("invalid compression ratio: {0} (must be in [0.0, 1.0])")]
    InvalidRatio(f64),

    /// Input text is empty after trimming.
    #[error("input text is empty")]
    EmptyInput,

    /// Fewer than 2 sentences found; centrality is undefined on one sentence.
    #[error("insufficient content: found {found} sentence(s), need at least 2")]
    InsufficientContent {
        /// The number of sentences that were found.
        found: usize,
    },
}

/// Result type for pith operations.
pub type Result<T> = std::result::Result<T, Error>;
