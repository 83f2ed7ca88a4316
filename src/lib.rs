//! # pith
//!
//! Extractive text summarization by sentence centrality.
//!
//! ## The Problem
//!
//! Most documents say their important things more than once, in different
//! words, surrounded by detail. An extractive summary keeps the sentences
//! that carry the main thread and drops the rest — no paraphrasing, no
//! generation, just selection. The output is always a subsequence of the
//! input's own sentences, in their original order.
//!
//! ## How It Works
//!
//! Four stages, in strict dependency order:
//!
//! ```text
//! text ──> sentences ──> term-frequency vectors ──> centrality ranking ──> summary
//!          (tokenize)    (shared vocabulary)        (pairwise cosine)      (top K, reordered)
//! ```
//!
//! 1. **Tokenize**: split the text into sentences (UAX #29), and each
//!    sentence into alphanumeric word tokens.
//! 2. **Vectorize**: build one vocabulary over the whole document and
//!    represent each sentence as a dense term-frequency vector over it.
//! 3. **Rank**: compute cosine similarity between every sentence pair and
//!    score each sentence by its average similarity to all others
//!    (TextRank-style centrality without the eigenvector iteration).
//! 4. **Assemble**: keep the top `K = floor(n * (1 - ratio))` sentences,
//!    restore reading order, join with spaces.
//!
//! ## Quick Start
//!
//! ```rust
//! use pith::{summarize, CompressionRatio};
//!
//! let text = "The reactor hummed all night. The reactor hummed through the storm. \
//!             Lunch was served at noon. Someone lost an umbrella.";
//!
//! let ratio = CompressionRatio::new(0.5)?;
//! let summary = summarize(text, ratio)?;
//!
//! assert_eq!(summary.len(), 2);
//! assert!(summary.text.starts_with("The reactor"));
//! # Ok::<(), pith::Error>(())
//! ```
//!
//! ## Custom Tokenizers
//!
//! Sentence and word splitting sit behind the [`Tokenizer`] trait, so a
//! language-specific splitter can replace the default:
//!
//! ```rust
//! use pith::{CompressionRatio, Summarizer, Tokenizer};
//!
//! struct LineTokenizer;
//!
//! impl Tokenizer for LineTokenizer {
//!     fn sentences<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
//!         let mut out = Vec::new();
//!         let mut offset = 0;
//!         for line in text.split_inclusive('\n') {
//!             let trimmed = line.trim();
//!             if !trimmed.is_empty() {
//!                 let leading = line.len() - line.trim_start().len();
//!                 out.push((offset + leading, trimmed));
//!             }
//!             offset += line.len();
//!         }
//!         out
//!     }
//!
//!     fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
//!         text.split_whitespace()
//!             .filter(|w| w.chars().all(char::is_alphanumeric))
//!             .collect()
//!     }
//! }
//!
//! let summarizer = Summarizer::with_tokenizer(LineTokenizer);
//! let summary = summarizer.summarize("alpha beta\nalpha beta\ngamma delta\n",
//!                                    CompressionRatio::new(0.5).unwrap())?;
//! assert_eq!(summary.len(), 1);
//! # Ok::<(), pith::Error>(())
//! ```
//!
//! ## Performance Considerations
//!
//! | Stage | Cost | Notes |
//! |-----------|------------|-------------------------------------|
//! | Tokenize | O(n) | n = input bytes |
//! | Vectorize | O(t) | t = token count, hash-based counting |
//! | Rank | O(s² × v) | s = sentences, v = vocabulary size |
//! | Assemble | O(s log s) | sort of kept indices |
//!
//! Ranking dominates on long documents. The `parallel` feature spreads the
//! pairwise similarity pass over rayon workers; output is identical to the
//! serial path.
//!
//! ## What This Is Not
//!
//! Not an abstractive summarizer, not an NLP toolkit. There is no POS
//! tagging, stemming, stopword removal, or embedding model — similarity is
//! plain bag-of-words cosine, case-sensitive. That keeps the engine fully
//! deterministic: same text and ratio, byte-identical summary, every run.

mod error;
mod rank;
mod ratio;
mod sentence;
mod summary;
mod tokenize;
mod vector;

pub use error::{Error, Result};
pub use rank::{cosine_similarity, rank, RankedSentence};
pub use ratio::CompressionRatio;
pub use sentence::{Document, Sentence};
pub use summary::{assemble, Summary};
pub use tokenize::{Tokenizer, UnicodeTokenizer};
pub use vector::{SentenceVector, Vocabulary};

/// The summarization pipeline with a pluggable tokenizer.
///
/// Stateless apart from the tokenizer: every call derives its vocabulary,
/// vectors, and scores from scratch and discards them on return, so one
/// summarizer can serve documents of any mix without cross-talk.
///
/// ```rust
/// use pith::{CompressionRatio, Summarizer};
///
/// let summarizer = Summarizer::new();
/// let text = "Tides follow the moon. Tides follow the sun too. Bread needs salt.";
/// let summary = summarizer.summarize(text, CompressionRatio::new(0.5).unwrap())?;
/// assert_eq!(summary.len(), 1);
/// # Ok::<(), pith::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer<T: Tokenizer = UnicodeTokenizer> {
    tokenizer: T,
}

impl Summarizer<UnicodeTokenizer> {
    /// Create a summarizer with the default UAX #29 tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: UnicodeTokenizer,
        }
    }
}

impl<T: Tokenizer> Summarizer<T> {
    /// Create a summarizer around a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Summarize `text` down to `floor(n * (1 - ratio))` sentences.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyInput`] if `text` is empty after trimming.
    /// * [`Error::InsufficientContent`] if fewer than 2 sentences are found;
    ///   centrality is undefined on a single sentence.
    ///
    /// `ratio` itself is already validated: an in-range value is the only
    /// kind that can exist.
    pub fn summarize(&self, text: &str, ratio: CompressionRatio) -> Result<Summary> {
        let document = self.document(text)?;
        let ranked = self.rank_document(&document);
        Ok(assemble(&document, &ranked, ratio))
    }

    /// Rank every sentence of `text` by centrality without assembling a
    /// summary. Entries come back score-descending, ties in reading order.
    ///
    /// # Errors
    ///
    /// Same refusals as [`Summarizer::summarize`].
    pub fn rank_sentences(&self, text: &str) -> Result<Vec<RankedSentence>> {
        let document = self.document(text)?;
        Ok(self.rank_document(&document))
    }

    /// Validate the input shape and build the document.
    fn document(&self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let document = Document::from_text(text, &self.tokenizer);
        if document.len() < 2 {
            return Err(Error::InsufficientContent {
                found: document.len(),
            });
        }

        Ok(document)
    }

    fn rank_document(&self, document: &Document) -> Vec<RankedSentence> {
        let vocabulary = Vocabulary::build(document, &self.tokenizer);
        let vectors: Vec<SentenceVector> = document
            .sentences()
            .iter()
            .map(|s| vocabulary.vectorize(s, &self.tokenizer))
            .collect();
        rank(&vectors)
    }
}

/// Summarize with the default tokenizer.
///
/// Equivalent to `Summarizer::new().summarize(text, ratio)`.
///
/// # Errors
///
/// See [`Summarizer::summarize`].
pub fn summarize(text: &str, ratio: CompressionRatio) -> Result<Summary> {
    Summarizer::new().summarize(text, ratio)
}
