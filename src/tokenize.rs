//! Tokenization: the injected linguistic capability.
//!
//! The summarizer itself knows nothing about sentence boundaries or word
//! boundaries. It consumes both through the [`Tokenizer`] trait, so locale
//! or language-specific splitters can be swapped in without touching the
//! ranking pipeline.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default [`UnicodeTokenizer`] uses Unicode Standard Annex #29
//! (UAX #29) segmentation, which handles most edge cases including
//! abbreviations, decimal numbers, ellipses, and URLs.
//!
//! ## Word Normalization
//!
//! Word tokens are filtered to alphanumeric-only: a token survives iff
//! every one of its characters is alphanumeric. Punctuation-only tokens
//! ("...", "--") and mixed tokens ("3.14", "don't") are discarded. Case is
//! preserved — "Rust" and "rust" are distinct vocabulary entries, and the
//! vocabulary keeps stopwords. Both choices deliberately leave the
//! similarity signal raw rather than linguistically cleaned.

use unicode_segmentation::UnicodeSegmentation;

/// Sentence and word splitting for the summarizer.
///
/// Implementations must be deterministic: the same text always yields the
/// same splits, in the same order.
pub trait Tokenizer: Send + Sync {
    /// Split text into ordered `(byte_offset, trimmed_sentence)` pairs.
    ///
    /// Every non-whitespace span of the input must appear in exactly one
    /// sentence, in reading order. Whitespace-only spans are dropped.
    fn sentences<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)>;

    /// Split a string into alphanumeric word tokens, case preserved.
    ///
    /// Tokens containing any non-alphanumeric character are discarded.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default tokenizer built on UAX #29 Unicode segmentation.
///
/// ## Example
///
/// ```rust
/// use pith::{Tokenizer, UnicodeTokenizer};
///
/// let tokenizer = UnicodeTokenizer;
///
/// let sentences = tokenizer.sentences("Hello world. How are you?");
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0], (0, "Hello world."));
///
/// let words = tokenizer.words("Stop, look -- and listen!");
/// assert_eq!(words, vec!["Stop", "look", "and", "listen"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let mut sentences = Vec::new();
        let mut offset = 0;

        for span in text.split_sentence_bounds() {
            let trimmed = span.trim();
            if !trimmed.is_empty() {
                let leading_ws = span.len() - span.trim_start().len();
                sentences.push((offset + leading_ws, trimmed));
            }
            offset += span.len();
        }

        sentences
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words()
            .filter(|w| w.chars().all(char::is_alphanumeric))
            .collect()
    }
}
