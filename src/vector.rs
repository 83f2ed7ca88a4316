//! Vocabulary construction and sentence vectorization.
//!
//! Every sentence becomes a dense term-frequency vector over the document's
//! vocabulary:
//!
//! ```text
//! Document:   "Cats sleep. Dogs sleep. Cats purr."
//! Vocabulary: [Cats, sleep, Dogs, purr]   <- first-occurrence column order
//!
//! "Cats sleep."  -> [1, 1, 0, 0]
//! "Dogs sleep."  -> [0, 1, 1, 0]
//! "Cats purr."   -> [1, 0, 0, 1]
//! ```
//!
//! All vectors share one column mapping, so cosine similarity between any
//! two of them is well-defined. Columns are assigned in first-occurrence
//! order, a specified total order: two runs over the same document always
//! produce identical vectors.
//!
//! Counting is hash-based: tokenize the sentence, look each token up in the
//! vocabulary map, bump its column. That is O(tokens) per sentence instead
//! of the naive O(tokens × vocabulary) scan, while the output stays dense.
//!
//! The vocabulary is case-sensitive and keeps stopwords. Summaries change
//! if either choice changes, so neither is configurable.

use std::collections::HashMap;

use crate::{Document, Sentence, Tokenizer};

/// The set of unique alphanumeric tokens of one document, each assigned a
/// stable column index for the duration of one summarization call.
///
/// ## Example
///
/// ```rust
/// use pith::{Document, UnicodeTokenizer, Vocabulary};
///
/// let tokenizer = UnicodeTokenizer;
/// let doc = Document::from_text("Cats sleep. Dogs sleep.", &tokenizer);
/// let vocab = Vocabulary::build(&doc, &tokenizer);
///
/// assert_eq!(vocab.len(), 3); // Cats, sleep, Dogs
/// assert_eq!(vocab.column("Cats"), Some(0));
/// assert_eq!(vocab.column("sleep"), Some(1));
/// assert_eq!(vocab.column("cats"), None); // case-sensitive
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the unique tokens across all sentences of `document`.
    pub fn build<T: Tokenizer + ?Sized>(document: &Document, tokenizer: &T) -> Self {
        let mut columns = HashMap::new();
        for sentence in document.sentences() {
            for word in tokenizer.words(&sentence.text) {
                let next = columns.len();
                columns.entry(word.to_string()).or_insert(next);
            }
        }
        Self { columns }
    }

    /// The column index of `word`, if it is in the vocabulary.
    #[must_use]
    pub fn column(&self, word: &str) -> Option<usize> {
        self.columns.get(word).copied()
    }

    /// The number of vocabulary words (vector dimensionality).
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Count `sentence`'s term frequencies over this vocabulary.
    ///
    /// The sentence is re-tokenized here; tokens outside the vocabulary are
    /// ignored. A sentence with no alphanumeric tokens yields the zero
    /// vector, which the ranker treats as dissimilar to everything.
    pub fn vectorize<T: Tokenizer + ?Sized>(
        &self,
        sentence: &Sentence,
        tokenizer: &T,
    ) -> SentenceVector {
        let mut counts = vec![0u32; self.columns.len()];
        for word in tokenizer.words(&sentence.text) {
            if let Some(col) = self.column(word) {
                counts[col] += 1;
            }
        }
        SentenceVector { counts }
    }
}

/// A dense term-frequency vector: one count per vocabulary column.
///
/// Immutable once built; two sentences with identical token multisets
/// produce identical (and equal) vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceVector {
    counts: Vec<u32>,
}

impl SentenceVector {
    /// Create a vector from raw per-column counts.
    ///
    /// [`Vocabulary::vectorize`] is the usual way to obtain one; this
    /// constructor exists for callers driving [`crate::rank`] with vectors
    /// of their own. All vectors fed to the ranker must share one column
    /// order.
    #[must_use]
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// The per-column counts.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// The Euclidean norm of the vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.counts
            .iter()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with another vector of the same dimensionality.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.counts
            .iter()
            .zip(&other.counts)
            .map(|(&a, &b)| f64::from(a) * f64::from(b))
            .sum()
    }

    /// Whether every count is zero (no vocabulary token in the sentence).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}
