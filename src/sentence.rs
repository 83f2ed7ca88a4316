//! The Sentence type and the Document it belongs to.

use crate::Tokenizer;

/// A sentence with its position in the original document.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use pith::Sentence;
///
/// let text = "Hello. World.";
/// let sentence = Sentence::new("World.", 7, 13, 1);
///
/// // The offsets let you recover the original position
/// assert_eq!(&text[sentence.start..sentence.end], "World.");
/// ```
///
/// ## Index Stability
///
/// `index` identifies the sentence's reading-order position and never
/// changes after the document is built. Centrality scores and summary
/// selection refer to sentences by this index, so the emitted summary can
/// restore reading order after rank-based selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset where this sentence starts in the original document.
    pub start: usize,
    /// Byte offset where this sentence ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based reading-order index.
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this sentence in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this sentence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this sentence in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sentence {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}

/// An ordered sequence of sentences; insertion order is reading order.
///
/// All derived state (vocabulary, vectors, scores) is scoped to one
/// summarization call over one document. Nothing is cached across documents.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Split `text` into a document using the given tokenizer.
    ///
    /// Whitespace-only spans are dropped; everything else keeps its
    /// reading order and receives a stable index.
    pub fn from_text<T: Tokenizer + ?Sized>(text: &str, tokenizer: &T) -> Self {
        let sentences = tokenizer
            .sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, span))| Sentence::new(span, start, start + span.len(), index))
            .collect();
        Self { sentences }
    }

    /// The sentences in reading order.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// The number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document has no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
