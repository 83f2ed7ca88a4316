//! Summary assembly: selection and reading-order restoration.
//!
//! Ranking tells us *which* sentences matter; it says nothing about how to
//! present them. Emitting them in rank order reads like a shuffled deck:
//!
//! ```text
//! Ranked:   [S3, S0, S5, S1, ...]          <- by centrality
//! Keep 3:   {S3, S0, S5}
//! Emitted:  "S0 S3 S5"                     <- back in reading order
//! ```
//!
//! The assembler takes the top K of the ranked list, re-sorts the survivors
//! by original index, and joins their unmodified text with single spaces.
//! It never re-tokenizes and never edits sentence text.

use crate::{CompressionRatio, Document, RankedSentence, Sentence};

/// An extractive summary: a reading-order subsequence of the source document.
///
/// ## Example
///
/// ```rust
/// use pith::{summarize, CompressionRatio};
///
/// let text = "Rust is fast. Rust is safe. Chalk is white. Ink is dark.";
/// let summary = summarize(text, CompressionRatio::new(0.5).unwrap()).unwrap();
///
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary.text, "Rust is fast. Rust is safe.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The selected sentences joined by single spaces, trimmed.
    pub text: String,
    /// The selected sentences, sorted by original index ascending.
    pub sentences: Vec<Sentence>,
}

impl Summary {
    /// The number of sentences in the summary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the summary is empty (legal at full compression).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Select the top-ranked sentences under `ratio`'s budget and restore
/// reading order.
///
/// Keeps `K = floor(n * (1 - ratio))` sentences, clamped to `[0, n]`.
/// `ratio` 0.0 reproduces the whole document (still reordered back to
/// reading order); 1.0 produces an empty summary.
///
/// Ranked entries whose index falls outside the document are ignored, so a
/// hand-built ranked list can never make the assembler read past the end.
#[must_use]
pub fn assemble(document: &Document, ranked: &[RankedSentence], ratio: CompressionRatio) -> Summary {
    let keep = ratio.keep_count(document.len()).min(ranked.len());

    let mut indices: Vec<usize> = ranked[..keep]
        .iter()
        .map(|r| r.index)
        .filter(|&i| i < document.len())
        .collect();
    indices.sort_unstable();

    let sentences: Vec<Sentence> = indices
        .into_iter()
        .map(|i| document.sentences()[i].clone())
        .collect();

    let text = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Summary { text, sentences }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rank, Document, UnicodeTokenizer, Vocabulary};

    fn pipeline(text: &str) -> (Document, Vec<RankedSentence>) {
        let doc = Document::from_text(text, &UnicodeTokenizer);
        let vocab = Vocabulary::build(&doc, &UnicodeTokenizer);
        let vectors: Vec<_> = doc
            .sentences()
            .iter()
            .map(|s| vocab.vectorize(s, &UnicodeTokenizer))
            .collect();
        let ranked = rank(&vectors);
        (doc, ranked)
    }

    #[test]
    fn test_zero_ratio_returns_whole_document_in_order() {
        let text = "One here. Two here. Three here.";
        let (doc, ranked) = pipeline(text);
        let summary = assemble(&doc, &ranked, CompressionRatio::NONE);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.text, "One here. Two here. Three here.");
    }

    #[test]
    fn test_full_ratio_returns_empty_summary() {
        let (doc, ranked) = pipeline("One here. Two here.");
        let summary = assemble(&doc, &ranked, CompressionRatio::FULL);

        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
    }

    #[test]
    fn test_selection_preserves_reading_order() {
        // Last two sentences are near-duplicates and should win the ranking,
        // but must be emitted in document order
        let text = "Granite weighs a lot. Herons wade slowly. \
                    Copper conducts heat well. Copper conducts electricity well.";
        let (doc, ranked) = pipeline(text);
        let summary = assemble(&doc, &ranked, CompressionRatio::new(0.5).unwrap());

        assert_eq!(summary.len(), 2);
        assert!(summary.sentences[0].index < summary.sentences[1].index);
        assert_eq!(
            summary.text,
            "Copper conducts heat well. Copper conducts electricity well."
        );
    }

    #[test]
    fn test_out_of_range_ranked_entries_are_ignored() {
        let (doc, _) = pipeline("Left bank. Right bank.");
        let ranked = vec![
            RankedSentence { index: 9, score: 0.9 },
            RankedSentence { index: 1, score: 0.5 },
            RankedSentence { index: 0, score: 0.1 },
        ];

        let summary = assemble(&doc, &ranked, CompressionRatio::new(0.5).unwrap());

        // K = 1, and the sole kept entry points outside the document
        assert!(summary.is_empty());

        // K = 2 keeps the bogus entry and one real one; only the real
        // sentence survives
        let summary = assemble(&doc, &ranked, CompressionRatio::NONE);
        assert_eq!(summary.text, "Right bank.");
    }

    #[test]
    fn test_text_is_untouched_sentence_text() {
        let (doc, ranked) = pipeline("Keep punctuation, okay? Sure -- keep it!");
        let summary = assemble(&doc, &ranked, CompressionRatio::NONE);

        for sentence in &summary.sentences {
            assert!(summary.text.contains(&sentence.text));
        }
    }
}
