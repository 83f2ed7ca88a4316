//! Centrality ranking over the sentence similarity graph.
//!
//! ## The Idea
//!
//! A sentence that resembles many other sentences is probably central to
//! what the document is about. We score each sentence by its average
//! cosine similarity to every other sentence, then rank:
//!
//! ```text
//! Sentences:  [S0] [S1] [S2] [S3]
//!
//! sim(0,1)=0.8  sim(0,2)=0.1  sim(0,3)=0.2
//! sim(1,2)=0.1  sim(1,3)=0.2  sim(2,3)=0.0
//!
//! centrality(0) = (0.8 + 0.1 + 0.2) / 3 = 0.37   <- most central
//! centrality(1) = (0.8 + 0.1 + 0.2) / 3 = 0.37
//! centrality(2) = (0.1 + 0.1 + 0.0) / 3 = 0.07
//! centrality(3) = (0.2 + 0.2 + 0.0) / 3 = 0.13
//! ```
//!
//! This is TextRank's centrality notion with plain averaging in place of
//! iterative eigenvector convergence.
//!
//! ## Cost
//!
//! O(n² × v) where n = sentence count and v = vocabulary size. Similarity
//! is symmetric, so each unordered pair is computed once and added to both
//! endpoints' accumulators. With the `parallel` feature, accumulator rows
//! are computed independently per sentence across rayon workers; each row
//! sums in ascending neighbor order, so serial and parallel paths produce
//! identical scores.
//!
//! ## Determinism
//!
//! The ranked order is total: score descending, original index ascending on
//! ties. Equal-scoring sentences (including duplicates) always come out in
//! reading order, so repeated runs are byte-identical.

use crate::SentenceVector;

/// A sentence index paired with its centrality score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedSentence {
    /// Reading-order index of the sentence in its document.
    pub index: usize,
    /// Mean cosine similarity to every other sentence, in `[0, 1]`.
    pub score: f64,
}

/// Cosine similarity between two term-frequency vectors.
///
/// Defined as `dot(a, b) / (‖a‖ · ‖b‖)`, which is non-negative for count
/// vectors. If either vector is all zeros the angle is undefined; we define
/// the similarity as 0.0 so empty sentences rank at the bottom instead of
/// poisoning the scores with NaN.
#[must_use]
pub fn cosine_similarity(a: &SentenceVector, b: &SentenceVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a > 0.0 && norm_b > 0.0 {
        a.dot(b) / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Rank sentences by centrality: score descending, index ascending on ties.
///
/// The returned list has one entry per input vector. Inputs with fewer than
/// two vectors have no defined centrality; callers are expected to refuse
/// such documents before ranking (the facade does), but for completeness a
/// single vector ranks with score 0.0 and an empty input yields an empty
/// list.
#[must_use]
pub fn rank(vectors: &[SentenceVector]) -> Vec<RankedSentence> {
    let n = vectors.len();
    if n < 2 {
        return (0..n).map(|index| RankedSentence { index, score: 0.0 }).collect();
    }

    let sums = accumulate(vectors);

    let mut ranked: Vec<RankedSentence> = sums
        .into_iter()
        .enumerate()
        .map(|(index, sum)| RankedSentence {
            index,
            score: sum / (n - 1) as f64,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked
}

/// Sum each sentence's similarity to every other sentence.
///
/// The accumulator vector is owned here for the duration of one call;
/// nothing about the similarity graph survives the call.
fn accumulate(vectors: &[SentenceVector]) -> Vec<f64> {
    let norms: Vec<f64> = vectors.iter().map(SentenceVector::norm).collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..vectors.len())
            .into_par_iter()
            .map(|i| {
                (0..vectors.len())
                    .filter(|&j| j != i)
                    .map(|j| pair_similarity(vectors, &norms, i, j))
                    .sum()
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        let n = vectors.len();
        let mut sums = vec![0.0; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = pair_similarity(vectors, &norms, i, j);
                sums[i] += sim;
                sums[j] += sim;
            }
        }
        sums
    }
}

/// Similarity of one pair, with precomputed norms and the zero-norm fallback.
fn pair_similarity(vectors: &[SentenceVector], norms: &[f64], i: usize, j: usize) -> f64 {
    if norms[i] > 0.0 && norms[j] > 0.0 {
        vectors[i].dot(&vectors[j]) / (norms[i] * norms[j])
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, UnicodeTokenizer, Vocabulary};

    fn vectors_for(text: &str) -> Vec<SentenceVector> {
        let doc = Document::from_text(text, &UnicodeTokenizer);
        let vocab = Vocabulary::build(&doc, &UnicodeTokenizer);
        doc.sentences()
            .iter()
            .map(|s| vocab.vectorize(s, &UnicodeTokenizer))
            .collect()
    }

    #[test]
    fn test_symmetry() {
        let vectors = vectors_for("Cats chase mice. Mice fear cats. Dogs chase cats.");
        assert_eq!(vectors.len(), 3);
        for a in &vectors {
            for b in &vectors {
                assert_eq!(cosine_similarity(a, b), cosine_similarity(b, a));
            }
        }
    }

    #[test]
    fn test_identical_sentences_rank_highest() {
        let text = "The sky is blue today. The sky is blue today. \
                    Quartz is a mineral. Seven is odd.";
        let vectors = vectors_for(text);
        assert_eq!(vectors.len(), 4);
        let ranked = rank(&vectors);

        // The two duplicates are most similar to each other; tie broken by index
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 1);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_scores_are_means_over_others() {
        let vectors = vec![
            SentenceVector::new(vec![1, 1, 0, 0]),
            SentenceVector::new(vec![1, 1, 0, 0]),
            SentenceVector::new(vec![0, 0, 1, 1]),
        ];
        let ranked = rank(&vectors);

        // sims: (0,1)=1, (0,2)=0, (1,2)=0
        let by_index = |i: usize| ranked.iter().find(|r| r.index == i).unwrap().score;
        assert!((by_index(0) - 0.5).abs() < 1e-12);
        assert!((by_index(1) - 0.5).abs() < 1e-12);
        assert!((by_index(2) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_falls_to_bottom() {
        let vectors = vec![
            SentenceVector::new(vec![1, 1, 0]),
            SentenceVector::new(vec![1, 2, 0]),
            SentenceVector::new(vec![0, 0, 0]),
        ];
        assert!(vectors[2].is_zero());

        let ranked = rank(&vectors);
        assert_eq!(ranked.last().unwrap().index, 2);
        assert_eq!(ranked.last().unwrap().score, 0.0);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let vectors = vectors_for("One two three. Two three four. Three four five.");
        assert_eq!(vectors.len(), 3);
        for r in &rank(&vectors) {
            assert!((0.0..=1.0).contains(&r.score), "score out of range: {r:?}");
        }
    }

    #[test]
    fn test_tie_break_is_reading_order() {
        // Pairwise disjoint columns: every score is 0.0
        let vectors = vec![
            SentenceVector::new(vec![1, 0, 0]),
            SentenceVector::new(vec![0, 1, 0]),
            SentenceVector::new(vec![0, 0, 1]),
        ];
        let indices: Vec<usize> = rank(&vectors).iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(rank(&[]).is_empty());

        let one = vectors_for("Only sentence here.");
        let ranked = rank(&one);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.0);
    }
}
