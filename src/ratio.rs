//! Compression ratio configuration.
//!
//! The single knob of the summarizer: how much shorter the summary should
//! be relative to the source.
//!
//! ```text
//! ratio = 1 - (summary sentences / source sentences)
//!
//! 0.0  -> keep everything (no compression)
//! 0.5  -> keep about half
//! 0.9  -> keep about a tenth
//! 1.0  -> keep nothing (empty summary)
//! ```
//!
//! Validation happens once, at construction. A [`CompressionRatio`] value
//! is always in `[0.0, 1.0]` and never NaN, so the pipeline downstream
//! never re-checks it.

use crate::{Error, Result};

/// A validated compression ratio in `[0.0, 1.0]`.
///
/// For a document of `n` sentences, the summary keeps
/// `K = floor(n * (1 - ratio))` of them.
///
/// # Examples
///
/// ```rust
/// use pith::CompressionRatio;
///
/// let ratio = CompressionRatio::new(0.5).unwrap();
/// assert_eq!(ratio.get(), 0.5);
/// assert_eq!(ratio.keep_count(4), 2);
///
/// // Boundaries are legal
/// assert_eq!(CompressionRatio::NONE.keep_count(4), 4);
/// assert_eq!(CompressionRatio::FULL.keep_count(4), 0);
///
/// // Out-of-range values are rejected
/// assert!(CompressionRatio::new(1.5).is_err());
/// assert!(CompressionRatio::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionRatio(f64);

impl CompressionRatio {
    /// No compression: the summary is the whole document, order restored.
    pub const NONE: Self = Self(0.0);

    /// Full compression: the summary is empty.
    pub const FULL: Self = Self(1.0);

    /// Create a ratio, rejecting NaN and values outside `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRatio`] if `ratio` is NaN or out of range.
    pub fn new(ratio: f64) -> Result<Self> {
        if ratio.is_nan() || !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidRatio(ratio));
        }
        Ok(Self(ratio))
    }

    /// The raw ratio value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// How many of `n` sentences the summary keeps: `floor(n * (1 - ratio))`,
    /// clamped to `[0, n]`.
    #[must_use]
    pub fn keep_count(&self, n: usize) -> usize {
        let k = (n as f64 * (1.0 - self.0)).floor() as usize;
        k.min(n)
    }
}

impl Default for CompressionRatio {
    fn default() -> Self {
        // Keep roughly a tenth of the document
        Self(0.9)
    }
}

impl TryFrom<f64> for CompressionRatio {
    type Error = Error;

    fn try_from(ratio: f64) -> Result<Self> {
        Self::new(ratio)
    }
}
