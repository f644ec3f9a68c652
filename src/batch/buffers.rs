//! Padded output buffers

use ndarray::{Array1, Array2};

use super::config::ParserConfig;
use super::shape::BatchShape;

/// Sentinel for unpopulated token slots.
pub const TOKEN_PAD: i64 = -1;

/// One batch's packed output buffers.
///
/// Ragged per-example sequences are laid out as slot-buffers: `features[t]`
/// holds every example's frame `t`, `tokens[s]` every example's position
/// `s`. Rows past an example's actual length keep the fill value, so
/// "no data" stays distinguishable from real zeros in the integer buffers
/// ([`TOKEN_PAD`]) and numerically inert in the float buffers (`0.0`).
///
/// Buffers are allocated fresh for each batch; the caller owns them once
/// the parse returns.
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceBatch {
    /// `features_len_max` slots, each `[batch_size, features_width]`, zero-filled
    pub features: Vec<Array2<f32>>,
    /// Declared feature frames per example
    pub features_len: Array1<i64>,
    /// Transcript bytes per example, verbatim
    pub text: Vec<Vec<u8>>,
    /// `tokens_len_max` slots, each `[batch_size]`, filled with [`TOKEN_PAD`]
    pub tokens: Vec<Array1<i64>>,
    /// Token count per example
    pub tokens_len: Array1<i64>,
    /// `tokens_len_max` slots, each `[batch_size]`; `1.0` where populated, else `0.0`
    pub tokens_weights: Vec<Array1<f32>>,
    /// Identifier bytes per example, verbatim
    pub uttid: Vec<Vec<u8>>,
}

impl UtteranceBatch {
    /// Allocate every buffer for one batch with its fill value.
    pub(crate) fn allocate(config: &ParserConfig, shape: BatchShape) -> Self {
        let BatchShape { batch_size, features_width } = shape;
        Self {
            features: (0..config.features_len_max)
                .map(|_| Array2::zeros((batch_size, features_width)))
                .collect(),
            features_len: Array1::zeros(batch_size),
            text: vec![Vec::new(); batch_size],
            tokens: (0..config.tokens_len_max)
                .map(|_| Array1::from_elem(batch_size, TOKEN_PAD))
                .collect(),
            tokens_len: Array1::zeros(batch_size),
            tokens_weights: (0..config.tokens_len_max)
                .map(|_| Array1::zeros(batch_size))
                .collect(),
            uttid: vec![Vec::new(); batch_size],
        }
    }

    /// Number of examples in this batch.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.features_len.len()
    }

    /// Per-frame feature width.
    #[must_use]
    pub fn features_width(&self) -> usize {
        self.features.first().map_or(0, |slot| slot.ncols())
    }
}
