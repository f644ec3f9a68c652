//! Batch shape inference

use crate::error::Result;
use crate::record::Utterance;

/// Fixed shape of one batch, derived from its first example.
///
/// The feature width is not stored in any record; it is inferred once from
/// example 0 and every later example must match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchShape {
    /// Number of examples in the batch
    pub batch_size: usize,
    /// Per-frame feature width, uniform across the batch
    pub features_width: usize,
}

impl BatchShape {
    /// Infer the batch shape from the first decoded example.
    pub fn infer(batch_size: usize, first: &Utterance) -> Result<Self> {
        Ok(Self {
            batch_size,
            features_width: first.feature_width(0)?,
        })
    }
}
