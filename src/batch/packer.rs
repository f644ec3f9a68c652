//! Per-example packing and the batch parse operation

use ndarray::ArrayView1;

use crate::error::{PackError, Result};
use crate::record::{Record, Utterance};

use super::buffers::UtteranceBatch;
use super::config::{ParserConfig, TokenMode};
use super::shape::BatchShape;

/// Writes decoded utterances into a batch's pre-allocated buffers.
///
/// Constructed once per batch from the shape inferred off example 0. Each
/// call touches only row `b` of every buffer, so packing different examples
/// never writes the same cell.
#[derive(Debug, Clone, Copy)]
pub struct BatchPacker {
    config: ParserConfig,
    shape: BatchShape,
}

impl BatchPacker {
    /// Create a packer for one batch.
    #[must_use]
    pub fn new(config: ParserConfig, shape: BatchShape) -> Self {
        Self { config, shape }
    }

    /// Pack example `b` into its row of every output buffer.
    ///
    /// Validates the example's inferred width against the batch width and
    /// both length bounds before writing anything for this example.
    pub fn pack_into(
        &self,
        b: usize,
        utt: &Utterance,
        batch: &mut UtteranceBatch,
    ) -> Result<()> {
        let width = utt.feature_width(b)?;
        if width != self.shape.features_width {
            return Err(PackError::WidthMismatch {
                index: b,
                expected: self.shape.features_width,
                actual: width,
            });
        }
        if utt.features_len > self.config.features_len_max {
            return Err(PackError::FeaturesOverflow {
                index: b,
                len: utt.features_len,
                max: self.config.features_len_max,
            });
        }
        let tokens_len = utt.tokens_len();
        if tokens_len > self.config.tokens_len_max {
            return Err(PackError::TokensOverflow {
                index: b,
                len: tokens_len,
                max: self.config.tokens_len_max,
            });
        }

        batch.features_len[b] = utt.features_len as i64;
        for t in 0..utt.features_len {
            let frame = &utt.features[t * width..(t + 1) * width];
            batch.features[t].row_mut(b).assign(&ArrayView1::from(frame));
        }

        batch.text[b] = utt.text.clone();

        batch.tokens_len[b] = tokens_len as i64;
        for s in 0..tokens_len {
            batch.tokens[s][b] = match self.config.token_mode {
                TokenMode::Counts => tokens_len as i64,
                TokenMode::Ids => utt.tokens[s],
            };
            batch.tokens_weights[s][b] = 1.0;
        }

        batch.uttid[b] = utt.uttid.clone();
        Ok(())
    }
}

/// The batch parse operation: decode serialized utterance records and pack
/// them into fixed-shape, padded output buffers.
///
/// Stateless across batches; only the configuration is fixed at
/// construction. Any failure aborts the whole batch and no partial output
/// is returned.
#[derive(Debug, Clone, Copy)]
pub struct UtteranceParser {
    config: ParserConfig,
}

impl UtteranceParser {
    /// Create a parser with a fixed configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Operation configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one batch of serialized records into padded output buffers.
    ///
    /// Phases run strictly in order: decode example 0, infer the batch
    /// shape from it and allocate every buffer, then decode and pack each
    /// example sequentially.
    pub fn parse_batch<S: AsRef<[u8]>>(&self, serialized: &[S]) -> Result<UtteranceBatch> {
        let first = serialized.first().ok_or(PackError::EmptyBatch)?;
        let first_utt = decode_example(0, first.as_ref())?;

        let shape = BatchShape::infer(serialized.len(), &first_utt)?;
        let packer = BatchPacker::new(self.config, shape);
        let mut batch = UtteranceBatch::allocate(&self.config, shape);

        packer.pack_into(0, &first_utt, &mut batch)?;
        for (b, bytes) in serialized.iter().enumerate().skip(1) {
            let utt = decode_example(b, bytes.as_ref())?;
            packer.pack_into(b, &utt, &mut batch)?;
        }
        Ok(batch)
    }
}

/// Decode one serialized record and extract its required fields.
fn decode_example(index: usize, bytes: &[u8]) -> Result<Utterance> {
    let record =
        Record::from_bytes(bytes).map_err(|source| PackError::Decode { index, source })?;
    Utterance::from_record(index, &record)
}
