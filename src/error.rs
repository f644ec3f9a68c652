//! Error types for batch parsing and packing
//!
//! Every failure aborts the whole batch: the caller sees either a
//! fully-populated set of output buffers or one of these errors, never a
//! partially written batch.

use thiserror::Error;

/// Result type for parse/pack operations
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while decoding records or packing a batch
#[derive(Debug, Error)]
pub enum PackError {
    /// Record bytes could not be decoded into a field map
    #[error("record {index}: malformed record bytes: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A required field is absent from the decoded record
    #[error("record {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A field is present but holds the wrong value-list type
    #[error("record {index}: field '{field}' holds {actual}, expected {expected}")]
    FieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// A scalar field's value list is empty
    #[error("record {index}: field '{field}' has no values")]
    EmptyField { index: usize, field: &'static str },

    /// Declared feature length is zero or negative
    #[error("record {index}: features_len must be positive, got {value}")]
    InvalidFeaturesLen { index: usize, value: i64 },

    /// Flat feature count does not divide evenly into the declared frame count
    #[error("record {index}: {values} feature values do not divide into {frames} frames")]
    RaggedFeatures {
        index: usize,
        values: usize,
        frames: usize,
    },

    /// Example's inferred feature width differs from the batch width
    #[error("record {index}: feature width {actual} differs from batch width {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// `features_len` exceeds the configured maximum
    #[error("record {index}: features_len {len} exceeds features_len_max {max}")]
    FeaturesOverflow { index: usize, len: usize, max: usize },

    /// Token count exceeds the configured maximum
    #[error("record {index}: {len} tokens exceed tokens_len_max {max}")]
    TokensOverflow { index: usize, len: usize, max: usize },

    /// The batch contains no records
    #[error("cannot pack an empty batch")]
    EmptyBatch,
}

impl PackError {
    /// Index of the record that caused the failure, if any.
    #[must_use]
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::Decode { index, .. }
            | Self::MissingField { index, .. }
            | Self::FieldType { index, .. }
            | Self::EmptyField { index, .. }
            | Self::InvalidFeaturesLen { index, .. }
            | Self::RaggedFeatures { index, .. }
            | Self::WidthMismatch { index, .. }
            | Self::FeaturesOverflow { index, .. }
            | Self::TokensOverflow { index, .. } => Some(*index),
            Self::EmptyBatch => None,
        }
    }

    /// True when the input violated a configured length bound.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            Self::FeaturesOverflow { .. } | Self::TokensOverflow { .. }
        )
    }
}
