//! Batch utterance-record parsing and fixed-shape tensor packing
//!
//! `empacar` decodes a batch of independently serialized utterance records
//! (a variable-length feature sequence, a variable-length token sequence,
//! plus transcript and identifier bytes per record) and repacks them into
//! fixed-shape, padded buffers ready for downstream numeric processing.
//!
//! Padding is deterministic: feature frames past an example's declared
//! length stay `0.0`, token slots past its token count stay `-1`, and the
//! matching weight slots stay `0.0` (`1.0` where populated). The configured
//! maxima are hard bounds; an example exceeding them aborts the whole batch
//! rather than being truncated.
//!
//! # Example
//!
//! ```
//! use empacar::{ParserConfig, Record, UtteranceParser};
//!
//! let record = Record::new()
//!     .with_int64s("features_len", vec![2])
//!     .with_floats("features", vec![1.0, 2.0, 3.0, 4.0])
//!     .with_bytes("text", vec![b"hi".to_vec()])
//!     .with_int64s("tokens", vec![7, 9])
//!     .with_bytes("uttid", vec![b"u1".to_vec()]);
//! let bytes = record.to_bytes()?;
//!
//! let parser = UtteranceParser::new(ParserConfig::new(3, 2));
//! let batch = parser.parse_batch(&[bytes])?;
//!
//! assert_eq!(batch.batch_size(), 1);
//! assert_eq!(batch.features_width(), 2);
//! assert_eq!(batch.features_len[0], 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod error;
pub mod record;

pub use batch::{
    BatchPacker, BatchShape, ParserConfig, TokenMode, UtteranceBatch, UtteranceParser, TOKEN_PAD,
};
pub use error::{PackError, Result};
pub use record::{FieldValue, Record, Utterance};
