//! Decoded, validated view of one utterance record

use crate::error::{PackError, Result};

use super::field::{FieldValue, Record};

/// Field names fixed by the encoder contract.
const FEATURES_LEN: &str = "features_len";
const FEATURES: &str = "features";
const TEXT: &str = "text";
const TOKENS: &str = "tokens";
const UTTID: &str = "uttid";

/// One decoded utterance: the five required fields of a record, with
/// presence and basic-shape checks already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Declared number of feature frames
    pub features_len: usize,
    /// Flat feature values, `features_len * width` long
    pub features: Vec<f32>,
    /// Transcript bytes, verbatim
    pub text: Vec<u8>,
    /// Token-id sequence
    pub tokens: Vec<i64>,
    /// Utterance identifier bytes, verbatim
    pub uttid: Vec<u8>,
}

impl Utterance {
    /// Extract the five required fields from a decoded record.
    ///
    /// `index` is the record's position in its batch, carried into any
    /// error so the host can report which example failed.
    pub fn from_record(index: usize, record: &Record) -> Result<Self> {
        let declared = first_int64(index, record, FEATURES_LEN)?;
        if declared <= 0 {
            return Err(PackError::InvalidFeaturesLen { index, value: declared });
        }

        Ok(Self {
            features_len: declared as usize,
            features: floats(index, record, FEATURES)?.to_vec(),
            text: first_bytes(index, record, TEXT)?.to_vec(),
            tokens: int64s(index, record, TOKENS)?.to_vec(),
            uttid: first_bytes(index, record, UTTID)?.to_vec(),
        })
    }

    /// Per-frame feature width inferred from the flat value count.
    ///
    /// The width is not stored in the record; it must divide out exactly
    /// from `len(features) / features_len`.
    pub fn feature_width(&self, index: usize) -> Result<usize> {
        if self.features.len() % self.features_len != 0 {
            return Err(PackError::RaggedFeatures {
                index,
                values: self.features.len(),
                frames: self.features_len,
            });
        }
        Ok(self.features.len() / self.features_len)
    }

    /// Number of tokens in this utterance.
    #[must_use]
    pub fn tokens_len(&self) -> usize {
        self.tokens.len()
    }
}

fn lookup<'a>(index: usize, record: &'a Record, field: &'static str) -> Result<&'a FieldValue> {
    record
        .get(field)
        .ok_or(PackError::MissingField { index, field })
}

fn int64s<'a>(index: usize, record: &'a Record, field: &'static str) -> Result<&'a [i64]> {
    match lookup(index, record, field)? {
        FieldValue::Int64List(values) => Ok(values),
        other => Err(PackError::FieldType {
            index,
            field,
            expected: "an int64 list",
            actual: other.type_name(),
        }),
    }
}

fn floats<'a>(index: usize, record: &'a Record, field: &'static str) -> Result<&'a [f32]> {
    match lookup(index, record, field)? {
        FieldValue::FloatList(values) => Ok(values),
        other => Err(PackError::FieldType {
            index,
            field,
            expected: "a float list",
            actual: other.type_name(),
        }),
    }
}

fn bytes_list<'a>(
    index: usize,
    record: &'a Record,
    field: &'static str,
) -> Result<&'a [Vec<u8>]> {
    match lookup(index, record, field)? {
        FieldValue::BytesList(values) => Ok(values),
        other => Err(PackError::FieldType {
            index,
            field,
            expected: "a bytes list",
            actual: other.type_name(),
        }),
    }
}

fn first_int64(index: usize, record: &Record, field: &'static str) -> Result<i64> {
    int64s(index, record, field)?
        .first()
        .copied()
        .ok_or(PackError::EmptyField { index, field })
}

fn first_bytes<'a>(index: usize, record: &'a Record, field: &'static str) -> Result<&'a [u8]> {
    bytes_list(index, record, field)?
        .first()
        .map(Vec::as_slice)
        .ok_or(PackError::EmptyField { index, field })
}
