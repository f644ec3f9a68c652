//! Wire model for serialized records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One named field's value list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// 64-bit integer values
    Int64List(Vec<i64>),
    /// Floating-point values
    FloatList(Vec<f32>),
    /// Byte-string values
    BytesList(Vec<Vec<u8>>),
}

impl FieldValue {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Int64List(_) => "an int64 list",
            Self::FloatList(_) => "a float list",
            Self::BytesList(_) => "a bytes list",
        }
    }
}

/// A named-field record as produced by the external encoder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an int64-list field
    #[must_use]
    pub fn with_int64s(mut self, name: impl Into<String>, values: Vec<i64>) -> Self {
        self.fields.insert(name.into(), FieldValue::Int64List(values));
        self
    }

    /// Add a float-list field
    #[must_use]
    pub fn with_floats(mut self, name: impl Into<String>, values: Vec<f32>) -> Self {
        self.fields.insert(name.into(), FieldValue::FloatList(values));
        self
    }

    /// Add a bytes-list field
    #[must_use]
    pub fn with_bytes(mut self, name: impl Into<String>, values: Vec<Vec<u8>>) -> Self {
        self.fields.insert(name.into(), FieldValue::BytesList(values));
        self
    }

    /// Look up a field by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to the opaque wire form
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode one record from its wire form
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
