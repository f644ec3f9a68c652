//! Serialized utterance records
//!
//! The wire format is a named-field map where every field holds a list of
//! 64-bit integers, a list of floats, or a list of byte strings. An external
//! encoder produces these records; this module decodes them and validates
//! the five fields the packer requires.

mod field;
mod utterance;


pub use field::{FieldValue, Record};
pub use utterance::Utterance;
