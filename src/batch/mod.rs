//! Shape inference, buffer allocation and per-example packing
//!
//! One batch flows through three phases: decode each record, infer the
//! batch shape from example 0 and allocate every output buffer with its
//! fill value, then pack each example's rows into its batch offset.
//! [`UtteranceParser::parse_batch`] runs all three in order.

mod buffers;
mod config;
mod packer;
mod shape;


pub use buffers::{UtteranceBatch, TOKEN_PAD};
pub use config::{ParserConfig, TokenMode};
pub use packer::{BatchPacker, UtteranceParser};
pub use shape::BatchShape;
