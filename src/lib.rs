//! Encodes and decodes dynamically typed value graphs as tagged,
//! length-prefixed byte streams.
//!
//! Every encoded node is self-describing: a single tag byte followed by
//! either a fixed-width payload (booleans, numbers, dates) or a ten-digit
//! decimal size field and a body of exactly that many bytes (strings, byte
//! blobs, arrays, objects). All framing fields are decimal ASCII, so the
//! format is trivially reproducible from any language.
//!
//! The decoder does not accept truncated input or trailing garbage, and both
//! sides bound their recursion depth so hostile nesting cannot exhaust the
//! call stack.
//!
//! # Encoding
//!
//! ```
//! use padcode::Value;
//!
//! let value = Value::Array(vec![Value::Int(7), Value::from("hello")]);
//! let bytes = padcode::encode(&value)?;
//! # padcode::decode(&bytes).unwrap();
//! # Ok::<(), padcode::encoding::Error>(())
//! ```
//!
//! # Decoding
//!
//! ```
//! use padcode::Value;
//!
//! let bytes = padcode::encode(&Value::Int(7)).unwrap();
//! assert_eq!(padcode::decode(&bytes)?, Value::Int(7));
//! # Ok::<(), padcode::decoding::Error>(())
//! ```
#![cfg_attr(not(test), warn(missing_docs))]

pub mod decoding;
pub mod encoding;
mod tag;
mod value;

pub use crate::{
    tag::TypeTag,
    value::{Key, Value},
};

/// Default maximum nesting depth for both encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 2048;

/// Width of the decimal size field of a length-prefixed node.
pub(crate) const SIZE_WIDTH: usize = 10;

/// Width of the decimal payload of an Int, Float or Date node.
pub(crate) const NUMBER_WIDTH: usize = 20;

/// Encode a value with the default nesting depth limit.
///
/// Use [`encoding::Encoder`] directly to pick a different limit.
pub fn encode(value: &Value) -> Result<Vec<u8>, encoding::Error> {
    encoding::Encoder::new().encode(value)
}

/// Decode a single value from `bytes` with the default nesting depth limit.
///
/// The root node must span the entire buffer; trailing bytes are rejected.
/// Use [`decoding::Decoder`] directly to pick a different limit.
pub fn decode(bytes: &[u8]) -> Result<Value, decoding::Error> {
    decoding::Decoder::new(bytes).decode()
}
