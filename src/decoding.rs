//! A decoder for tagged, length-prefixed value streams. It is explicitly
//! designed not to accept any sort of invalid framing: truncated nodes,
//! trailing bytes, unknown tags and malformed fields all fail the whole
//! call.
//!
//! # Decoding a value
//!
//! The decoder needs the complete buffer up front; there is no streaming
//! mode. The root node must span the entire input:
//!
//! ```
//! use padcode::{Value, decoding::Decoder};
//!
//! let bytes = padcode::encode(&Value::from("hello")).unwrap();
//! let value = Decoder::new(&bytes).decode()?;
//! assert_eq!(value, Value::from("hello"));
//! # Ok::<(), padcode::decoding::Error>(())
//! ```
//!
//! # Nesting depth limits
//!
//! Container bodies are decoded recursively, so a hostile buffer could
//! otherwise nest arrays deep enough to exhaust the call stack. The decoder
//! refuses to descend past its depth limit
//! ([`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) unless overridden with
//! [`Decoder::with_max_depth`]).

mod decoder;
mod error;

pub use self::{decoder::Decoder, error::Error};
