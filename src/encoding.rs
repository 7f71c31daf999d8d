//! An encoder for tagged, length-prefixed value streams. Guarantees that the
//! output is a single well-framed node.
//!
//! # Encoding a value
//!
//! Build a [`Value`](crate::Value) and hand it to [`Encoder::encode`] (or
//! the [`encode`](crate::encode) shorthand, which uses the default depth
//! limit):
//!
//! ```
//! use padcode::{Value, encoding::Encoder};
//!
//! let value = Value::Array(vec![Value::Int(1), Value::from("two")]);
//! let bytes = Encoder::new().encode(&value)?;
//! # Ok::<(), padcode::encoding::Error>(())
//! ```
//!
//! # Nesting depth limits
//!
//! Encoding recurses once per container level, so arbitrarily deep input
//! could exhaust the call stack. The encoder therefore refuses to descend
//! past its depth limit ([`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH)
//! unless overridden with [`Encoder::with_max_depth`]). Scalars never count
//! against the limit.
//!
//! # Error handling
//!
//! All failures are hard errors: a body too large for the ten-digit size
//! field, a numeric rendering wider than its twenty-character payload, a
//! non-finite float, or a container nested past the depth limit. A single
//! failing sub-node fails the whole call; nothing is returned partially.

mod encoder;
mod error;

pub use self::{encoder::Encoder, error::Error};
