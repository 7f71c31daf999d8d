use std::str;

use thiserror::Error;

/// An enumeration of potential errors that appear while decoding a buffer.
///
/// Offsets are measured from the start of the buffer handed to
/// [`Decoder::new`](crate::decoding::Decoder::new).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The buffer ended in the middle of a node.
    #[error("reached end of buffer in the middle of a node")]
    UnexpectedEof,

    /// A node started with a byte outside the ten known tags.
    #[error("unknown type tag {tag:#04x} at offset {offset}")]
    UnknownTag {
        /// The unrecognized tag byte
        tag: u8,
        /// Where in the buffer it was found
        offset: usize,
    },

    /// A numeric field did not parse as a number once its padding was
    /// stripped.
    #[error("could not parse numeric field {text:?}")]
    InvalidNumber {
        /// The field content after the sign scan
        text: String,
    },

    /// A boolean payload was neither 0 nor 1.
    #[error("boolean payload must be 0 or 1, got {0}")]
    InvalidBool(u8),

    /// A string body was not valid UTF-8.
    #[error("string body is not valid UTF-8")]
    InvalidUtf8(#[from] str::Utf8Error),

    /// A child node reported zero consumed bytes, which would loop forever.
    #[error("child node at offset {0} consumed no bytes")]
    StalledNode(usize),

    /// An object body held an odd number of nodes, leaving a key without a
    /// value.
    #[error("object body holds a key with no value")]
    DanglingKey,

    /// An object key node was neither a String nor an Int.
    #[error("object key must be a String or Int node, found {0}")]
    InvalidKey(&'static str),

    /// The root node ended before the buffer did.
    #[error("{trailing} trailing bytes after the root node")]
    TrailingBytes {
        /// How many bytes the root node left unconsumed
        trailing: usize,
    },

    /// Containers were nested past the decoder's depth limit.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}

#[test]
fn decoding_errors_are_sync_send() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    is_send::<Error>();
    is_sync::<Error>();
}
