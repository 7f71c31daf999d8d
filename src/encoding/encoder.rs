use std::fmt::Display;

use crate::{
    DEFAULT_MAX_DEPTH, Key, NUMBER_WIDTH, SIZE_WIDTH, TypeTag, Value, encoding::Error,
};

/// The actual encoder. Every call to [`Encoder::encode`] produces a freshly
/// allocated buffer holding exactly one node; the encoder itself only
/// carries configuration and may be reused.
#[derive(Debug)]
pub struct Encoder {
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Encoder {
    /// Create a new encoder with the default depth limit.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Set the maximum container nesting depth of the encoded value. Scalars
    /// do not count against the limit, so `with_max_depth(1)` still encodes
    /// a flat array of atoms.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Encode a single value as a self-describing node.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, Error> {
        self.encode_value(value, self.max_depth)
    }

    fn encode_value(&self, value: &Value, remaining_depth: usize) -> Result<Vec<u8>, Error> {
        match value {
            Value::Null | Value::Undefined => Ok(vec![value.tag() as u8]),
            Value::Bool(flag) => Ok(vec![TypeTag::Boolean as u8, u8::from(*flag)]),
            Value::Int(num) => number_node(TypeTag::Int, num),
            Value::Float(float) => {
                if !float.is_finite() {
                    return Err(Error::NonFiniteFloat);
                }
                // An integral float in i64 range takes the Int tag and is
                // rendered through the exact cast, so the payload is the
                // same bytes the equivalent Int would produce. Display
                // would drift near the range boundary: it picks the
                // shortest decimal that round-trips as f64, which may not
                // parse back as i64.
                match value.tag() {
                    TypeTag::Int => number_node(TypeTag::Int, *float as i64),
                    tag => number_node(tag, float),
                }
            },
            Value::Date(millis) => number_node(TypeTag::Date, millis),
            Value::String(text) => block_node(TypeTag::String, text.as_bytes().to_vec()),
            Value::Bytes(blob) => block_node(TypeTag::Bytes, blob.clone()),
            Value::Array(items) => {
                let remaining_depth = remaining_depth
                    .checked_sub(1)
                    .ok_or(Error::NestingTooDeep)?;

                let chunks = items
                    .iter()
                    .map(|item| self.encode_value(item, remaining_depth))
                    .collect::<Result<Vec<_>, _>>()?;

                block_node(TypeTag::Array, join_chunks(&chunks))
            },
            Value::Object(entries) => {
                let remaining_depth = remaining_depth
                    .checked_sub(1)
                    .ok_or(Error::NestingTooDeep)?;

                let mut chunks = Vec::with_capacity(entries.len() * 2);
                for (key, item) in entries {
                    chunks.push(encode_key(key)?);
                    chunks.push(self.encode_value(item, remaining_depth)?);
                }

                block_node(TypeTag::Object, join_chunks(&chunks))
            },
        }
    }
}

fn encode_key(key: &Key) -> Result<Vec<u8>, Error> {
    match key {
        Key::String(text) => block_node(TypeTag::String, text.as_bytes().to_vec()),
        Key::Int(num) => number_node(TypeTag::Int, num),
    }
}

/// Build a fixed-width numeric node: the tag byte followed by the value's
/// decimal rendering left-padded with `'0'` to twenty characters. Negative
/// values keep their sign where `Display` put it, so the `'-'` ends up
/// mid-field; the decoder's sign scan is the matching half of that contract.
fn number_node(tag: TypeTag, value: impl Display) -> Result<Vec<u8>, Error> {
    let mut node = Vec::with_capacity(1 + NUMBER_WIDTH);
    node.push(tag as u8);
    pad_field(&value.to_string(), NUMBER_WIDTH, &mut node)?;
    Ok(node)
}

/// Build a length-prefixed node: the tag byte, a ten-digit decimal size
/// field, and the body itself.
fn block_node(tag: TypeTag, body: Vec<u8>) -> Result<Vec<u8>, Error> {
    let mut node = Vec::with_capacity(1 + SIZE_WIDTH + body.len());
    node.push(tag as u8);
    pad_field(&body.len().to_string(), SIZE_WIDTH, &mut node)?;
    node.extend_from_slice(&body);
    Ok(node)
}

/// Left-pad `text` with `'0'` to exactly `width` bytes and append it to
/// `out`. Text wider than the field is a hard capacity error.
fn pad_field(text: &str, width: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    if text.len() > width {
        return Err(Error::FieldOverflow {
            text: text.to_owned(),
            width,
        });
    }

    out.resize(out.len() + width - text.len(), b'0');
    out.extend_from_slice(text.as_bytes());
    Ok(())
}

/// Join encoded child nodes into one contiguous allocation. Both container
/// encoders use this to assemble their body before framing it.
fn join_chunks(chunks: &[Vec<u8>]) -> Vec<u8> {
    let length = chunks.iter().map(Vec::len).sum();

    let mut joined = Vec::with_capacity(length);
    for chunk in chunks {
        joined.extend_from_slice(chunk);
    }

    joined
}
