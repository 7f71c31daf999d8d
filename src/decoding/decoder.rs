use std::str::{self, FromStr};

use crate::{
    DEFAULT_MAX_DEPTH, Key, NUMBER_WIDTH, SIZE_WIDTH, TypeTag, Value, decoding::Error,
};

/// A decoder over a complete in-memory buffer.
///
/// Decoding is a recursive descent over the node grammar: the tag byte
/// determines the rule, the rule determines exactly how many bytes the node
/// consumes, and composite nodes advance through their body by the amounts
/// their children report.
#[derive(Debug)]
pub struct Decoder<'ser> {
    source: &'ser [u8],
    max_depth: usize,
}

impl<'ser> Decoder<'ser> {
    /// Create a new decoder over the given byte buffer.
    pub fn new(buffer: &'ser [u8]) -> Self {
        Decoder {
            source: buffer,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum container nesting depth of the decoder. An
    /// unlimited-depth decoder may be created with
    /// `with_max_depth(usize::MAX)`, but be warned that a hostile buffer can
    /// then nest deep enough to exhaust the call stack.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decode the single root node, which must span the entire buffer.
    pub fn decode(&self) -> Result<Value, Error> {
        let (value, consumed) = self.decode_node(self.source, 0, self.max_depth)?;

        if consumed < self.source.len() {
            return Err(Error::TrailingBytes {
                trailing: self.source.len() - consumed,
            });
        }

        Ok(value)
    }

    /// Decode the node at the front of `input`, returning the value and the
    /// number of bytes it consumed. `offset` is where `input` starts in the
    /// original buffer, for error reporting.
    fn decode_node(
        &self,
        input: &[u8],
        offset: usize,
        remaining_depth: usize,
    ) -> Result<(Value, usize), Error> {
        let tag_byte = *input.first().ok_or(Error::UnexpectedEof)?;
        let tag = TypeTag::from_byte(tag_byte).ok_or(Error::UnknownTag {
            tag: tag_byte,
            offset,
        })?;

        match tag {
            TypeTag::Null => Ok((Value::Null, 1)),
            TypeTag::Undefined => Ok((Value::Undefined, 1)),
            TypeTag::Boolean => {
                let payload = *input.get(1).ok_or(Error::UnexpectedEof)?;
                match payload {
                    0 => Ok((Value::Bool(false), 2)),
                    1 => Ok((Value::Bool(true), 2)),
                    other => Err(Error::InvalidBool(other)),
                }
            },
            TypeTag::Int => {
                let num = parse_number(number_field(input)?)?;
                Ok((Value::Int(num), 1 + NUMBER_WIDTH))
            },
            TypeTag::Float => {
                let num = parse_number(number_field(input)?)?;
                Ok((Value::Float(num), 1 + NUMBER_WIDTH))
            },
            TypeTag::Date => {
                let millis = parse_number(number_field(input)?)?;
                Ok((Value::Date(millis), 1 + NUMBER_WIDTH))
            },
            TypeTag::String => {
                let (body, consumed) = sized_body(input)?;
                let text = str::from_utf8(body)?;
                Ok((Value::String(text.to_owned()), consumed))
            },
            TypeTag::Bytes => {
                let (body, consumed) = sized_body(input)?;
                Ok((Value::Bytes(body.to_vec()), consumed))
            },
            TypeTag::Array => {
                let remaining_depth = remaining_depth
                    .checked_sub(1)
                    .ok_or(Error::NestingTooDeep)?;

                let (body, consumed) = sized_body(input)?;
                let items = self.collect_nodes(body, offset + 1 + SIZE_WIDTH, remaining_depth)?;
                Ok((Value::Array(items), consumed))
            },
            TypeTag::Object => {
                let remaining_depth = remaining_depth
                    .checked_sub(1)
                    .ok_or(Error::NestingTooDeep)?;

                let (body, consumed) = sized_body(input)?;
                let nodes = self.collect_nodes(body, offset + 1 + SIZE_WIDTH, remaining_depth)?;
                Ok((Value::Object(pair_entries(nodes)?), consumed))
            },
        }
    }

    /// Parse back-to-back child nodes until the body region is exactly
    /// consumed.
    fn collect_nodes(
        &self,
        body: &[u8],
        offset: usize,
        remaining_depth: usize,
    ) -> Result<Vec<Value>, Error> {
        let mut values = Vec::new();
        let mut cursor = 0;

        while cursor < body.len() {
            let (value, consumed) =
                self.decode_node(&body[cursor..], offset + cursor, remaining_depth)?;

            // A child that consumes nothing would loop forever.
            if consumed == 0 {
                return Err(Error::StalledNode(offset + cursor));
            }

            values.push(value);
            cursor += consumed;
        }

        Ok(values)
    }
}

/// Re-pair a flat object body into (key, value) entries, in body order.
fn pair_entries(nodes: Vec<Value>) -> Result<Vec<(Key, Value)>, Error> {
    let mut entries = Vec::with_capacity(nodes.len() / 2);
    let mut nodes = nodes.into_iter();

    while let Some(key) = nodes.next() {
        let value = nodes.next().ok_or(Error::DanglingKey)?;

        let key = match key {
            Value::String(text) => Key::String(text),
            Value::Int(num) => Key::Int(num),
            other => return Err(Error::InvalidKey(other.tag().name())),
        };

        entries.push((key, value));
    }

    Ok(entries)
}

/// The 20-character payload of an Int, Float or Date node, as text.
fn number_field(input: &[u8]) -> Result<&str, Error> {
    let field = input
        .get(1..1 + NUMBER_WIDTH)
        .ok_or(Error::UnexpectedEof)?;

    str::from_utf8(field).map_err(|_| Error::InvalidNumber {
        text: String::from_utf8_lossy(field).into_owned(),
    })
}

/// Parse a zero-padded decimal field. The padding character is `'0'`, so a
/// `'-'` anywhere past position 0 marks where the actual literal starts;
/// everything before it is padding.
fn parse_number<T: FromStr>(field: &str) -> Result<T, Error> {
    let literal = match field.find('-') {
        Some(pos) if pos > 0 => &field[pos..],
        _ => field,
    };

    literal.parse().map_err(|_| Error::InvalidNumber {
        text: literal.to_owned(),
    })
}

/// Read the ten-digit size field of a length-prefixed node and slice out its
/// body. Returns the body and the node's total consumption, `11 + size`.
fn sized_body(input: &[u8]) -> Result<(&[u8], usize), Error> {
    let field = input.get(1..1 + SIZE_WIDTH).ok_or(Error::UnexpectedEof)?;
    let text = str::from_utf8(field).map_err(|_| Error::InvalidNumber {
        text: String::from_utf8_lossy(field).into_owned(),
    })?;
    let size: usize = parse_number(text)?;

    let body = input
        .get(1 + SIZE_WIDTH..1 + SIZE_WIDTH + size)
        .ok_or(Error::UnexpectedEof)?;

    Ok((body, 1 + SIZE_WIDTH + size))
}
