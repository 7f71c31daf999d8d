//! `Value`s hold arbitrary owned codec data. Callers build them through the
//! variant constructors, so every value is representable by construction;
//! there is no runtime type sniffing anywhere in the crate.

use crate::{
    TypeTag,
    decoding::{self, Decoder},
    encoding::{self, Encoder},
};

/// An object key. Keys are encoded as String or Int nodes, matching
/// whichever type the key naturally is.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    /// A text key
    String(String),
    /// An integer key
    Int(i64),
}

/// An owned codec value.
///
/// Objects keep their entries as an ordered pair list rather than a map, so
/// a decoded object iterates in exactly the order its entries were encoded.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// The null value
    Null,
    /// The absent value, distinct from null
    Undefined,
    /// A boolean
    Bool(bool),
    /// An integral number
    Int(i64),
    /// A number with a fractional part
    Float(f64),
    /// UTF-8 text
    String(String),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// A mapping in insertion order
    Object(Vec<(Key, Value)>),
    /// An instant in time, as milliseconds since the Unix epoch
    Date(i64),
    /// A raw byte blob
    Bytes(Vec<u8>),
}

impl Value {
    /// The wire tag this value encodes with.
    ///
    /// The only variant that does not map 1:1 is `Float`: a float without a
    /// fractional part that fits in `i64` takes the Int tag, so `5.0`
    /// encodes identically to `5` and round-trips as `Int(5)`. Integral
    /// floats past the `i64` range keep the Float tag, since an Int payload
    /// of that magnitude could not be parsed back.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Undefined => TypeTag::Undefined,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Int(_) => TypeTag::Int,
            Value::Float(float) if fits_int_payload(*float) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Date(_) => TypeTag::Date,
            Value::Bytes(_) => TypeTag::Bytes,
        }
    }

    /// Encode this value with the default depth limit.
    pub fn to_bytes(&self) -> Result<Vec<u8>, encoding::Error> {
        Encoder::new().encode(self)
    }

    /// Decode a value from its byte representation with the default depth
    /// limit.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, decoding::Error> {
        Decoder::new(bytes).decode()
    }
}

/// Whether a float collapses to the Int tag: integral, and inside the range
/// the decoder parses Int payloads back from (`i64`).
fn fits_int_payload(float: f64) -> bool {
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive;
    // i64::MIN is exactly representable and stays inclusive.
    float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float < i64::MAX as f64
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::String(key.to_owned())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::String(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Int(key)
    }
}
