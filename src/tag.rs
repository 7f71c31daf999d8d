/// The wire tag identifying which value variant a node encodes.
///
/// The discriminants are the actual tag bytes. They are stable between
/// [`encode`](crate::encode) and [`decode`](crate::decode) within one
/// deployment but are not promised as a cross-version contract.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[repr(u8)]
pub enum TypeTag {
    /// A boolean; one payload byte, 0 or 1
    Boolean = 0,
    /// A number with a fractional part; 20-byte decimal payload
    Float = 1,
    /// An integral number; 20-byte decimal payload
    Int = 2,
    /// UTF-8 text; length-prefixed body
    String = 3,
    /// An ordered sequence of nodes; length-prefixed body
    Array = 4,
    /// Alternating key/value nodes; length-prefixed body
    Object = 5,
    /// Milliseconds since the Unix epoch; 20-byte decimal payload
    Date = 6,
    /// A raw byte blob; length-prefixed body
    Bytes = 7,
    /// The null value; no payload
    Null = 8,
    /// The absent value, distinct from null; no payload
    Undefined = 9,
}

impl TypeTag {
    /// Look up the tag for a wire byte. Returns `None` for bytes outside the
    /// ten known tags.
    pub fn from_byte(byte: u8) -> Option<Self> {
        let tag = match byte {
            0 => TypeTag::Boolean,
            1 => TypeTag::Float,
            2 => TypeTag::Int,
            3 => TypeTag::String,
            4 => TypeTag::Array,
            5 => TypeTag::Object,
            6 => TypeTag::Date,
            7 => TypeTag::Bytes,
            8 => TypeTag::Null,
            9 => TypeTag::Undefined,
            _ => return None,
        };
        Some(tag)
    }

    /// The tag's name, for error messages.
    pub fn name(&self) -> &'static str {
        match *self {
            TypeTag::Boolean => "Boolean",
            TypeTag::Float => "Float",
            TypeTag::Int => "Int",
            TypeTag::String => "String",
            TypeTag::Array => "Array",
            TypeTag::Object => "Object",
            TypeTag::Date => "Date",
            TypeTag::Bytes => "Bytes",
            TypeTag::Null => "Null",
            TypeTag::Undefined => "Undefined",
        }
    }
}
