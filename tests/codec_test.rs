//! Round-trip and wire-shape coverage for the whole codec surface.

use padcode::{Key, TypeTag, Value, decoding, encoding};

// -----------------------------------------------------------------------------
// Macros
// -----------------------------------------------------------------------------

macro_rules! array(
    {} => { Value::Array(Vec::new()) };
    { $($value:expr),+ } => {
        {
            let mut items = Vec::new();
            $( items.push(Value::from($value)); )+

            Value::Array(items)
        }
     };
);

macro_rules! object(
    {} => { Value::Object(Vec::new()) };
    { $($key:expr => $value:expr),+ } => {
        {
            let mut entries = Vec::new();
            $( entries.push((Key::from($key), Value::from($value))); )+

            Value::Object(entries)
        }
     };
);

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn number_node(tag: TypeTag, literal: &str) -> Vec<u8> {
    let mut node = vec![tag as u8];
    node.resize(1 + 20 - literal.len(), b'0');
    node.extend_from_slice(literal.as_bytes());
    node
}

fn block_node(tag: TypeTag, body: &[u8]) -> Vec<u8> {
    let mut node = vec![tag as u8];
    node.extend_from_slice(format!("{:010}", body.len()).as_bytes());
    node.extend_from_slice(body);
    node
}

fn round_trip(value: &Value) -> Value {
    let encoded = padcode::encode(value).expect("encoding should succeed");
    padcode::decode(&encoded).expect("decoding should succeed")
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[test]
fn scalar_test_pairs() {
    let pairs = [
        (Value::Null, vec![TypeTag::Null as u8]),
        (Value::Undefined, vec![TypeTag::Undefined as u8]),
        (Value::Bool(true), vec![TypeTag::Boolean as u8, 1]),
        (Value::Bool(false), vec![TypeTag::Boolean as u8, 0]),
        (Value::Int(0), number_node(TypeTag::Int, "0")),
        (Value::Int(1234567890), number_node(TypeTag::Int, "1234567890")),
        (Value::Int(-42), number_node(TypeTag::Int, "-42")),
        (Value::Float(-3.5), number_node(TypeTag::Float, "-3.5")),
        (Value::Float(0.25), number_node(TypeTag::Float, "0.25")),
        (
            Value::Date(1_600_000_000_000),
            number_node(TypeTag::Date, "1600000000000"),
        ),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = padcode::encode(original).unwrap();
        assert_eq!(&encoded, expected_encoding, "encoding `{:?}`", original);

        let decoded = padcode::decode(&encoded).unwrap();
        assert_eq!(&decoded, original);
    }
}

#[test]
fn string_test_pairs() {
    let pairs = [
        ("", block_node(TypeTag::String, b"")),
        ("hello", block_node(TypeTag::String, b"hello")),
        ("hello world", block_node(TypeTag::String, b"hello world")),
        ("1-5%3~]+=\\| []>.,`??", block_node(TypeTag::String, b"1-5%3~]+=\\| []>.,`??")),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = padcode::encode(&Value::from(*original)).unwrap();
        assert_eq!(&encoded, expected_encoding);

        let decoded = padcode::decode(&encoded).unwrap();
        assert_eq!(decoded, Value::from(*original));
    }
}

#[test]
fn size_framing_is_exact() {
    // The ten-digit size field must equal the body length, and total
    // consumption must be exactly 11 + size.
    let value = object! { "name" => "padcode", "revision" => 3 };
    let encoded = padcode::encode(&value).unwrap();

    let size: usize = std::str::from_utf8(&encoded[1..11]).unwrap().parse().unwrap();
    assert_eq!(encoded.len(), 11 + size);

    // Chopping any suffix off must fail, never return a partial value.
    for cut in 1..encoded.len() {
        assert!(
            padcode::decode(&encoded[..cut]).is_err(),
            "prefix of {} bytes unexpectedly decoded",
            cut
        );
    }
}

#[test]
fn integral_float_loses_its_floatness() {
    assert_eq!(round_trip(&Value::Float(5.0)), Value::Int(5));
    assert_eq!(round_trip(&Value::Float(-2.0)), Value::Int(-2));
    assert_eq!(round_trip(&Value::Float(5.5)), Value::Float(5.5));

    // The collapse stops at the i64 range boundary: in-range integral
    // floats come back as Int, anything past it keeps the Float tag and
    // round-trips through f64 parsing.
    assert_eq!(
        round_trip(&Value::Float(9.2e18)),
        Value::Int(9_200_000_000_000_000_000)
    );
    assert_eq!(
        round_trip(&Value::Float(-9.2e18)),
        Value::Int(-9_200_000_000_000_000_000)
    );
    assert_eq!(round_trip(&Value::Float(1e19)), Value::Float(1e19));
    assert_eq!(round_trip(&Value::Float(-9.3e18)), Value::Float(-9.3e18));
    assert_eq!(
        round_trip(&Value::Float(i64::MIN as f64)),
        Value::Int(i64::MIN)
    );
}

#[test]
fn negative_numbers_round_trip() {
    assert_eq!(round_trip(&Value::Int(-42)), Value::Int(-42));
    assert_eq!(round_trip(&Value::Float(-3.5)), Value::Float(-3.5));
    assert_eq!(round_trip(&Value::Int(i64::MIN)), Value::Int(i64::MIN));
    assert_eq!(round_trip(&Value::Date(-86_400_000)), Value::Date(-86_400_000));
}

#[test]
fn empty_containers_frame_as_size_zero() {
    let encoded = padcode::encode(&array! {}).unwrap();
    assert_eq!(encoded, block_node(TypeTag::Array, b""));
    assert_eq!(padcode::decode(&encoded).unwrap(), array! {});

    let encoded = padcode::encode(&object! {}).unwrap();
    assert_eq!(encoded, block_node(TypeTag::Object, b""));
    assert_eq!(padcode::decode(&encoded).unwrap(), object! {});
}

#[test]
fn deep_nesting_preserves_order() {
    // Four container levels: array > object > array > object.
    let value = array![
        object! {
            "first" => array![
                object! { "a" => 1i64, "b" => 2i64 },
                object! { "b" => 2i64, "a" => 1i64 }
            ],
            "second" => array![10i64, 20i64, 30i64]
        },
        array![true, false]
    ];

    assert_eq!(round_trip(&value), value);
}

#[test]
fn mixed_key_object_with_every_type() {
    let value = Value::Object(vec![
        (Key::from("null"), Value::Null),
        (Key::from("undefined"), Value::Undefined),
        (Key::from("bool"), Value::Bool(true)),
        (Key::from("int"), Value::Int(-7)),
        (Key::from("float"), Value::Float(0.5)),
        (Key::from("string"), Value::from("text")),
        (Key::from("array"), array![1i64, "two", 3.5]),
        (Key::from("object"), object! { "inner" => "value" }),
        (Key::from("date"), Value::Date(1_600_000_000_000)),
        (Key::from("bytes"), Value::Bytes(vec![0, 159, 146, 150])),
        (Key::Int(42), Value::from("integer keyed")),
    ]);

    assert_eq!(round_trip(&value), value);
}

#[test]
fn bytes_bodies_are_not_text() {
    // A blob that is deliberately invalid UTF-8 must pass through verbatim.
    let value = Value::Bytes(vec![0xff, 0xfe, 0x00, 0x7f]);
    assert_eq!(round_trip(&value), value);
}

#[test]
fn truncation_is_detected() {
    let encoded = padcode::encode(&array!["hello", "world"]).unwrap();

    // Cut mid-body of the second string.
    let truncated = &encoded[..encoded.len() - 2];
    assert_eq!(
        padcode::decode(truncated).unwrap_err(),
        decoding::Error::UnexpectedEof
    );
}

#[test]
fn trailing_garbage_is_detected() {
    let mut encoded = padcode::encode(&Value::Int(1)).unwrap();
    encoded.push(0);

    assert_eq!(
        padcode::decode(&encoded).unwrap_err(),
        decoding::Error::TrailingBytes { trailing: 1 }
    );
}

#[test]
fn capacity_limit_is_enforced() {
    // 1e21 renders as 22 digits, one past the 20 character payload.
    assert!(matches!(
        padcode::encode(&Value::Float(1e21)).unwrap_err(),
        encoding::Error::FieldOverflow { .. }
    ));
}

#[test]
fn codec_is_usable_across_threads() {
    // Pure functions over owned data; nothing process-wide to coordinate.
    let value = object! { "n" => 1i64 };
    let encoded = padcode::encode(&value).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoded = encoded.clone();
            let value = value.clone();
            std::thread::spawn(move || {
                assert_eq!(padcode::decode(&encoded).unwrap(), value);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
