use bencoding::{decode, encode, encode_to, Dictionary, List, Value};

/// Helper: encode and compare against the expected wire text.
fn assert_encodes(value: &Value, expected: &str) {
    let encoded = encode(value);
    assert_eq!(
        encoded,
        expected.as_bytes(),
        "encoding mismatch:\n  actual:   {}\n  expected: {expected}",
        String::from_utf8_lossy(&encoded)
    );
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn encode_integer_zero() {
    assert_encodes(&Value::integer(0), "i0e");
}

#[test]
fn encode_positive_integer() {
    assert_encodes(&Value::integer(13), "i13e");
}

#[test]
fn encode_negative_integer() {
    assert_encodes(&Value::integer(-13), "i-13e");
}

#[test]
fn encode_integer_extremes() {
    assert_encodes(&Value::integer(i64::MAX), "i9223372036854775807e");
    assert_encodes(&Value::integer(i64::MIN), "i-9223372036854775808e");
}

#[test]
fn encode_empty_string() {
    assert_encodes(&Value::string(""), "0:");
}

#[test]
fn encode_string() {
    assert_encodes(&Value::string("test"), "4:test");
}

#[test]
fn encode_binary_string_verbatim() {
    let value = Value::string(&[0u8, 0xff, b':', b'e']);
    assert_eq!(encode(&value), b"4:\x00\xff:e");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn encode_empty_list() {
    assert_encodes(&Value::list(), "le");
}

#[test]
fn encode_list_with_two_strings() {
    let list: List = ["test", "hello"].into_iter().collect();
    assert_encodes(&Value::from(list), "l4:test5:helloe");
}

#[test]
fn encode_nested_list() {
    let mut inner = List::new();
    inner.push(1);
    let mut outer = List::new();
    outer.push(inner);
    outer.push(Value::list());
    assert_encodes(&Value::from(outer), "lli1eelee");
}

// ============================================================================
// Dictionaries
// ============================================================================

#[test]
fn encode_empty_dictionary() {
    assert_encodes(&Value::dictionary(), "de");
}

#[test]
fn encode_dictionary_with_one_item() {
    let mut dict = Dictionary::new();
    dict.insert("test", 1);
    assert_encodes(&Value::from(dict), "d4:testi1ee");
}

#[test]
fn encode_dictionary_with_two_items() {
    let mut dict = Dictionary::new();
    dict.insert("test1", 1);
    dict.insert("test2", 2);
    assert_encodes(&Value::from(dict), "d5:test1i1e5:test2i2ee");
}

#[test]
fn encode_dictionary_in_canonical_key_order() {
    let mut dict = Dictionary::new();
    dict.insert("zebra", 1);
    dict.insert("apple", 2);
    dict.insert("mango", 3);
    assert_encodes(&Value::from(dict), "d5:applei2e5:mangoi3e5:zebrai1ee");
}

#[test]
fn encode_dictionary_orders_by_bytes_not_length() {
    let dict = Dictionary::from_pairs([("b", 1i64), ("aa", 2), ("a", 3)]);
    assert_encodes(&Value::from(dict), "d1:ai3e2:aai2e1:bi1ee");
}

#[test]
fn encode_dictionary_skips_vacant_slots() {
    let mut dict = Dictionary::new();
    dict.slot("vacant");
    dict.insert("set", 1);
    assert_encodes(&Value::from(dict), "d3:seti1ee");
}

#[test]
fn encode_nested_dictionary() {
    let info = Dictionary::from_pairs([
        ("name", Value::string("file.txt")),
        ("length", Value::integer(1024)),
    ]);
    let mut root = Dictionary::new();
    root.insert("info", info);
    root.insert("announce", "http://tracker");
    assert_encodes(
        &Value::from(root),
        "d8:announce14:http://tracker4:infod6:lengthi1024e4:name8:file.txtee",
    );
}

// ============================================================================
// Canonicalization and writer output
// ============================================================================

#[test]
fn reencoding_unsorted_input_sorts_keys() {
    let value = decode("d1:ci3e1:ai1e1:bi2ee").unwrap();
    assert_eq!(encode(&value), b"d1:ai1e1:bi2e1:ci3ee");
}

#[test]
fn reencoding_sorted_input_is_identity() {
    let wire = b"d4:infod6:lengthi10e4:name4:teste4:listli1e2:abee";
    let value = decode(wire).unwrap();
    assert_eq!(encode(&value), wire);
}

#[test]
fn encode_to_writer_matches_encode() {
    let value = decode("l4:spami-1ee").unwrap();
    let mut out = Vec::new();
    encode_to(&value, &mut out).unwrap();
    assert_eq!(out, encode(&value));
}
