//! Bencoding encoder: serializes a [`Value`] tree back into wire bytes.
//!
//! Each kind emits exactly its grammar production:
//!
//! - **Integer**: `i<decimal>e`
//! - **Byte string**: `<length>:<raw bytes>`
//! - **List**: `l<items>e`, items in list order
//! - **Dictionary**: `d<key><value>...e`, keys in ascending byte order
//!
//! Because [`Dictionary`](crate::Dictionary) always iterates in canonical key
//! order, encoding a decoded tree is deterministic regardless of the order the
//! keys had on the wire. Encoding cannot fail.
//!
//! # Example
//! ```
//! use bencoding::{encode, Dictionary, Value};
//!
//! let dict = Dictionary::from_pairs([("b", 2i64), ("a", 1)]);
//! assert_eq!(encode(&Value::from(dict)), b"d1:ai1e1:bi2ee");
//! ```

use std::io::{self, Write};

use crate::dictionary::Dictionary;
use crate::list::List;
use crate::value::{ByteString, Value};

/// Encode `value` into a freshly allocated byte vector.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_value(value, &mut out);
    out
}

/// Encode `value` into `writer`. Only the writer's own I/O errors are reported.
pub fn encode_to<W: Write + ?Sized>(value: &Value, writer: &mut W) -> io::Result<()> {
    writer.write_all(&encode(value))
}

/// Top-level dispatch, one arm per kind.
fn encode_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => encode_integer(i.value(), out),
        Value::ByteString(s) => encode_byte_string(s, out),
        Value::List(list) => encode_list(list, out),
        Value::Dictionary(dict) => encode_dictionary(dict, out),
    }
}

fn encode_integer(value: i64, out: &mut Vec<u8>) {
    out.push(b'i');
    out.extend_from_slice(value.to_string().as_bytes());
    out.push(b'e');
}

fn encode_byte_string(s: &ByteString, out: &mut Vec<u8>) {
    out.extend_from_slice(s.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(s.value());
}

fn encode_list(list: &List, out: &mut Vec<u8>) {
    out.push(b'l');
    for item in list {
        encode_value(item, out);
    }
    out.push(b'e');
}

/// Vacant slots are skipped; there is no wire form for an absent value.
fn encode_dictionary(dict: &Dictionary, out: &mut Vec<u8>) {
    out.push(b'd');
    for (key, value) in dict.occupied() {
        encode_byte_string(key, out);
        encode_value(value, out);
    }
    out.push(b'e');
}
