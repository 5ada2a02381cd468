//! # bencoding
//!
//! Decoder, encoder and pretty printer for **bencoding**, the self-delimiting
//! format BitTorrent uses for `.torrent` files and tracker responses.
//!
//! Bencoding has four kinds of items:
//!
//! | Kind | Wire form | Example |
//! |------|-----------|---------|
//! | Integer | `i<number>e` | `i42e` |
//! | Byte string | `<length>:<bytes>` | `4:spam` |
//! | List | `l<items>e` | `l4:spami42ee` |
//! | Dictionary | `d<key><value>...e` | `d3:cow3:mooe` |
//!
//! ## Quick start
//!
//! ```rust
//! use bencoding::{decode, encode, pretty_print_compact, Value};
//!
//! // Keys arrive unsorted; the dictionary keeps them in canonical order.
//! let mut value = decode("d1:bi2e1:ai1ee").unwrap();
//! assert_eq!(pretty_print_compact(&value), r#"{"a": 1, "b": 2}"#);
//!
//! // Mutate the tree and write it back out.
//! let dict = value.as_dictionary_mut().unwrap();
//! dict.insert("c", Value::string("x"));
//! assert_eq!(encode(&value), b"d1:ai1e1:bi2e1:c1:xe");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` tree, `Integer`, `ByteString`, safe downcasts
//! - [`list`]: `List`
//! - [`dictionary`]: `Dictionary` with canonical key order
//! - [`primitives`]: stream-reading helpers used by the decoder
//! - [`decoder`]: bytes or `BufRead` → `Value`
//! - [`encoder`]: `Value` → bytes
//! - [`printer`]: `Value` → human-readable text
//! - [`error`]: `DecodingError`

pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod list;
pub mod primitives;
pub mod printer;
pub mod value;

pub use decoder::{decode, decode_from, Decoder, DecoderConfig, DEFAULT_MAX_DEPTH};
pub use dictionary::Dictionary;
pub use encoder::{encode, encode_to};
pub use error::{DecodingError, Result};
pub use list::List;
pub use printer::{pretty_print, pretty_print_compact, DEFAULT_INDENT};
pub use value::{ByteString, Integer, Kind, Value, Variant};
