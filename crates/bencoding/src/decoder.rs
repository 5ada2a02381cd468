//! Bencoding decoder: turns bytes into a [`Value`] tree.
//!
//! The decoder is a recursive-descent parser over the grammar
//!
//! ```text
//! item        := integer | byte_string | list | dictionary
//! integer     := 'i' sign? ('0' | [1-9][0-9]*) 'e'
//! byte_string := length ':' raw_bytes
//! list        := 'l' item* 'e'
//! dictionary  := 'd' (byte_string item)* 'e'
//! ```
//!
//! No whitespace is tolerated anywhere. The first structural violation aborts
//! the decode; no partial tree is ever returned.
//!
//! # Two entry points
//!
//! - [`decode`] takes the whole input and requires it to hold exactly one item.
//!   Anything left over is [`DecodingError::TrailingData`].
//! - [`decode_from`] reads one item from a [`BufRead`] and stops right after it,
//!   leaving any following bytes in the reader for the caller.
//!
//! ```
//! use std::io::Cursor;
//! use bencoding::{decode, decode_from, Value};
//!
//! assert!(decode("i1ei2e").is_err());
//!
//! let mut cursor = Cursor::new(b"i1ei2e");
//! assert_eq!(decode_from(&mut cursor).unwrap(), Value::integer(1));
//! assert_eq!(cursor.position(), 3);
//! ```

use std::io::{self, BufRead, Read};

use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::error::{DecodingError, Result};
use crate::list::List;
use crate::primitives;
use crate::value::{ByteString, Integer, Value};

/// Default limit on how deeply lists and dictionaries may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs controlling how strictly input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum nesting of lists and dictionaries. A top-level list is depth 1.
    pub max_depth: usize,
    /// Reject byte-string lengths with leading zeros such as `007:`.
    pub strict_lengths: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_lengths: false,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict_lengths(mut self, strict: bool) -> Self {
        self.strict_lengths = strict;
        self
    }
}

/// A reusable decoder carrying a [`DecoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes `input`, which must contain exactly one item and nothing else.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Value> {
        let input = input.as_ref();
        let mut rest = input;
        let value = self.decode_from(&mut rest)?;
        if !rest.is_empty() {
            let offset = input.len() - rest.len();
            debug!(offset, trailing = rest.len(), "trailing data after item");
            return Err(DecodingError::TrailingData { offset });
        }
        Ok(value)
    }

    /// Decodes one item from `reader`, leaving it positioned right after the item.
    pub fn decode_from<R: BufRead + ?Sized>(&self, reader: &mut R) -> Result<Value> {
        let mut parser = Parser {
            reader: OffsetReader { inner: reader, offset: 0 },
            config: &self.config,
        };
        parser.item(0).map_err(|e| {
            debug!(offset = parser.reader.offset, error = %e, "decoding failed");
            e
        })
    }
}

/// Decodes `input` with the default configuration. The whole input must be
/// exactly one item.
///
/// ```
/// use bencoding::{decode, Value};
///
/// assert_eq!(decode("i-13e").unwrap(), Value::integer(-13));
/// assert_eq!(decode("4:test").unwrap(), Value::string("test"));
/// assert!(decode("i04e").is_err());
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Value> {
    Decoder::new().decode(input)
}

/// Decodes one item from `reader` with the default configuration, leaving any
/// following bytes unread.
pub fn decode_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Value> {
    Decoder::new().decode_from(reader)
}

/// Wraps the caller's reader to know how many bytes were consumed, for error
/// offsets.
struct OffsetReader<'r, R: ?Sized> {
    inner: &'r mut R,
    offset: usize,
}

impl<R: BufRead + ?Sized> Read for OffsetReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.offset += n;
        Ok(n)
    }
}

impl<R: BufRead + ?Sized> BufRead for OffsetReader<'_, R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.offset += amt;
    }
}

struct Parser<'a, 'r, R: ?Sized> {
    reader: OffsetReader<'r, R>,
    config: &'a DecoderConfig,
}

impl<R: BufRead + ?Sized> Parser<'_, '_, R> {
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(primitives::peek(&mut self.reader)?)
    }

    fn eof(&self) -> DecodingError {
        DecodingError::UnexpectedEof {
            offset: self.reader.offset,
        }
    }

    /// Dispatch on the first byte of an item. `depth` is the number of
    /// containers enclosing it.
    fn item(&mut self, depth: usize) -> Result<Value> {
        match self.peek()? {
            Some(b'i') => self.integer().map(Value::Integer),
            Some(b'0'..=b'9') => self.byte_string().map(Value::ByteString),
            Some(b'l') => self.list(depth + 1).map(Value::List),
            Some(b'd') => self.dictionary(depth + 1).map(Value::Dictionary),
            Some(other) => Err(DecodingError::UnexpectedChar {
                found: char::from(other),
                offset: self.reader.offset,
            }),
            None => Err(self.eof()),
        }
    }

    /// `i<span>e`, where the span between the markers must be a whole integer.
    fn integer(&mut self) -> Result<Integer> {
        self.reader.consume(1);
        let mut span = Vec::new();
        if !primitives::read_until(&mut self.reader, &mut span, b'e')? {
            return Err(self.eof());
        }
        span.pop();
        parse_integer(&span)
    }

    /// `<length>:<bytes>` with exactly `length` payload bytes following.
    fn byte_string(&mut self) -> Result<ByteString> {
        let mut span = Vec::new();
        let found_colon = primitives::read_up_to(&mut self.reader, &mut span, b':')?;
        if !is_valid_length(&span, self.config.strict_lengths) {
            return Err(DecodingError::InvalidStringLength(
                String::from_utf8_lossy(&span).into_owned(),
            ));
        }
        if !found_colon {
            return Err(self.eof());
        }
        let len: usize = primitives::str_to_num(&span).ok_or_else(|| {
            DecodingError::InvalidStringLength(String::from_utf8_lossy(&span).into_owned())
        })?;
        self.reader.consume(1);

        // Allocation is bounded by the bytes actually present, not the declared length.
        let mut payload = Vec::new();
        let found = self
            .reader
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut payload)?;
        if found < len {
            return Err(DecodingError::TruncatedString {
                expected: len,
                found,
            });
        }
        Ok(ByteString::new(payload))
    }

    fn list(&mut self, depth: usize) -> Result<List> {
        self.check_depth(depth)?;
        self.reader.consume(1);
        let mut list = List::new();
        loop {
            match self.peek()? {
                Some(b'e') => break,
                Some(_) => list.push(self.item(depth)?),
                None => return Err(self.eof()),
            }
        }
        self.reader.consume(1);
        trace!(depth, len = list.len(), "decoded list");
        Ok(list)
    }

    /// Pairs may arrive in any order; the dictionary re-sorts them and a
    /// repeated key keeps its last value.
    fn dictionary(&mut self, depth: usize) -> Result<Dictionary> {
        self.check_depth(depth)?;
        self.reader.consume(1);
        let mut dict = Dictionary::new();
        loop {
            match self.peek()? {
                Some(b'e') => break,
                Some(_) => {
                    let offset = self.reader.offset;
                    let key = match self.item(depth)? {
                        Value::ByteString(key) => key,
                        other => {
                            return Err(DecodingError::NonStringKey {
                                found: other.kind().name(),
                                offset,
                            })
                        }
                    };
                    let value = self.item(depth)?;
                    dict.insert(key, value);
                }
                None => return Err(self.eof()),
            }
        }
        self.reader.consume(1);
        trace!(depth, len = dict.len(), "decoded dictionary");
        Ok(dict)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(DecodingError::NestingTooDeep {
                max_depth: self.config.max_depth,
            });
        }
        Ok(())
    }
}

/// Validates `span` as `[+-]?(0|[1-9][0-9]*)` (rejecting `-0`) and converts it.
fn parse_integer(span: &[u8]) -> Result<Integer> {
    let digits = match span {
        [b'+' | b'-', rest @ ..] => rest,
        _ => span,
    };
    let well_formed = match digits {
        [b'0'] => span != b"-0",
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    let text = || String::from_utf8_lossy(span).into_owned();
    if !well_formed {
        return Err(DecodingError::InvalidInteger(text()));
    }
    primitives::str_to_num::<i64>(span)
        .map(Integer::new)
        .ok_or_else(|| DecodingError::IntegerOverflow(text()))
}

/// A string length is a non-empty run of decimal digits. In strict mode a
/// multi-digit length may not start with `0`.
fn is_valid_length(span: &[u8], strict: bool) -> bool {
    if span.is_empty() || !span.iter().all(u8::is_ascii_digit) {
        return false;
    }
    !(strict && span.len() > 1 && span[0] == b'0')
}
