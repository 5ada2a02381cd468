//! Error types for bencoding decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding bencoded data.
///
/// Encoding and pretty-printing never fail, so this is the only error type the
/// crate exposes. Offsets are 0-based byte positions counted from where the
/// decoder started reading.
#[derive(Error, Debug)]
pub enum DecodingError {
    /// The input ended before the current item was complete.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A byte that cannot start or continue the current item.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// The text between `i` and `e` is not a well-formed integer
    /// (leading zeros, `-0`, empty digits, embedded junk).
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),

    /// A well-formed integer that does not fit into an `i64`.
    #[error("integer {0} is out of range")]
    IntegerOverflow(String),

    /// The length prefix of a byte string is missing or not a decimal number.
    #[error("invalid string length {0:?}")]
    InvalidStringLength(String),

    /// The input ended before the declared number of string bytes was read.
    #[error("string declares {expected} bytes but only {found} are available")]
    TruncatedString { expected: usize, found: usize },

    /// A dictionary key decoded as something other than a byte string.
    #[error("dictionary key at offset {offset} is {found}, expected a byte string")]
    NonStringKey { found: &'static str, offset: usize },

    /// Bytes remain after one complete item (whole-input decoding only).
    #[error("trailing data at offset {offset}")]
    TrailingData { offset: usize },

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout bencoding.
pub type Result<T> = std::result::Result<T, DecodingError>;
