//! The bencoding value tree.
//!
//! A [`Value`] is one of four kinds: [`Integer`], [`ByteString`], [`List`] or
//! [`Dictionary`]. Containers own their children outright, so a tree can never
//! share nodes or form cycles; dropping a container drops everything below it.
//!
//! Consumers that only care about one kind use the safe downcasts
//! ([`Value::downcast_ref`], [`Value::as_list`], ...) instead of matching on
//! the enum by hand.

use std::borrow::Borrow;
use std::fmt;

use bytes::Bytes;

use crate::dictionary::Dictionary;
use crate::list::List;

/// A signed integer item (`i<digits>e` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(i64);

impl Integer {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn set_value(&mut self, value: i64) {
        self.0 = value;
    }
}

/// A raw byte string item (`<length>:<bytes>` on the wire).
///
/// The content is opaque and need not be valid UTF-8. Byte strings compare and
/// order by content, which is what gives [`Dictionary`] its canonical key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ByteString(Bytes);

impl ByteString {
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self(value.into())
    }

    /// Raw content of the string.
    pub fn value(&self) -> &[u8] {
        &self.0
    }

    pub fn set_value(&mut self, value: impl Into<Bytes>) {
        self.0 = value.into();
    }

    /// Number of bytes in the string (the wire length prefix).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The content as UTF-8 text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

// Lets dictionaries be queried with a plain `&[u8]` key.
impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for ByteString {
    fn from(value: Bytes) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(value: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(value))
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        Self(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for ByteString {
    fn from(value: String) -> Self {
        Self(Bytes::from(value.into_bytes()))
    }
}

/// Tag naming the kind of a [`Value`] without borrowing its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    ByteString,
    List,
    Dictionary,
}

impl Kind {
    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "an integer",
            Kind::ByteString => "a byte string",
            Kind::List => "a list",
            Kind::Dictionary => "a dictionary",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One bencoded item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(Integer),
    ByteString(ByteString),
    List(List),
    Dictionary(Dictionary),
}

impl Value {
    pub fn integer(value: i64) -> Self {
        Value::Integer(Integer::new(value))
    }

    pub fn string(value: impl Into<ByteString>) -> Self {
        Value::ByteString(value.into())
    }

    /// An empty list.
    pub fn list() -> Self {
        Value::List(List::new())
    }

    /// An empty dictionary.
    pub fn dictionary() -> Self {
        Value::Dictionary(Dictionary::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::ByteString(_) => Kind::ByteString,
            Value::List(_) => Kind::List,
            Value::Dictionary(_) => Kind::Dictionary,
        }
    }

    /// Views the value as the variant type `T`, or `None` if it is another kind.
    ///
    /// ```
    /// use bencoding::{Integer, List, Value};
    ///
    /// let value = Value::integer(7);
    /// assert_eq!(value.downcast_ref::<Integer>().map(Integer::value), Some(7));
    /// assert!(value.downcast_ref::<List>().is_none());
    /// ```
    pub fn downcast_ref<T: Variant>(&self) -> Option<&T> {
        T::from_value_ref(self)
    }

    /// Mutable counterpart of [`Value::downcast_ref`].
    pub fn downcast_mut<T: Variant>(&mut self) -> Option<&mut T> {
        T::from_value_mut(self)
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        self.downcast_ref()
    }

    pub fn as_integer_mut(&mut self) -> Option<&mut Integer> {
        self.downcast_mut()
    }

    pub fn as_byte_string(&self) -> Option<&ByteString> {
        self.downcast_ref()
    }

    pub fn as_byte_string_mut(&mut self) -> Option<&mut ByteString> {
        self.downcast_mut()
    }

    pub fn as_list(&self) -> Option<&List> {
        self.downcast_ref()
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        self.downcast_mut()
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        self.downcast_ref()
    }

    pub fn as_dictionary_mut(&mut self) -> Option<&mut Dictionary> {
        self.downcast_mut()
    }

    /// Looks up `key` if this value is a dictionary.
    ///
    /// Returns `None` for non-dictionaries, missing keys and vacant slots.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dictionary()?.get(key)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Integer {}
    impl Sealed for super::ByteString {}
    impl Sealed for crate::list::List {}
    impl Sealed for crate::dictionary::Dictionary {}
}

/// The four variant types a [`Value`] can be downcast to.
///
/// Sealed: the set of kinds is closed.
pub trait Variant: sealed::Sealed + Sized {
    const KIND: Kind;

    fn from_value_ref(value: &Value) -> Option<&Self>;

    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! impl_variant {
    ($ty:ty, $variant:ident) => {
        impl Variant for $ty {
            const KIND: Kind = Kind::$variant;

            fn from_value_ref(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_variant!(Integer, Integer);
impl_variant!(ByteString, ByteString);
impl_variant!(List, List);
impl_variant!(Dictionary, Dictionary);

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Self(i64::from(value))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::string(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::string(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::string(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(List::from(items))
    }
}
