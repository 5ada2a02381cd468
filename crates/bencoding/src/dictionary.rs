//! Key-sorted dictionary (`d<key><value>...e` on the wire).
//!
//! Entries are kept in a `BTreeMap` keyed by [`ByteString`], so iteration is
//! always in ascending byte order of the key content, no matter in which order
//! the entries were inserted or appeared in the decoded input. That order is
//! also the order the encoder emits, which makes re-encoding deterministic.
//!
//! A slot obtained through [`Dictionary::slot`] for a missing key starts out
//! vacant (`None`). Vacant slots count towards [`Dictionary::len`] but are
//! skipped by the encoder and the pretty printer, since the wire format has no
//! way to express an absent value.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FusedIterator;

use crate::value::{ByteString, Value};

/// A mapping from byte-string keys to owned values, iterated in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    entries: BTreeMap<ByteString, Option<Value>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a dictionary from a batch of pairs. A key that appears more than
    /// once keeps the value of its last occurrence.
    ///
    /// ```
    /// use bencoding::{Dictionary, Value};
    ///
    /// let dict = Dictionary::from_pairs([("b", 2i64), ("a", 1), ("b", 3)]);
    /// let keys: Vec<_> = dict.keys().map(|k| k.value().to_vec()).collect();
    /// assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec()]);
    /// assert_eq!(dict.get(b"b"), Some(&Value::integer(3)));
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<ByteString>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Number of slots, vacant ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the slot for `key`, creating a vacant one if the key is missing.
    ///
    /// ```
    /// use bencoding::{Dictionary, Value};
    ///
    /// let mut dict = Dictionary::new();
    /// assert!(dict.slot("key").is_none());
    /// *dict.slot("key") = Some(Value::integer(1));
    /// assert_eq!(dict.get(b"key"), Some(&Value::integer(1)));
    /// ```
    pub fn slot(&mut self, key: impl Into<ByteString>) -> &mut Option<Value> {
        self.entries.entry(key.into()).or_insert(None)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    /// An existing key keeps its position; only the value changes.
    pub fn insert(&mut self, key: impl Into<ByteString>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), Some(value.into())).flatten()
    }

    /// The value stored under `key`; `None` when missing or vacant.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.entries.get(key)?.as_ref()
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        self.entries.get_mut(key)?.as_mut()
    }

    /// True if a slot exists for `key`, even a vacant one.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the slot for `key`, returning its value if it had one.
    pub fn remove(&mut self, key: &[u8]) -> Option<Value> {
        self.entries.remove(key).flatten()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, ByteString, Option<Value>> {
        self.entries.keys()
    }

    /// All slots in canonical key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// All slots in canonical key order, with mutable access to the values.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, ByteString, Option<Value>> {
        self.entries.iter_mut()
    }

    /// Slots that hold a value, in canonical key order.
    pub fn occupied(&self) -> impl Iterator<Item = (&ByteString, &Value)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (key, value)))
    }
}

/// Borrowing iterator over a [`Dictionary`] in canonical key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, ByteString, Option<Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a ByteString, Option<&'a Value>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value.as_ref()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<K: Into<ByteString>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<ByteString>, V: Into<Value>> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (ByteString, Option<Value>);
    type IntoIter = btree_map::IntoIter<ByteString, Option<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a ByteString, Option<&'a Value>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Dictionary {
    type Item = (&'a ByteString, &'a mut Option<Value>);
    type IntoIter = btree_map::IterMut<'a, ByteString, Option<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}
