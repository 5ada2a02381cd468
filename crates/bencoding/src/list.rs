//! Ordered list of owned values (`l<items>e` on the wire).

use std::slice;
use std::vec;

use crate::value::Value;

/// An insertion-ordered sequence of [`Value`]s.
///
/// ```
/// use bencoding::{List, Value};
///
/// let mut list = List::new();
/// list.push(Value::integer(1));
/// list.push(Value::string("two"));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.back(), Some(&Value::string("two")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` to the end of the list, taking ownership of it.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Removes and returns the last item. On an empty list this does nothing
    /// and returns `None`.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    pub fn front(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut Value> {
        self.items.first_mut()
    }

    pub fn back(&self) -> Option<&Value> {
        self.items.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut Value> {
        self.items.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<List> for Vec<Value> {
    fn from(list: List) -> Self {
        list.items
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for List {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut List {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
