//! Ordered sequences of owned values.
//!
//! Out-of-range access is a lookup failure, never a fabricated value.
//! [`Array::get`] returns `None`, while [`Array::try_get`], [`Array::set`],
//! [`Array::insert`] and [`Array::remove`] return
//! [`ErrorCode::IndexOutOfRange`]. `arr[i]` follows slice indexing and panics
//! past the end, so use it only when the index is already known to be valid.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::value::Value;
use super::write::{write_array, Style};
use crate::error::{ErrorCode, JsonResult};

/// A JSON array.
///
/// Elements are exclusively owned and kept in insertion order. Cloning deep
/// copies every element; dropping releases each element exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Array {
    values: Vec<Value>,
}

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Mutable element at `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    /// Element at `index`, reporting `IndexOutOfRange` past the end.
    pub fn try_get(&self, index: usize) -> JsonResult<&Value> {
        let len = self.values.len();
        self.values
            .get(index)
            .ok_or(ErrorCode::IndexOutOfRange { index, len })
    }

    /// Replace the element at `index` and hand back the one it displaced.
    ///
    /// The array never holds both values at once; dropping the returned value
    /// releases it.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> JsonResult<Value> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ErrorCode::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Append an element.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Insert an element at `index`, shifting later elements right.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> JsonResult<()> {
        let len = self.values.len();
        if index > len {
            return Err(ErrorCode::IndexOutOfRange { index, len });
        }
        self.values.insert(index, value.into());
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> JsonResult<Value> {
        let len = self.values.len();
        if index >= len {
            return Err(ErrorCode::IndexOutOfRange { index, len });
        }
        Ok(self.values.remove(index))
    }

    /// Release every element.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Iterate mutably over elements in storage order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.values.iter_mut()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Consume the array and return its elements.
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    /// Text form in the given style.
    pub fn to_string_with(&self, style: Style) -> String {
        let mut out = String::new();
        write_array(self, style, &mut out);
        out
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Style::Spaced))
    }
}

/// Panics when `index >= len()`. See [`Array::get`] for the checked form.
impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.values[index]
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Array {
        Array::from(vec![Value::Null, Value::Bool(true), Value::from("a")])
    }

    #[test]
    fn test_empty_array_text() {
        assert_eq!(Array::new().to_string(), "[]");
        assert_eq!(Array::new().to_string_with(Style::Compact), "[]");
    }

    #[test]
    fn test_three_element_text() {
        assert_eq!(sample().to_string(), "[null, true, \"a\"]");
        assert_eq!(sample().to_string_with(Style::Compact), "[null,true,\"a\"]");
    }

    #[test]
    fn test_single_element_has_no_separator() {
        let arr: Array = [Value::Null].into_iter().collect();
        assert_eq!(arr.to_string(), "[null]");
    }

    #[test]
    fn test_indexed_access() {
        let arr = sample();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(1), Some(&Value::Bool(true)));
        assert_eq!(arr.get(3), None);
        assert_eq!(arr[2], Value::from("a"));
        assert_eq!(
            arr.try_get(7),
            Err(ErrorCode::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_set_returns_displaced_value() {
        let mut arr = sample();
        let old = arr.set(0, false).unwrap();
        assert_eq!(old, Value::Null);
        assert_eq!(arr[0], Value::Bool(false));
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_checked_access_past_the_end() {
        let mut arr = Array::from(vec![Value::Null]);
        assert!(arr.get(1).is_none());
        assert!(arr.get_mut(1).is_none());
        assert_eq!(
            arr.try_get(1),
            Err(ErrorCode::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(arr.remove(1).is_err());
        assert_eq!(arr.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_index_operator_panics_past_the_end() {
        let arr = Array::new();
        let _ = &arr[0];
    }

    #[test]
    fn test_set_out_of_range() {
        let mut arr = sample();
        let err = arr.set(3, Value::Null).unwrap_err();
        assert_eq!(err, ErrorCode::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(arr, sample());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut arr = sample();
        arr.insert(3, 7i64).unwrap();
        assert_eq!(arr.to_string(), "[null, true, \"a\", 7]");
        assert!(arr.insert(9, Value::Null).is_err());
        assert_eq!(arr.remove(0).unwrap(), Value::Null);
        assert!(arr.remove(3).is_err());
        assert_eq!(arr.to_string(), "[true, \"a\", 7]");
    }

    #[test]
    fn test_iteration_order() {
        let arr = sample();
        let kinds: Vec<&str> = arr.iter().map(Value::type_name).collect();
        assert_eq!(kinds, vec!["null", "boolean", "string"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.push(Value::Null);
        copy[0] = Value::Bool(false);
        assert_eq!(original.to_string(), "[null, true, \"a\"]");
        assert_eq!(copy.to_string(), "[false, true, \"a\", null]");
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let source = sample();
        let mut target = Array::from(vec![Value::from(1i64)]);
        target.clone_from(&source);
        assert_eq!(target, source);
    }
}
