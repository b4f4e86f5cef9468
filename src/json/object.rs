//! Key-ordered mappings from strings to owned values.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::string::JsonString;
use super::value::Value;
use super::write::{write_object, Style};
use crate::error::{ErrorCode, JsonResult};

/// A JSON object.
///
/// Keys are unique and iterate in key order (byte-wise on the raw key), so
/// serialization is reproducible regardless of insertion order. Each value is
/// exclusively owned by its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    entries: BTreeMap<JsonString, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Value stored under `key`, reporting `KeyNotFound` when absent.
    pub fn try_get(&self, key: &str) -> JsonResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ErrorCode::KeyNotFound(key.to_owned()))
    }

    /// True if `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store `value` under `key`.
    ///
    /// An existing value at `key` is moved out and returned; the object keeps
    /// only the new one.
    pub fn insert(&mut self, key: impl Into<JsonString>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let previous = self.entries.insert(key, value.into());
        if previous.is_some() {
            tracing::trace!("object entry replaced");
        }
        previous
    }

    /// Remove the entry for `key` and return its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Release every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, JsonString, Value> {
        self.entries.iter()
    }

    /// Iterate over entries in key order with mutable values.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, JsonString, Value> {
        self.entries.iter_mut()
    }

    /// Keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, JsonString, Value> {
        self.entries.keys()
    }

    /// Values in key order.
    pub fn values(&self) -> btree_map::Values<'_, JsonString, Value> {
        self.entries.values()
    }

    /// Mutable values in key order.
    pub fn values_mut(&mut self) -> btree_map::ValuesMut<'_, JsonString, Value> {
        self.entries.values_mut()
    }

    /// Text form in the given style.
    pub fn to_string_with(&self, style: Style) -> String {
        let mut out = String::new();
        write_object(self, style, &mut out);
        out
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Style::Spaced))
    }
}

/// Later pairs win when a key repeats.
impl<K: Into<JsonString>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<JsonString>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<BTreeMap<JsonString, Value>> for Object {
    fn from(entries: BTreeMap<JsonString, Value>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Object {
    type Item = (JsonString, Value);
    type IntoIter = btree_map::IntoIter<JsonString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a JsonString, &'a Value);
    type IntoIter = btree_map::Iter<'a, JsonString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
