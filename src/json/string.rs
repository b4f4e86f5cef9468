//! JSON string payloads and the escaping rule used when they are written.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Escape a raw string for placement between double quotes.
///
/// Exactly eight characters are rewritten: `"`, `\` and `/` gain a leading
/// backslash, and backspace, form-feed, newline, carriage return and tab
/// become `\b`, `\f`, `\n`, `\r`, `\t`. Every other character, including the
/// remaining control characters and all non-ASCII text, is copied unchanged.
pub fn escape_str(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

/// Append the escaped form of `raw` to `out`.
pub(crate) fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '"' | '\\' | '/' => {
                out.push('\\');
                out.push(ch);
            }
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
}

/// A JSON string holding its raw (unescaped) payload.
///
/// Ordering, equality and hashing use the raw value, which makes the type
/// usable as an object key. `Borrow<str>` lets maps keyed by `JsonString`
/// be queried with a plain `&str`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonString(String);

impl JsonString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// The raw payload.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the raw payload.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('"');
        escape_into(&self.0, &mut out);
        out.push('"');
        f.write_str(&out)
    }
}

impl Deref for JsonString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JsonString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for JsonString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<JsonString> for String {
    fn from(s: JsonString) -> Self {
        s.0
    }
}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
