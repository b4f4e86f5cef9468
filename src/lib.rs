//! Owned JSON value trees with deterministic text serialization.
//!
//! A caller builds a tree of [`Value`]s (null, boolean, number, string,
//! array, object) and renders it to a single line of JSON text. Containers
//! exclusively own their children: cloning copies the whole subtree, and
//! dropping the root releases every node once.
//!
//! # Architecture
//!
//! - [`json`] - value model, serializer, and the optional parser
//! - [`error`] - error codes shared by every fallible operation
//!
//! # Output format
//!
//! `Display` (and therefore `to_string`) writes arrays as `[a, b]` and
//! objects as `{"k":v, "k2":v2}`, with object entries in key order. Strings
//! escape `"`, `\`, `/`, and the five short control escapes only.
//! The `", "` item separator is the only whitespace ever written.
//! [`Value::to_compact_string`] drops that space too.

// Library code reports failures through ErrorCode instead of panicking.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ErrorCode, JsonResult};
pub use json::{escape_str, parse, Array, JsonString, Limits, Number, Object, Style, Value, ValueKind};
