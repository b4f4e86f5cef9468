//! JSON value model, text serialization, and parsing.
//!
//! # Architecture
//!
//! - [`value`] - the [`Value`] sum type and [`ValueKind`]
//! - [`string`] - [`JsonString`] and the [`escape_str`] rule
//! - [`number`] - integer / float [`Number`]
//! - [`array`] - [`Array`], an ordered sequence of owned values
//! - [`object`] - [`Object`], a key-ordered map of owned values
//! - [`write`] - text serializer with [`Style`] selection
//! - [`limits`] - parser resource limits
//! - [`lexer`] / [`parser`] - text to [`Value`] trees
//! - `interop` - serde `Serialize` and `serde_json::Value` conversions
//!
//! # Example
//!
//! ```
//! use jsonmodel::json::{Array, Object, Value};
//!
//! let mut root = Object::new();
//! root.insert("x", Array::from(vec![Value::Bool(true), Value::Null]));
//!
//! let root = Value::Object(root);
//! assert_eq!(root.to_string(), r#"{"x":[true, null]}"#);
//! assert_eq!(root.to_compact_string(), r#"{"x":[true,null]}"#);
//!
//! let copy = root.clone();
//! assert_eq!(copy, root);
//! ```

pub mod array;
mod interop;
pub mod lexer;
pub mod limits;
pub mod number;
pub mod object;
pub mod parser;
pub mod string;
pub mod value;
pub mod write;

// Re-export commonly used items
pub use array::Array;
pub use limits::Limits;
pub use number::Number;
pub use object::Object;
pub use parser::{parse, parse_bytes, parse_with_limits};
pub use string::{escape_str, JsonString};
pub use value::{Value, ValueKind};
pub use write::{to_string_with, write_value, Style};
