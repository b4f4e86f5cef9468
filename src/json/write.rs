//! Text serialization.
//!
//! Output is always a single line. Separators are emitted only between
//! elements, so empty containers come out as `[]` and `{}` with nothing to
//! trim.

use super::array::Array;
use super::object::Object;
use super::string::escape_into;
use super::value::Value;

/// Separator layout used when writing containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// `[1, 2]` and `{"a":1, "b":2}`. Used by `Display`.
    #[default]
    Spaced,
    /// `[1,2]` and `{"a":1,"b":2}`.
    Compact,
}

impl Style {
    fn item_separator(self) -> &'static str {
        match self {
            Style::Spaced => ", ",
            Style::Compact => ",",
        }
    }

    fn key_separator(self) -> &'static str {
        match self {
            Style::Spaced => ":",
            Style::Compact => ":",
        }
    }
}

/// Serialize a value to a new string.
pub fn to_string_with(value: &Value, style: Style) -> String {
    let mut output = String::new();
    write_value(value, style, &mut output);
    output
}

/// Append the text form of `value` to `output`.
pub fn write_value(value: &Value, style: Style, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => n.write_into(output),
        Value::String(s) => write_string(s, output),
        Value::Array(arr) => write_array(arr, style, output),
        Value::Object(obj) => write_object(obj, style, output),
    }
}

fn write_string(raw: &str, output: &mut String) {
    output.push('"');
    escape_into(raw, output);
    output.push('"');
}

pub(crate) fn write_array(arr: &Array, style: Style, output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push_str(style.item_separator());
        }
        write_value(value, style, output);
    }
    output.push(']');
}

pub(crate) fn write_object(obj: &Object, style: Style, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            output.push_str(style.item_separator());
        }
        write_string(key, output);
        output.push_str(style.key_separator());
        write_value(value, style, output);
    }
    output.push('}');
}
