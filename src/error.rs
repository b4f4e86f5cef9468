//! Error handling for the JSON value model.
//!
//! Every failure the crate can report is an [`ErrorCode`] variant with a stable
//! numeric code. Parser failures live in the 100 range, value-model lookup
//! failures in the 200 range, and I/O surfaced by the CLI in the 300 range.

use thiserror::Error;

/// All error codes produced by the value model, parser, and CLI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    /// Input is not well-formed JSON (code 100).
    #[error("invalid JSON at byte {offset}")]
    InvalidJson {
        /// Byte offset where the lexer or parser gave up.
        offset: usize,
    },

    /// An object contained the same key twice after unescaping (code 101).
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),

    /// Input bytes are not valid UTF-8 (code 105).
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// A `\u` escape produced a lone surrogate (code 106).
    #[error("unpaired surrogate U+{0:04X}")]
    UnpairedSurrogate(u32),

    /// A number literal does not fit the numeric model (code 109).
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),

    /// Input exceeds `Limits::max_input_size` (code 110).
    #[error("input too large ({0} > {1} bytes)")]
    InputTooLarge(u64, u64),

    /// Containers nest deeper than `Limits::max_nesting_depth` (code 111).
    #[error("nesting too deep ({0} > {1})")]
    NestingTooDeep(u64, u64),

    /// A string literal exceeds `Limits::max_string_length` (code 112).
    #[error("string too long ({0} > {1} bytes)")]
    StringTooLong(u64, u64),

    /// An object exceeds `Limits::max_object_fields` (code 113).
    #[error("too many fields ({0} > {1})")]
    TooManyFields(u64, u64),

    /// An array exceeds `Limits::max_array_length` (code 114).
    #[error("array too long ({0} > {1})")]
    ArrayTooLong(u64, u64),

    /// Array index is not below the element count (code 200).
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Element count at the time of the lookup.
        len: usize,
    },

    /// Object key is absent (code 201).
    #[error("key {0:?} not found")]
    KeyNotFound(String),

    /// NaN or infinity offered as a number (code 202).
    #[error("non-finite number")]
    NonFiniteNumber,

    /// Reading input failed (code 300).
    #[error("i/o error: {0}")]
    Io(String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::InvalidJson { .. } => 100,
            ErrorCode::DuplicateKey(_) => 101,
            ErrorCode::InvalidUtf8 => 105,
            ErrorCode::UnpairedSurrogate(_) => 106,
            ErrorCode::NumberOutOfRange(_) => 109,
            ErrorCode::InputTooLarge(..) => 110,
            ErrorCode::NestingTooDeep(..) => 111,
            ErrorCode::StringTooLong(..) => 112,
            ErrorCode::TooManyFields(..) => 113,
            ErrorCode::ArrayTooLong(..) => 114,
            ErrorCode::IndexOutOfRange { .. } => 200,
            ErrorCode::KeyNotFound(_) => 201,
            ErrorCode::NonFiniteNumber => 202,
            ErrorCode::Io(_) => 300,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson { .. } => "InvalidJson",
            ErrorCode::DuplicateKey(_) => "DuplicateKey",
            ErrorCode::InvalidUtf8 => "InvalidUtf8",
            ErrorCode::UnpairedSurrogate(_) => "UnpairedSurrogate",
            ErrorCode::NumberOutOfRange(_) => "NumberOutOfRange",
            ErrorCode::InputTooLarge(..) => "InputTooLarge",
            ErrorCode::NestingTooDeep(..) => "NestingTooDeep",
            ErrorCode::StringTooLong(..) => "StringTooLong",
            ErrorCode::TooManyFields(..) => "TooManyFields",
            ErrorCode::ArrayTooLong(..) => "ArrayTooLong",
            ErrorCode::IndexOutOfRange { .. } => "IndexOutOfRange",
            ErrorCode::KeyNotFound(_) => "KeyNotFound",
            ErrorCode::NonFiniteNumber => "NonFiniteNumber",
            ErrorCode::Io(_) => "Io",
        }
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(err: std::io::Error) -> Self {
        ErrorCode::Io(err.to_string())
    }
}

/// Result type for value-model and parser operations.
pub type JsonResult<T> = Result<T, ErrorCode>;
