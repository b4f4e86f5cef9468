//! Resource limits for JSON parsing.
//!
//! The parser checks these while building a tree so that hostile input is
//! rejected before it allocates without bound.

/// Limits applied by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: u64,
    /// Maximum string length in bytes, after unescaping
    pub max_string_length: u64,
    /// Maximum number of fields in an object
    pub max_object_fields: u64,
    /// Maximum number of elements in an array
    pub max_array_length: u64,
}

impl Limits {
    /// Default limits.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 32,
            max_string_length: 64 * 1024, // 64 KiB
            max_object_fields: 1024,
            max_array_length: 10_000,
        }
    }

    /// Roomier limits for trusted or bulk input.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 128,
            max_string_length: 1024 * 1024, // 1 MiB
            max_object_fields: 100_000,
            max_array_length: 1_000_000,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_input_size, 1024 * 1024);
        assert_eq!(limits.max_nesting_depth, 32);
        assert_eq!(limits.max_string_length, 64 * 1024);
        assert_eq!(limits.max_object_fields, 1024);
        assert_eq!(limits.max_array_length, 10_000);
        assert_eq!(Limits::default(), limits);
    }

    #[test]
    fn test_lenient_limits() {
        let limits = Limits::lenient();
        assert!(limits.max_input_size > Limits::strict().max_input_size);
        assert!(limits.max_nesting_depth > Limits::strict().max_nesting_depth);
    }
}
