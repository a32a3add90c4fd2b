//! Value classification
//!
//! Maps a declared type to the placeholder used for it in generated tests.

use scaffold_decl::TypeDescriptor;

/// Sentinel for primitives and their wrappers
pub const NUMERIC_SENTINEL: i64 = 42;

/// Sentinel for string-like types
pub const STRING_SENTINEL: &str = "42";

/// Placeholder value for a parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentinelValue {
    /// Numeric literal
    Numeric(i64),
    /// String literal (unquoted)
    Text(String),
    /// Test double of the given erased type
    TestDouble {
        /// Erased type name, e.g. `List` for `List<String>`
        type_name: String,
    },
}

impl SentinelValue {
    /// Java expression for the value
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            SentinelValue::Numeric(n) => n.to_string(),
            SentinelValue::Text(s) => format!("\"{s}\""),
            SentinelValue::TestDouble { type_name } => format!("mock({type_name}.class)"),
        }
    }

    /// Check if the value is a test double
    #[inline]
    #[must_use]
    pub fn is_test_double(&self) -> bool {
        matches!(self, SentinelValue::TestDouble { .. })
    }
}

/// Classify a declared type
///
/// Rules, in order: primitive or wrapper → 42; string → "42"; anything else
/// → test double.
#[must_use]
pub fn classify(ty: &TypeDescriptor) -> SentinelValue {
    match ty {
        TypeDescriptor::Primitive(_) | TypeDescriptor::Boxed { .. } => {
            SentinelValue::Numeric(NUMERIC_SENTINEL)
        }
        TypeDescriptor::StringLike { .. } => SentinelValue::Text(STRING_SENTINEL.to_string()),
        TypeDescriptor::Reference { .. } => SentinelValue::TestDouble {
            type_name: ty.erased_name(),
        },
    }
}
