//! Error types for skeleton generation
//!
//! Generation is a single pass; every error is fatal for the run and carries
//! the type (and method, where relevant) it concerns.

use scaffold_decl::SourceError;

/// Skeleton generation errors
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Declaration could not be obtained
    #[error("failed to load declaration of {type_name}: {source}")]
    Source {
        /// Requested type
        type_name: String,
        #[source]
        source: SourceError,
    },

    /// Method filter is not a valid regular expression
    #[error("invalid method filter '{pattern}': {source}")]
    InvalidMethodFilter {
        /// Filter as configured
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Method has more parameters than the permutation limit
    #[error("{type_name}.{method} has {count} parameters, at most {max} can be permuted")]
    TooManyParameters {
        /// Qualified name of the target
        type_name: String,
        /// Offending method
        method: String,
        /// Its parameter count
        count: usize,
        /// Effective limit
        max: usize,
    },

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Wrap a source error with the type it was loading
    pub fn load_failed(type_name: impl Into<String>, source: SourceError) -> Self {
        Self::Source {
            type_name: type_name.into(),
            source,
        }
    }
}

/// Result type alias for generation
pub type GenerateResult<T> = Result<T, GenerateError>;
