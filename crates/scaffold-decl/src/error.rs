//! Error types for declaration loading

use std::path::PathBuf;

/// Errors while obtaining a declaration
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The compilation unit does not declare the requested type
    #[error("type not found: {type_name}")]
    TypeNotFound {
        /// Name as requested
        type_name: String,
    },

    /// IO error during file read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax error in source
    #[error("syntax error in {origin} at {line}:{column}")]
    Syntax {
        /// File path or `<memory>`
        origin: String,
        /// 1-based line of the first error node
        line: usize,
        /// 1-based column of the first error node
        column: usize,
    },

    /// Parser could not be initialized
    #[error("parser initialization failed: {0}")]
    ParserInit(String),

    /// Parser produced no tree
    #[error("parse failed")]
    ParseFailed,
}

impl SourceError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create type-not-found error
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        Self::TypeNotFound {
            type_name: type_name.into(),
        }
    }
}
