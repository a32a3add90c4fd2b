//! Declaration sources
//!
//! A [`DeclarationSource`] turns a type name into an immutable [`Declaration`]
//! snapshot. Everything downstream reads that snapshot only.

use crate::branch::BranchSite;
use crate::error::SourceError;
use crate::java::JavaSource;
use crate::types::TargetType;
use std::path::{Path, PathBuf};

/// Parsed type plus every branch construct of its compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The type under analysis
    pub target: TargetType,
    /// Branch sites of the whole unit, in source order
    pub branches: Vec<BranchSite>,
}

impl Declaration {
    /// Create declaration without branches
    #[inline]
    #[must_use]
    pub fn new(target: TargetType) -> Self {
        Self {
            target,
            branches: Vec::new(),
        }
    }

    /// Append a branch site
    #[inline]
    #[must_use]
    pub fn with_branch(mut self, site: BranchSite) -> Self {
        self.branches.push(site);
        self
    }
}

/// Producer of declarations
///
/// Implement this trait to feed the generator from another front end.
pub trait DeclarationSource {
    /// Load the declaration of `type_name` (simple or fully qualified)
    ///
    /// # Errors
    /// Returns error if the unit cannot be read or parsed, or does not
    /// declare the type
    fn load(&self, type_name: &str) -> Result<Declaration, SourceError>;
}

impl DeclarationSource for Declaration {
    fn load(&self, type_name: &str) -> Result<Declaration, SourceError> {
        let simple = simple_name(type_name);
        if self.target.name == simple {
            Ok(self.clone())
        } else {
            Err(SourceError::type_not_found(type_name))
        }
    }
}

/// Source directory laid out by package (`src/main/java`)
#[derive(Debug, Clone)]
pub struct SourceRoot {
    root: PathBuf,
}

impl SourceRoot {
    /// Create source root
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `a.b.Widget` to `<root>/a/b/Widget.java`
    #[must_use]
    pub fn path_for(&self, type_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        let mut segments = type_name.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.java"));
            }
        }
        path
    }
}

impl DeclarationSource for SourceRoot {
    fn load(&self, type_name: &str) -> Result<Declaration, SourceError> {
        let path = self.path_for(type_name);
        tracing::debug!("Reading {}", path.display());

        let text =
            std::fs::read_to_string(&path).map_err(|e| SourceError::io_error(&path, e))?;

        JavaSource::from_source(text)
            .with_origin(path.display().to_string())
            .load(type_name)
    }
}

/// Last segment of a possibly qualified type name
#[inline]
pub(crate) fn simple_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}
