//! Scaffold Declarations
//!
//! Immutable declaration snapshots of a type under analysis, and the sources
//! that produce them.
//!
//! # Overview
//!
//! - [`TargetType`]: constructors and methods of the analyzed type
//! - [`BranchSite`]: if/ternary/switch constructs tagged with their enclosing method
//! - [`DeclarationSource`]: boundary trait; [`JavaSource`] and [`SourceRoot`] implement it
//!
//! # Example
//!
//! ```rust
//! use scaffold_decl::{DeclarationSource, JavaSource};
//!
//! let source = JavaSource::from_source("package a; public class Widget { int size() { return 1; } }");
//! let decl = source.load("a.Widget").unwrap();
//! assert_eq!(decl.target.methods[0].name, "size");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod branch;
pub mod error;
pub mod java;
pub mod source;
pub mod types;

// Re-exports
pub use branch::{Branch, BranchSite, SwitchEntry};
pub use error::SourceError;
pub use java::JavaSource;
pub use source::{Declaration, DeclarationSource, SourceRoot};
pub use types::{
    Constructor, Method, Parameter, PrimitiveKind, TargetType, TypeDescriptor, Visibility,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for declaration handling
    pub use crate::{
        Branch, BranchSite, Declaration, DeclarationSource, JavaSource, Method, Parameter,
        SourceRoot, TargetType, TypeDescriptor,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
