//! Scaffold Synthesizer
//!
//! Branch-aware unit-test skeleton synthesis for a parsed type declaration.
//!
//! # Pipeline
//!
//! ```text
//! Declaration → Setup Synthesizer → fields, init(), MockRegistry
//!            → per method: Permutation Enumerator (2^n cases)
//!                          Branch Extractor (if / ternary / switch cases)
//!                          Case Namer
//!            → SuitePlan → rendered test class
//! ```
//!
//! # Example
//!
//! ```rust
//! use scaffold_synth::{Generator, GeneratorConfig};
//! use scaffold_decl::{Declaration, Method, TargetType};
//!
//! let decl = Declaration::new(
//!     TargetType::new("a", "Widget").with_method(Method::new("scale").with_param("factor", "int")),
//! );
//! let generator = Generator::new(GeneratorConfig::new()).unwrap();
//! let plan = generator.plan(&decl).unwrap();
//! assert_eq!(plan.case_names(), vec!["testScaleWhereFactorIsNull", "testScaleWhereFactorIs42"]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod branch;
pub mod case;
pub mod classify;
pub mod config;
pub mod emitter;
pub mod error;
pub mod naming;
pub mod permutation;
mod render;
pub mod setup;

// Re-exports for convenience
pub use branch::{branch_cases, extract_branches, BranchCase, BranchKind};
pub use case::{CaseOrigin, TestCase};
pub use classify::{classify, SentinelValue};
pub use config::GeneratorConfig;
pub use emitter::{emit, Generator, SuitePlan};
pub use error::{GenerateError, GenerateResult};
pub use permutation::{enumerate, Assignment, Binding, BoundValue, PermutationCase};
pub use setup::{synthesize_setup, Construction, FieldDecl, MockRegistry, Setup};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for skeleton generation
    pub use crate::{GenerateError, GenerateResult, Generator, GeneratorConfig, SuitePlan};
    pub use scaffold_decl::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
