//! Scaffold CLI support
//!
//! Output placement, declaration summaries and subscriber setup for the
//! `scaffold` binary.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod inspect;
pub mod logging;
pub mod writer;

pub use inspect::{describe, Summary};
pub use logging::init_logging;
pub use writer::ArtifactWriter;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
