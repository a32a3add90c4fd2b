//! Subscriber setup

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Directive forced by `--verbose`
pub const VERBOSE_DIRECTIVE: &str = "debug";

/// Build the filter; `--verbose` wins over `RUST_LOG`
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVE);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber, writing to stderr
///
/// Stdout is left to the generated skeleton. Calling twice is a no-op.
pub fn init_logging(verbose: bool) {
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let subscriber = fmt::fmt()
        .with_env_filter(filter(verbose))
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
