//! Internal tracing setup.
//!
//! Tracing output is for debugging hbr itself; configuration problems are
//! reported through [`crate::diagnostics`] instead. `RUST_LOG` overrides the
//! level chosen from the command line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for a verbosity flag.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the global subscriber, writing to stderr.
///
/// Should be called once at startup. A second call is ignored.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}
