//! Log filter construction shared by the binaries.
//!
//! The binaries own subscriber setup; this module only decides which
//! directives apply so the choice can be tested without touching the process
//! environment.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset, empty, or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "faceswap_core=warn";

/// Builds the log filter from the value of `RUST_LOG`.
///
/// A usable `RUST_LOG` replaces the default entirely, so any level for
/// `faceswap_core` (or a bare level such as `debug`) takes effect.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
