//! Logging init: stderr with env-filter control.
//!
//! stdout is reserved for transformed URLs so command output can be piped;
//! all diagnostics go to stderr. The transformation core itself never logs.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Honors `RUST_LOG` when set, defaulting to `info` globally and `debug`
/// for this crate's own targets.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cdnimg_core=debug,cdnimg_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
