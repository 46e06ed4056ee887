//! Logging setup

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence. Without it, `verbose` selects `debug`,
/// otherwise only warnings and errors are written. Output goes to stderr so
/// it never mixes with the game output on stdout.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "rottawordle=debug" } else { "warn" }
}
