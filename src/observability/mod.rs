//! Logging setup.
//!
//! Events are emitted with `tracing` (and `log` in the config loader, bridged
//! by `tracing-subscriber`). Output goes to stderr so stdout stays reserved for
//! located blocks and JSON reports.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows `-v` flags:
//! none → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.

use tracing_subscriber::EnvFilter;

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
