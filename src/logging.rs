//! Diagnostic logging.
//!
//! Logging is off unless `RUST_LOG` is set (in the environment or a local
//! `.env`). Output goes to stderr so stdout carries only the program's output.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber when `RUST_LOG` is present.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    dotenvy::dotenv().ok();

    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
