//! Logging setup.
//!
//! Logs go to stderr so they never interleave with menu output or JSON on
//! stdout. The filter comes from `RENTAL_LOG` (same syntax as `RUST_LOG`),
//! defaulting to `warn`, or `debug` for the rental crates with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RENTAL_LOG";

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    // A subscriber may already be installed (e.g. by tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,rental_core=debug,rental=debug")
    } else {
        EnvFilter::new("warn")
    }
}
