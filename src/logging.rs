//! Diagnostics setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sl=warn";

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
///
/// Output goes to stderr without colour so it can be redirected away from
/// the animation, e.g. `RUST_LOG=sl=trace sl 2>sl.log`.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
