//! Log output for the binary. Libraries only emit `tracing` events.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a filter, e.g. `FOLIO_LOG=folio_lib=trace`.
pub const FILTER_ENV: &str = "FOLIO_LOG";

/// Install the stderr subscriber. `FOLIO_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
