//! Diagnostic logging
//!
//! Log lines go to stderr so they never mix with command output on stdout.
//! The level comes from the `-v` flag count only.

use std::io::IsTerminal;
use std::sync::Once;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING_INIT: Once = Once::new();

/// Map the number of `-v` flags to a level name
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logging(verbosity: u8) -> Result<()> {
    let mut result = Ok(());

    LOGGING_INIT.call_once(|| {
        let level = level_for_verbosity(verbosity);
        result = EnvFilter::try_new(format!("expense_cli={level},expenses={level}"))
            .map_err(|e| anyhow!("invalid log filter: {e}"))
            .and_then(|filter| {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .without_time()
                    .try_init()
                    .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
            });
    });

    result
}
