use anyhow::{anyhow, Result};
use tracing::Level;

/// Installs a stderr fmt subscriber. 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
