//! Logging setup.
//!
//! Logs go to stderr; stdout is reserved for MCP messages. The level comes
//! from `MCP_LOG_LEVEL`, and `RUST_LOG` directives are honoured on top of it.
//! Events on [`READY_TARGET`] are enabled at every level so the readiness
//! notice is always printed.

use tracing::Level;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::{EnvFilter, fmt};

/// Target of the readiness notice emitted once the stdio service is up.
pub const READY_TARGET: &str = "tailscale_mcp::ready";

/// Map a configured level name to a tracing level. Unknown names mean info.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Add the configured level and the always-on readiness target to `base`.
pub fn build_filter(base: EnvFilter, level: &str) -> Result<EnvFilter, ParseError> {
    let ready: Directive = format!("{}=info", READY_TARGET).parse()?;
    Ok(base.add_directive(parse_level(level).into()).add_directive(ready))
}

/// Initialize the logging subsystem.
pub fn init_logging(level: &str) -> Result<(), ParseError> {
    let filter = build_filter(EnvFilter::from_default_env(), level)?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
