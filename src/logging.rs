//! Log setup shared by the binaries.
//!
//! The terminal is busy drawing mazes, so events go to a file in the working directory.
//! The level is read from `MAZECARVE_LOG` (`error`, `warn`, `info`, `debug`, `trace`) and
//! defaults to `info`.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

pub const LEVEL_ENV_VAR: &str = "MAZECARVE_LOG";

/// Parses a level name, falling back to `info` for anything unrecognized.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Installs the global subscriber writing to `file_name`.
/// Keep the returned guard alive for the whole run, dropping it flushes pending events.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = parse_level(std::env::var(LEVEL_ENV_VAR).ok().as_deref());
    let file_appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
