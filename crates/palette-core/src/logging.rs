#![forbid(unsafe_code)]

//! Logging helpers.
//!
//! The palette crates emit structured `tracing` events. Applications install
//! whatever subscriber they like; [`init`] is a convenience for binaries and
//! test harnesses that just want stderr output (plain or JSON).

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Error raised when a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
#[derive(Debug)]
pub struct LoggingInitError(String);

#[cfg(feature = "tracing-json")]
impl std::fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.0)
    }
}

#[cfg(feature = "tracing-json")]
impl std::error::Error for LoggingInitError {}

/// Install a global `fmt` subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `default_filter`.
/// With `json` set, events are written as one JSON object per line.
#[cfg(feature = "tracing-json")]
pub fn init(default_filter: &str, json: bool) -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| LoggingInitError(e.to_string()))
}
