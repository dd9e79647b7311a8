//! One-time process initialization
//!
//! Hosts call [`init`] once during startup, before constructing the
//! channel client — the `log` facade drops records emitted before a logger
//! is installed, so a client built first would lose its early output.
//! Repeated and concurrent calls are safe: the first caller performs the
//! side effects, everyone else observes the same outcome.

use std::sync::OnceLock;

use crate::errors::{LoggingError, PaychanError, Result};
use crate::logging::{ChannelLogger, ConsoleSink, LogSink};
use crate::registry;

static FACILITY: OnceLock<core::result::Result<&'static ChannelLogger, LoggingError>> =
    OnceLock::new();

/// Initialize logging and the application registry with the stderr sink
pub fn init() -> Result<()> {
    init_with_sink(Box::new(ConsoleSink::new()))
}

/// Initialize with a custom delivery sink
///
/// The first sink handed in stays bound for the process lifetime; sinks
/// passed by later callers are dropped. Fails with `FacadeOccupied` if the
/// host already installed a different `log` implementation.
pub fn init_with_sink(sink: Box<dyn LogSink>) -> Result<()> {
    let outcome = FACILITY.get_or_init(move || {
        let logger: &'static ChannelLogger = Box::leak(Box::new(ChannelLogger::new(sink)));
        log::set_logger(logger).map_err(|_| LoggingError::FacadeOccupied)?;
        log::set_max_level(ChannelLogger::DEFAULT_LEVEL.to_level_filter());

        registry::bind_app_definition(registry::default_app_definition());

        log::debug!(target: "paychan::bootstrap", "logging facility installed");
        Ok(logger)
    });
    outcome
        .as_ref()
        .map(|_| ())
        .map_err(|err| PaychanError::from(err.clone()))
}

/// Handle to the installed facility
pub fn logger() -> Option<&'static ChannelLogger> {
    FACILITY.get().and_then(|outcome| outcome.as_ref().ok().copied())
}

/// Adjust the process-wide severity threshold
///
/// `level` uses the integer scale documented on
/// [`LogLevel`](crate::LogLevel). Unknown values are rejected and leave the
/// current threshold untouched.
pub fn set_log_level(level: i32) -> Result<()> {
    let logger = logger().ok_or(LoggingError::NotInitialized)?;
    logger.set_level_from_int(level)
}
