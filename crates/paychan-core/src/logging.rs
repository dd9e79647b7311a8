//! Process-wide logging facility for the channel client bindings
//!
//! The channel engine and everything underneath it logs through the `log`
//! facade. [`ChannelLogger`] is the one facade implementation in the
//! process: it compares every record against a runtime-adjustable
//! threshold and hands the survivors to a [`LogSink`] fixed at
//! construction. The mobile host drives the threshold through the integer
//! scale documented on [`LogLevel`].

use core::fmt;
use core::str::FromStr;
use core::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::errors::{LoggingError, PaychanError, Result};

// ----------------------------------------------------------------------------
// Severity Levels
// ----------------------------------------------------------------------------

/// Severity levels, least verbose first
///
/// The discriminants form the host-facing integer scale: `0` silences
/// everything, `6` admits everything. A threshold admits a record when the
/// record's level is at or below it, so `Info` shows warnings and errors
/// but not debug output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    /// Suppress all records
    Off = 0,
    /// Unrecoverable failures
    Fatal = 1,
    /// Operation failures
    Error = 2,
    /// Suspicious conditions
    Warn = 3,
    /// Session lifecycle events
    Info = 4,
    /// Per-operation detail
    Debug = 5,
    /// Everything, including engine internals
    Trace = 6,
}

impl LogLevel {
    /// All levels, least verbose first
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Off,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Integer form used by the host control surface
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Whether a record of severity `record` passes this threshold
    pub fn allows(self, record: LogLevel) -> bool {
        record as u8 <= self as u8
    }

    /// Ceiling for the `log` facade's global filter
    ///
    /// The facade cannot express `Off`/`Fatal`; a `Fatal` threshold keeps
    /// error call sites compiled in and drops them at delivery instead.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Fatal | LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Decode a threshold stored in an atomic cell
    ///
    /// Only values written by [`ChannelLogger::set_level`] reach this, so
    /// every input is a valid discriminant; unknown values fall back to the
    /// default threshold.
    pub(crate) fn from_repr(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::Off,
            1 => LogLevel::Fatal,
            2 => LogLevel::Error,
            3 => LogLevel::Warn,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            6 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl TryFrom<i32> for LogLevel {
    type Error = PaychanError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(LogLevel::Off),
            1 => Ok(LogLevel::Fatal),
            2 => Ok(LogLevel::Error),
            3 => Ok(LogLevel::Warn),
            4 => Ok(LogLevel::Info),
            5 => Ok(LogLevel::Debug),
            6 => Ok(LogLevel::Trace),
            _ => Err(LoggingError::UnknownLevel { value }.into()),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Off => write!(f, "OFF"),
            LogLevel::Fatal => write!(f, "FATAL"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = PaychanError;

    fn from_str(s: &str) -> Result<Self> {
        LogLevel::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(&level.to_string()))
            .ok_or_else(|| LoggingError::UnknownLevelName { name: s.into() }.into())
    }
}

// ----------------------------------------------------------------------------
// Log Records
// ----------------------------------------------------------------------------

/// A formatted record on its way to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Record severity
    pub level: LogLevel,
    /// Module path of the emitting component
    pub target: String,
    /// Preformatted message text
    pub message: String,
}

// ----------------------------------------------------------------------------
// Delivery Sinks
// ----------------------------------------------------------------------------

/// Delivery target for filtered records
///
/// The sink is bound when the facility is constructed and stays in place
/// for the process lifetime.
pub trait LogSink: Send + Sync {
    /// Deliver one record
    fn deliver(&self, record: &LogRecord);

    /// Flush buffered output, if any
    fn flush(&self) {}
}

/// Writes records to stderr
///
/// The mobile default: logcat and the iOS console both capture stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn deliver(&self, record: &LogRecord) {
        eprintln!("[{}] {}: {}", record.level, record.target, record.message);
    }
}

/// Forwards records as `tracing` events
///
/// For hosts that already run a `tracing` subscriber and want engine
/// records in the same stream. The emitting component's module path rides
/// along as the `origin` field.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn deliver(&self, record: &LogRecord) {
        let origin = record.target.as_str();
        match record.level {
            LogLevel::Off => {}
            LogLevel::Fatal | LogLevel::Error => {
                tracing::error!(origin, "{}", record.message)
            }
            LogLevel::Warn => tracing::warn!(origin, "{}", record.message),
            LogLevel::Info => tracing::info!(origin, "{}", record.message),
            LogLevel::Debug => tracing::debug!(origin, "{}", record.message),
            LogLevel::Trace => tracing::trace!(origin, "{}", record.message),
        }
    }
}

// ----------------------------------------------------------------------------
// Logging Facility
// ----------------------------------------------------------------------------

/// The process logger for the channel client
///
/// Implements the `log` facade, so records emitted deep inside the engine
/// are filtered against the current threshold and delivered to the bound
/// sink. The threshold is atomic: host threads adjust it while engine
/// threads keep logging.
pub struct ChannelLogger {
    level: AtomicU8,
    sink: Box<dyn LogSink>,
}

impl ChannelLogger {
    /// Threshold a fresh facility starts at
    pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

    /// Create a facility delivering to `sink`
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        Self {
            level: AtomicU8::new(Self::DEFAULT_LEVEL as u8),
            sink,
        }
    }

    /// Current severity threshold
    pub fn level(&self) -> LogLevel {
        LogLevel::from_repr(self.level.load(Ordering::Relaxed))
    }

    /// Replace the threshold, visible process-wide immediately
    ///
    /// Also republishes the matching facade ceiling so call sites below
    /// the threshold stay cheap.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
        log::set_max_level(level.to_level_filter());
    }

    /// Checked variant for the host's integer control surface
    ///
    /// Unknown values are rejected and leave the previous threshold
    /// untouched.
    pub fn set_level_from_int(&self, value: i32) -> Result<()> {
        let level = LogLevel::try_from(value)?;
        self.set_level(level);
        Ok(())
    }

    /// Deliver a record directly, bypassing the `log` facade
    ///
    /// The facade cannot express `Fatal`; engine adapters with fatal
    /// records hand them in here.
    pub fn emit(&self, level: LogLevel, target: &str, message: impl fmt::Display) {
        if self.level().allows(level) {
            self.sink.deliver(&LogRecord {
                level,
                target: target.to_string(),
                message: message.to_string(),
            });
        }
    }
}

impl log::Log for ChannelLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.level().allows(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.sink.deliver(&LogRecord {
            level: LogLevel::from(record.level()),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {
        self.sink.flush();
    }
}
