//! Configuration and logging layer for a mobile payment-channel client
//!
//! This crate carries the two pieces a host environment needs before it can
//! stand up the channel engine: an immutable [`Config`] record describing a
//! client session, and a process-wide logging facility with a
//! runtime-adjustable severity threshold. The engine itself (channel
//! protocols, persistence, networking) lives elsewhere and is reached
//! through the `log` facade and the opaque [`Address`] identifiers defined
//! here.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod types;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use bootstrap::{init, init_with_sink, logger, set_log_level};
pub use config::Config;
pub use errors::{AddressError, ConfigError, LoggingError, PaychanError, Result};
pub use logging::{ChannelLogger, ConsoleSink, LogLevel, LogRecord, LogSink, TracingSink};
pub use types::{Address, ContractSource};
