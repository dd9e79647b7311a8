//! Error types for the configuration and logging layer
//!
//! Specific error enums per concern, unified into [`PaychanError`] for the
//! public API surface. This layer deliberately has a small taxonomy: the
//! channel engine validates endpoints, paths, and contract state itself and
//! reports those failures through its own error channel.

use thiserror::Error;

// ----------------------------------------------------------------------------
// Specific Error Types
// ----------------------------------------------------------------------------

/// Address parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is not valid hex")]
    InvalidHex,
    #[error("address must be exactly 20 bytes, got {actual}")]
    WrongLength { actual: usize },
}

/// Configuration construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("listen port {value} is outside 0..=65535")]
    PortOutOfRange { value: i32 },
}

/// Logging facility errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggingError {
    #[error("unknown log level {value}, expected 0..=6")]
    UnknownLevel { value: i32 },
    #[error("unknown log level name: {name}")]
    UnknownLevelName { name: String },
    #[error("another logger already owns the process log facade")]
    FacadeOccupied,
    #[error("logging facility not initialized, call init() first")]
    NotInitialized,
}

// ----------------------------------------------------------------------------
// Unified Error Type
// ----------------------------------------------------------------------------

/// Errors produced by the binding layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaychanError {
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
}

// ----------------------------------------------------------------------------
// Type Aliases
// ----------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, PaychanError>;
