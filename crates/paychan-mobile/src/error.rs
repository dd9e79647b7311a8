//! Host-facing error type
//!
//! Core errors carry structured data; across the binding boundary they
//! travel as flat message strings, grouped by which host action failed.

use paychan_core::PaychanError;

/// Errors surfaced to the mobile host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum HostError {
    /// Configuration input rejected before reaching the client
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Logging control call rejected
    #[error("logging: {message}")]
    Logging { message: String },
}

impl From<PaychanError> for HostError {
    fn from(err: PaychanError) -> Self {
        match err {
            PaychanError::Address(inner) => HostError::InvalidConfig {
                message: inner.to_string(),
            },
            PaychanError::Config(inner) => HostError::InvalidConfig {
                message: inner.to_string(),
            },
            PaychanError::Logging(inner) => HostError::Logging {
                message: inner.to_string(),
            },
        }
    }
}
