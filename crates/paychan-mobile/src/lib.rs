//! Mobile composition root for the channel client bindings
//!
//! Hosts (Kotlin/Swift) drive this crate through a deliberately flat
//! surface: strings and integers in, [`HostError`] out. UniFFI derives and
//! exports are feature-gated behind the `ios`/`android` platform features;
//! the default build is plain Rust for native consumers and tests.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

mod api;
mod error;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use api::{initialize, new_config, set_log_level, HostConfig};
pub use error::HostError;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
