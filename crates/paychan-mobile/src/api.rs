//! Host control surface
//!
//! Mirrors the calls a mobile application makes during startup: install
//! the logging facility, tune its verbosity, and assemble the
//! configuration record handed to the channel client constructor.

use paychan_core::{Address, Config, ContractSource};

use crate::error::HostError;

// ----------------------------------------------------------------------------
// Configuration Assembly
// ----------------------------------------------------------------------------

/// Configuration inputs as the binding layer carries them
///
/// All fields are plain strings and integers so the record crosses the FFI
/// boundary unchanged; [`HostConfig::build`] parses them into the typed
/// [`Config`]. Omitted contract addresses instruct the client to deploy
/// fresh instances during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct HostConfig {
    /// Display name used in channels
    pub alias: String,
    /// This participant's on-chain address, 0x-prefixed hex
    pub address: String,
    /// Deployed adjudicator contract, or none to deploy
    pub adjudicator: Option<String>,
    /// Deployed asset-holder contract, or none to deploy
    pub asset_holder: Option<String>,
    /// Path to the client database directory
    pub database_path: String,
    /// Blockchain node endpoint URL
    pub node_url: String,
    /// Host the channel listener binds
    pub listen_address: String,
    /// Port the channel listener binds, 0..=65535
    pub listen_port: i32,
}

impl HostConfig {
    /// Parse and validate into the typed configuration record
    pub fn build(self) -> Result<Config, HostError> {
        let address: Address = self.address.parse()?;
        let adjudicator = parse_contract(self.adjudicator.as_deref())?;
        let asset_holder = parse_contract(self.asset_holder.as_deref())?;

        Config::new(
            self.alias,
            address,
            adjudicator,
            asset_holder,
            self.database_path,
            self.node_url,
            self.listen_address,
            self.listen_port,
        )
        .map_err(Into::into)
    }
}

fn parse_contract(hex: Option<&str>) -> Result<ContractSource, HostError> {
    match hex {
        Some(address) => Ok(ContractSource::Existing(address.parse()?)),
        None => Ok(ContractSource::Deploy),
    }
}

/// Assemble a configuration record for the channel client
#[allow(clippy::too_many_arguments)]
pub fn new_config(
    alias: String,
    address: String,
    adjudicator: Option<String>,
    asset_holder: Option<String>,
    database_path: String,
    node_url: String,
    listen_address: String,
    listen_port: i32,
) -> Result<Config, HostError> {
    HostConfig {
        alias,
        address,
        adjudicator,
        asset_holder,
        database_path,
        node_url,
        listen_address,
        listen_port,
    }
    .build()
}

// ----------------------------------------------------------------------------
// Process Control
// ----------------------------------------------------------------------------

/// Install the logging facility and the application registry
///
/// Call once during application startup, before constructing the channel
/// client. Calling again is a no-op.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn initialize() -> Result<(), HostError> {
    paychan_core::init()?;
    log::info!(target: "paychan::mobile", "bindings initialized");
    Ok(())
}

/// Set the process-wide log verbosity
///
/// `level` follows the scale on [`paychan_core::LogLevel`]: 0 silences
/// everything, 6 enables trace output. Unknown values are rejected and
/// leave the current threshold in place.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn set_log_level(level: i32) -> Result<(), HostError> {
    paychan_core::set_log_level(level).map_err(Into::into)
}
