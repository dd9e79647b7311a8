//! Client session configuration
//!
//! A [`Config`] bundles everything the channel client constructor needs:
//! the participant identity, the contract setup, the persistence location,
//! and the network endpoints. The record is a pure value — construct it,
//! hand it to the client, and build a new one to reconfigure.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};
use crate::types::{Address, ContractSource};

// ----------------------------------------------------------------------------
// Session Configuration
// ----------------------------------------------------------------------------

/// Complete configuration needed to operate a channel client
///
/// All fields are fixed at construction. Validation beyond the listen-port
/// range (node reachability, database writability, contract code at the
/// given addresses) is the client's concern, not this record's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display name used when proposing and joining channels
    pub alias: String,
    /// This participant's on-chain identity and channel peer ID
    pub address: Address,
    /// Adjudicator contract deciding channel disputes
    pub adjudicator: ContractSource,
    /// Asset-holder contract backing channel balances
    pub asset_holder: ContractSource,
    /// Location of the client's persistent channel database
    pub database_path: PathBuf,
    /// Blockchain node endpoint, e.g. `ws://127.0.0.1:8545`
    pub node_url: String,
    /// Host the channel listener binds
    pub listen_address: String,
    /// Port the channel listener binds
    pub listen_port: u16,
}

impl Config {
    /// Build a configuration record
    ///
    /// `listen_port` arrives as the host-side integer and is range-checked
    /// into a `u16`; out-of-range values are rejected instead of wrapped.
    /// Everything else passes through unmodified.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alias: impl Into<String>,
        address: Address,
        adjudicator: ContractSource,
        asset_holder: ContractSource,
        database_path: impl Into<PathBuf>,
        node_url: impl Into<String>,
        listen_address: impl Into<String>,
        listen_port: i32,
    ) -> Result<Self> {
        let listen_port = u16::try_from(listen_port)
            .map_err(|_| ConfigError::PortOutOfRange { value: listen_port })?;

        Ok(Self {
            alias: alias.into(),
            address,
            adjudicator,
            asset_holder,
            database_path: database_path.into(),
            node_url: node_url.into(),
            listen_address: listen_address.into(),
            listen_port,
        })
    }

    /// `host:port` endpoint string for the channel listener
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.listen_address, self.listen_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PaychanError;

    fn alice() -> Address {
        "0xDc4A7e107aD6dBDA1870df34d70B51796BBd1335"
            .parse()
            .unwrap()
    }

    fn adjudicator() -> Address {
        "0xb051EAD0C6CC2f568166F8fEC4f07511B88678bA"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_construct_keeps_every_field() {
        let config = Config::new(
            "Alice",
            alice(),
            ContractSource::Existing(adjudicator()),
            ContractSource::Deploy,
            "/data/app/database",
            "ws://10.0.2.2:8545",
            "127.0.0.1",
            5750,
        )
        .unwrap();

        assert_eq!(config.alias, "Alice");
        assert_eq!(config.address, alice());
        assert_eq!(
            config.adjudicator,
            ContractSource::Existing(adjudicator())
        );
        assert_eq!(config.asset_holder, ContractSource::Deploy);
        assert_eq!(config.database_path, PathBuf::from("/data/app/database"));
        assert_eq!(config.node_url, "ws://10.0.2.2:8545");
        assert_eq!(config.listen_address, "127.0.0.1");
        assert_eq!(config.listen_port, 5750);
    }

    #[test]
    fn test_empty_alias_is_allowed() {
        let config = Config::new(
            "",
            alice(),
            ContractSource::Deploy,
            ContractSource::Deploy,
            "db",
            "ws://127.0.0.1:8545",
            "0.0.0.0",
            0,
        )
        .unwrap();
        assert_eq!(config.alias, "");
        assert_eq!(config.listen_port, 0);
    }

    #[test]
    fn test_port_bounds() {
        let build = |port: i32| {
            Config::new(
                "Alice",
                alice(),
                ContractSource::Deploy,
                ContractSource::Deploy,
                "db",
                "ws://127.0.0.1:8545",
                "127.0.0.1",
                port,
            )
        };

        assert_eq!(build(0).unwrap().listen_port, 0);
        assert_eq!(build(65535).unwrap().listen_port, 65535);

        let err = build(65536).unwrap_err();
        assert_eq!(
            err,
            PaychanError::Config(ConfigError::PortOutOfRange { value: 65536 })
        );
        let err = build(-1).unwrap_err();
        assert_eq!(
            err,
            PaychanError::Config(ConfigError::PortOutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_listen_socket() {
        let config = Config::new(
            "Alice",
            alice(),
            ContractSource::Deploy,
            ContractSource::Deploy,
            "db",
            "ws://127.0.0.1:8545",
            "10.0.2.2",
            5750,
        )
        .unwrap();
        assert_eq!(config.listen_socket(), "10.0.2.2:5750");
    }
}
