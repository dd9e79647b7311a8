//! Core identifier types for the channel client bindings
//!
//! On-chain identities and contract references are carried as opaque
//! 20-byte addresses, using newtype patterns for type safety. Whether a
//! contract has to be freshly deployed is expressed at the type level via
//! [`ContractSource`] instead of a nullable address.

use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{AddressError, PaychanError};

// ----------------------------------------------------------------------------
// On-Chain Address
// ----------------------------------------------------------------------------

/// On-chain account or contract identifier (20 bytes)
///
/// Doubles as the participant identity inside channels: the client hands
/// this value to peers as its channel ID and to the chain as its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Create a new Address from 20 bytes
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Hex form with `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = PaychanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean_str = s.strip_prefix("0x").unwrap_or(s);

        let bytes = hex::decode(clean_str).map_err(|_| AddressError::InvalidHex)?;

        // A mis-keyed on-chain address must never be silently coerced, so
        // wrong lengths are rejected rather than truncated or padded.
        if bytes.len() != 20 {
            return Err(AddressError::WrongLength {
                actual: bytes.len(),
            }
            .into());
        }

        let mut id = [0u8; 20];
        id.copy_from_slice(&bytes);
        Ok(Self(id))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

// ----------------------------------------------------------------------------
// Contract Source
// ----------------------------------------------------------------------------

/// Where an on-chain contract for a client session comes from
///
/// `Deploy` instructs the client to deploy a fresh contract instance during
/// its own construction; `Existing` points it at an already-deployed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractSource {
    /// Use the contract deployed at this address
    Existing(Address),
    /// Have the client deploy a fresh contract instance
    Deploy,
}

impl ContractSource {
    /// The deployed address, if one was provided
    pub fn address(&self) -> Option<&Address> {
        match self {
            ContractSource::Existing(address) => Some(address),
            ContractSource::Deploy => None,
        }
    }

    /// Whether the client has to deploy this contract itself
    pub fn is_deploy(&self) -> bool {
        matches!(self, ContractSource::Deploy)
    }
}

impl From<Option<Address>> for ContractSource {
    fn from(address: Option<Address>) -> Self {
        match address {
            Some(address) => ContractSource::Existing(address),
            None => ContractSource::Deploy,
        }
    }
}

impl Default for ContractSource {
    fn default() -> Self {
        ContractSource::Deploy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0xDc4A7e107aD6dBDA1870df34d70B51796BBd1335";

    #[test]
    fn test_address_parse_with_and_without_prefix() {
        let with_prefix: Address = ALICE.parse().unwrap();
        let without_prefix: Address = ALICE.trim_start_matches("0x").parse().unwrap();
        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix.as_bytes()[0], 0xdc);
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        let err = "0x0102".parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            PaychanError::Address(AddressError::WrongLength { actual: 2 })
        );

        // 21 bytes
        let long = format!("0x00{}", ALICE.trim_start_matches("0x"));
        let err = long.parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            PaychanError::Address(AddressError::WrongLength { actual: 21 })
        );
    }

    #[test]
    fn test_address_rejects_non_hex() {
        let err = "0xzz4A7e107aD6dBDA1870df34d70B51796BBd1335"
            .parse::<Address>()
            .unwrap_err();
        assert_eq!(err, PaychanError::Address(AddressError::InvalidHex));
    }

    #[test]
    fn test_address_display_round_trip() {
        let address: Address = ALICE.parse().unwrap();
        let displayed = address.to_string();
        assert_eq!(displayed, ALICE.to_lowercase());
        assert_eq!(displayed.parse::<Address>().unwrap(), address);
    }

    #[test]
    fn test_address_serializes_as_hex_string() {
        let address: Address = ALICE.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", ALICE.to_lowercase()));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
    }

    #[test]
    fn test_contract_source_distinguishes_deploy() {
        let address: Address = ALICE.parse().unwrap();
        let existing = ContractSource::Existing(address);

        assert!(!existing.is_deploy());
        assert_eq!(existing.address(), Some(&address));
        assert!(ContractSource::Deploy.is_deploy());
        assert_eq!(ContractSource::Deploy.address(), None);
        assert_ne!(existing, ContractSource::Deploy);
    }

    #[test]
    fn test_contract_source_from_option() {
        let address: Address = ALICE.parse().unwrap();
        assert_eq!(
            ContractSource::from(Some(address)),
            ContractSource::Existing(address)
        );
        assert_eq!(ContractSource::from(None), ContractSource::Deploy);
    }
}
