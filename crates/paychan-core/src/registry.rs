//! Payment application registry
//!
//! The channel engine resolves which application governs a payment channel
//! through the app contract address recorded here. Binding happens once
//! during bootstrap and the slot never changes afterwards, so application
//! resolution needs no further synchronization.

use std::sync::OnceLock;

use crate::types::Address;

/// On-chain address of the payment application contract
const PAYMENT_APP: [u8; 20] = [
    0x05, 0x83, 0x84, 0x9a, 0x3c, 0x5f, 0x37, 0xae, 0xfa, 0xb8, 0xcc, 0xca, 0x30, 0x3f, 0x92,
    0x29, 0xad, 0xf5, 0xa3, 0x2a,
];

static BOUND: OnceLock<Address> = OnceLock::new();

/// The compiled-in payment application address
pub fn default_app_definition() -> Address {
    Address::new(PAYMENT_APP)
}

/// Bind the application definition for this process
///
/// The first call wins; returns whether this call performed the binding.
/// Must complete before any channel operation that resolves an application
/// type, which bootstrap guarantees by binding before the client exists.
pub fn bind_app_definition(address: Address) -> bool {
    BOUND.set(address).is_ok()
}

/// Currently bound application definition, if bootstrap has run
pub fn app_definition() -> Option<Address> {
    BOUND.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_is_write_once() {
        // single test touching the process-global slot, so the whole
        // lifecycle runs as ordered steps
        assert_eq!(app_definition(), None);

        assert!(bind_app_definition(default_app_definition()));
        assert_eq!(app_definition(), Some(default_app_definition()));

        let other: Address = "0xA298Fc05bccff341f340a11FffA30567a00e651f"
            .parse()
            .unwrap();
        assert!(!bind_app_definition(other));
        assert_eq!(app_definition(), Some(default_app_definition()));
    }

    #[test]
    fn test_default_app_definition_hex() {
        assert_eq!(
            default_app_definition().to_hex(),
            "0x0583849a3c5f37aefab8ccca303f9229adf5a32a"
        );
    }
}
