//! Canonical (decoded) address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded, checksum-verified address.
///
/// The textual base-58 form lives in `coinview-crypto`; this type only holds
/// the binary identifier the ledger indexes outputs by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address {
    version: u8,
    key: [u8; 20],
}

impl Address {
    /// The only address version currently accepted by the ledger.
    pub const CURRENT_VERSION: u8 = 0;

    /// Size of the key hash in bytes.
    pub const KEY_LEN: usize = 20;

    pub fn new(version: u8, key: [u8; 20]) -> Self {
        Self { version, key }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn key(&self) -> &[u8; 20] {
        &self.key
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address(v{}, {})",
            self.version,
            hex::encode(&self.key[..4])
        )
    }
}
