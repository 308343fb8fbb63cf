//! Nullable address codec: accepts a fixed set of literal strings.

use coinview_crypto::{AddressCodec, AddressError};
use coinview_types::Address;
use std::collections::HashMap;
use std::sync::Mutex;

/// An address codec backed by an allow-list.
///
/// Any text that was not registered with [`NullAddressCodec::with_address`]
/// fails with [`AddressError::InvalidBase58`]. Every decode attempt is
/// recorded, in order, including the failing one.
#[derive(Default)]
pub struct NullAddressCodec {
    known: HashMap<String, Address>,
    calls: Mutex<Vec<String>>,
}

impl NullAddressCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` as a valid address decoding to `address`.
    pub fn with_address(mut self, text: impl Into<String>, address: Address) -> Self {
        self.known.insert(text.into(), address);
        self
    }

    /// The texts passed to `decode`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AddressCodec for NullAddressCodec {
    fn decode(&self, text: &str) -> Result<Address, AddressError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.known
            .get(text)
            .copied()
            .ok_or(AddressError::InvalidBase58)
    }

    /// Returns the registered text for `address`, falling back to the
    /// base-58 rendering for addresses that were never registered.
    fn encode(&self, address: &Address) -> String {
        self.known
            .iter()
            .filter(|(_, known)| *known == address)
            .map(|(text, _)| text.clone())
            .min()
            .unwrap_or_else(|| coinview_crypto::encode_address(address))
    }
}
