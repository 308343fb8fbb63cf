//! Address filter passed to the gateway.

use coinview_types::Address;

/// Selects outputs owned by any of a list of addresses.
///
/// The addresses are kept exactly as supplied, duplicates included.
/// Collapsing duplicates is the gateway's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFilter {
    addresses: Vec<Address>,
}

impl AddressFilter {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }
}

impl FromIterator<Address> for AddressFilter {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
