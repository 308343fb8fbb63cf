//! Read interface over the authoritative unspent output set.

use crate::{AddressFilter, StoreError};
use coinview_types::OutputSet;

/// The ledger's read interface for unspent outputs.
///
/// Implementations provide their own concurrency control: callers may invoke
/// `unspent_outputs` from many threads at once without coordination.
pub trait OutputSetGateway: Send + Sync {
    /// Return every current unspent output owned by an address in `filter`,
    /// in the backend's canonical order.
    fn unspent_outputs(&self, filter: &AddressFilter) -> Result<OutputSet, StoreError>;
}

