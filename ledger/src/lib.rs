//! In-memory unspent output ledger.
//!
//! Holds the authoritative output set indexed by owner address and serves
//! read queries through [`coinview_store::OutputSetGateway`]. The set is
//! seeded from a JSON snapshot at startup.

pub mod error;
pub mod snapshot;
pub mod utxo_set;

pub use error::LedgerError;
pub use snapshot::{LedgerSnapshot, SnapshotOutput};
pub use utxo_set::UtxoSet;
