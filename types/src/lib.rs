//! Fundamental types for the coinview output query service.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! canonical addresses, transaction hashes, amounts, timestamps and the
//! unspent output records returned by the ledger.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod output;
pub mod time;

pub use address::Address;
pub use amount::{Coins, Hours, DROPLETS_PER_COIN};
pub use error::TypesError;
pub use hash::TxHash;
pub use output::{OutputId, OutputSet, UnspentOutput};
pub use time::Timestamp;
