//! Abstract read interface over the ledger's unspent output set.
//!
//! Every backend (the in-memory ledger, test doubles) implements
//! [`OutputSetGateway`]. The RPC layer depends only on the trait.

pub mod error;
pub mod filter;
pub mod gateway;

pub use error::StoreError;
pub use filter::AddressFilter;
pub use gateway::OutputSetGateway;
