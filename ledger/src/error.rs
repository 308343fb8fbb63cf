use coinview_crypto::AddressError;
use coinview_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("duplicate output: {0}")]
    DuplicateOutput(String),

    #[error("invalid address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("invalid output field: {0}")]
    InvalidField(#[from] TypesError),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("storage error: {0}")]
    Storage(#[from] coinview_store::StoreError),
}
