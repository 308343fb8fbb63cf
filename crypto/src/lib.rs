//! Cryptographic primitives for the coinview service.
//!
//! - **SHA-256** for address checksums and output hashes
//! - **Base-58** text encoding (Bitcoin alphabet)
//! - The checksummed address codec consumed by the RPC layer

pub mod address;
pub mod base58;
pub mod hash;

pub use address::{
    decode_base58_address, encode_address, AddressCodec, AddressError, Base58AddressCodec,
    MAX_ADDRESS_TEXT_LEN,
};
pub use base58::{decode_base58, encode_base58};
pub use hash::{hash_output, sha256, sha256_multi};
