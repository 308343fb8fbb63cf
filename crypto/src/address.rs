//! Checksummed base-58 address codec.
//!
//! Binary layout: `key (20 bytes) || version (1 byte) || checksum (4 bytes)`.
//!
//! Checksum: first 4 bytes of SHA-256(key || version).
//! The 25-byte string is rendered with the base-58 Bitcoin alphabet.

use coinview_types::Address;
use thiserror::Error;

use crate::base58::{decode_base58, encode_base58};

/// Length of the key hash.
const KEY_LEN: usize = Address::KEY_LEN;
/// Length of the checksum suffix.
const CHECKSUM_LEN: usize = 4;
/// Total decoded length: key + version + checksum.
const ADDRESS_LEN: usize = KEY_LEN + 1 + CHECKSUM_LEN;
/// Longest base-58 rendering of a 25-byte value.
pub const MAX_ADDRESS_TEXT_LEN: usize = 35;

/// Reasons a textual address can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid base58 character")]
    InvalidBase58,

    #[error("invalid address length: {0} bytes")]
    InvalidLength(usize),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid address version: {0}")]
    InvalidVersion(u8),
}

/// Converts between caller-facing address text and canonical addresses.
///
/// The RPC layer only depends on this trait, so tests can substitute a
/// codec that accepts a fixed set of literal strings.
pub trait AddressCodec: Send + Sync {
    /// Validate `text` and decode it into its canonical form.
    fn decode(&self, text: &str) -> Result<Address, AddressError>;

    /// Render a canonical address as text.
    fn encode(&self, address: &Address) -> String;
}

/// The production codec: base-58 with a SHA-256 checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58AddressCodec;

impl AddressCodec for Base58AddressCodec {
    fn decode(&self, text: &str) -> Result<Address, AddressError> {
        decode_base58_address(text)
    }

    fn encode(&self, address: &Address) -> String {
        encode_address(address)
    }
}

fn checksum(key: &[u8; KEY_LEN], version: u8) -> [u8; CHECKSUM_LEN] {
    let hash = crate::sha256_multi(&[key, &[version]]);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Render a canonical address as base-58 text.
pub fn encode_address(address: &Address) -> String {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[..KEY_LEN].copy_from_slice(address.key());
    bytes[KEY_LEN] = address.version();
    bytes[KEY_LEN + 1..].copy_from_slice(&checksum(address.key(), address.version()));
    encode_base58(&bytes)
}

/// Decode and verify a base-58 address string.
///
/// The text is taken as-is: surrounding whitespace is not stripped here.
/// Text longer than [`MAX_ADDRESS_TEXT_LEN`] is rejected before decoding.
pub fn decode_base58_address(text: &str) -> Result<Address, AddressError> {
    if text.is_empty() {
        return Err(AddressError::Empty);
    }
    if text.len() > MAX_ADDRESS_TEXT_LEN {
        return Err(AddressError::InvalidLength(text.len()));
    }
    let bytes = decode_base58(text).ok_or(AddressError::InvalidBase58)?;
    if bytes.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength(bytes.len()));
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&bytes[..KEY_LEN]);
    let version = bytes[KEY_LEN];

    if bytes[KEY_LEN + 1..] != checksum(&key, version) {
        return Err(AddressError::InvalidChecksum);
    }
    if version != Address::CURRENT_VERSION {
        return Err(AddressError::InvalidVersion(version));
    }

    Ok(Address::new(version, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new(0, *b"coinview-test-key-20")
    }

    #[test]
    fn encode_and_decode() {
        let addr = sample();
        let text = encode_address(&addr);
        assert_eq!(decode_base58_address(&text), Ok(addr));
    }

    #[test]
    fn oversized_text_rejected_before_decoding() {
        let text = "2".repeat(2 * 1024 * 1024);
        assert_eq!(
            decode_base58_address(&text),
            Err(AddressError::InvalidLength(text.len()))
        );
    }

    #[test]
    fn longest_valid_encoding_fits_limit() {
        let addr = Address::new(0, [0xff; 20]);
        let text = encode_address(&addr);
        assert!(text.len() <= MAX_ADDRESS_TEXT_LEN);
        assert_eq!(decode_base58_address(&text), Ok(addr));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(decode_base58_address(""), Err(AddressError::Empty));
    }

    #[test]
    fn non_alphabet_rejected() {
        assert_eq!(
            decode_base58_address("not-an-address"),
            Err(AddressError::InvalidBase58)
        );
    }

    #[test]
    fn surrounding_spaces_rejected() {
        let text = format!(" {} ", encode_address(&sample()));
        assert_eq!(
            decode_base58_address(&text),
            Err(AddressError::InvalidBase58)
        );
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(
            decode_base58_address("2g"),
            Err(AddressError::InvalidLength(1))
        );
        let long = encode_base58(&[7u8; ADDRESS_LEN + 1]);
        assert_eq!(
            decode_base58_address(&long),
            Err(AddressError::InvalidLength(ADDRESS_LEN + 1))
        );
    }

    #[test]
    fn invalid_checksum_rejected() {
        let mut bytes = decode_base58(&encode_address(&sample())).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert_eq!(
            decode_base58_address(&encode_base58(&bytes)),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn nonzero_version_rejected() {
        let addr = Address::new(1, *sample().key());
        assert_eq!(
            decode_base58_address(&encode_address(&addr)),
            Err(AddressError::InvalidVersion(1))
        );
    }

    #[test]
    fn codec_trait_delegates() {
        let codec = Base58AddressCodec;
        let text = encode_address(&sample());
        assert_eq!(codec.decode(&text), Ok(sample()));
        assert_eq!(codec.encode(&sample()), text);
        assert!(codec.decode("xyz").is_err());
    }
}
