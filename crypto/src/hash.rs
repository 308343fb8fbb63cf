//! SHA-256 hashing for address checksums and output identifiers.

use coinview_types::{OutputId, TxHash};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let result = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Content hash of an output: `SHA-256(src_tx || index_le)`.
pub fn hash_output(id: &OutputId) -> TxHash {
    TxHash::new(sha256_multi(&[
        id.src_tx.as_bytes(),
        &id.index.to_le_bytes(),
    ]))
}
