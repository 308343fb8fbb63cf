//! Ledger snapshots: a JSON capture of the unspent output set at one head.
//!
//! The daemon seeds its [`UtxoSet`] from a snapshot at startup. Addresses
//! are stored in their textual form and are validated with the same codec
//! the RPC layer uses, so a snapshot can never index an output under an
//! address that callers could not query.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use coinview_crypto::{decode_base58_address, encode_address, hash_output};
use coinview_types::{Coins, Hours, OutputId, Timestamp, TxHash, UnspentOutput};

use crate::{LedgerError, UtxoSet};

/// A snapshot of the unspent output set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Sequence number of the head block.
    pub head_seq: u64,
    /// Time of the head block.
    pub head_time: Timestamp,
    #[serde(default)]
    pub outputs: Vec<SnapshotOutput>,
}

/// One unspent output as written in a snapshot file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotOutput {
    pub address: String,
    /// Hex-encoded hash of the creating transaction.
    pub src_tx: String,
    pub index: u32,
    /// Amount in droplets.
    pub coins: Coins,
    pub hours: Hours,
    pub block_seq: u64,
    pub time: Timestamp,
}

impl SnapshotOutput {
    /// Build the snapshot form of an output.
    pub fn from_output(output: &UnspentOutput) -> Self {
        Self {
            address: encode_address(&output.owner),
            src_tx: output.id.src_tx.to_hex(),
            index: output.id.index,
            coins: output.coins,
            hours: output.hours,
            block_seq: output.block_seq,
            time: output.time,
        }
    }

    /// Validate this entry and convert it into an [`UnspentOutput`].
    pub fn to_output(&self) -> Result<UnspentOutput, LedgerError> {
        let owner =
            decode_base58_address(&self.address).map_err(|source| LedgerError::InvalidAddress {
                address: self.address.clone(),
                source,
            })?;
        let id = OutputId::new(TxHash::from_hex(&self.src_tx)?, self.index);
        Ok(UnspentOutput {
            id,
            hash: hash_output(&id),
            owner,
            coins: self.coins,
            hours: self.hours,
            block_seq: self.block_seq,
            time: self.time,
        })
    }
}

impl LedgerSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(json).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    /// Read and parse a snapshot file.
    pub fn from_file(path: &Path) -> Result<Self, LedgerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Snapshot(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LedgerError> {
        serde_json::to_string_pretty(self).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    /// Number of outputs in this snapshot.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Build a fresh [`UtxoSet`] from this snapshot.
    ///
    /// Fails on the first malformed entry or duplicate output id.
    pub fn into_utxo_set(self) -> Result<UtxoSet, LedgerError> {
        let set = UtxoSet::new();
        set.set_head(self.head_seq, self.head_time)?;
        for entry in &self.outputs {
            set.insert(entry.to_output()?)?;
        }
        info!(
            head_seq = self.head_seq,
            outputs = self.outputs.len(),
            "loaded ledger snapshot"
        );
        Ok(set)
    }
}
