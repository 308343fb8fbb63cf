//! Unspent output records and the output set returned by the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Address, Coins, Hours, Timestamp, TxHash};

/// Identifies an output: the transaction that created it and its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutputId {
    pub src_tx: TxHash,
    pub index: u32,
}

impl OutputId {
    pub fn new(src_tx: TxHash, index: u32) -> Self {
        Self { src_tx, index }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.src_tx, self.index)
    }
}

/// A single unspent output owned by an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    pub id: OutputId,
    /// Content hash of the output, derived from `id`.
    pub hash: TxHash,
    pub owner: Address,
    pub coins: Coins,
    pub hours: Hours,
    /// Sequence number of the block that created this output.
    pub block_seq: u64,
    /// Time of the block that created this output.
    pub time: Timestamp,
}

impl UnspentOutput {
    /// Total hours this output holds at `head_time`: its initial hours plus
    /// the hours its coins accrued since creation.
    pub fn calculated_hours(&self, head_time: Timestamp) -> Hours {
        let accrued = self.coins.accrued_hours(self.time.elapsed_until(head_time));
        self.hours.saturating_add(accrued)
    }
}

/// A read-only snapshot of outputs matching a query, in the ledger's order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSet {
    /// Time of the ledger head when the snapshot was taken.
    pub head_time: Timestamp,
    pub outputs: Vec<UnspentOutput>,
}

impl OutputSet {
    pub fn new(head_time: Timestamp, outputs: Vec<UnspentOutput>) -> Self {
        Self { head_time, outputs }
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
