//! RPC response bodies.

use serde::{Deserialize, Serialize};

use coinview_crypto::AddressCodec;
use coinview_types::{Timestamp, UnspentOutput};

// ── Outputs ──────────────────────────────────────────────────────────────

/// Body of a successful `get_outputs` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputsResult {
    pub outputs: Vec<ReadableOutput>,
}

/// A single unspent output in caller-facing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableOutput {
    pub hash: String,
    pub src_tx: String,
    pub index: u32,
    pub address: String,
    /// Decimal coin amount with six fractional digits.
    pub coins: String,
    pub hours: u64,
    /// Hours including those accrued up to the ledger head.
    pub calculated_hours: u64,
    pub block_seq: u64,
    pub time: u64,
}

impl ReadableOutput {
    pub fn new(output: &UnspentOutput, head_time: Timestamp, codec: &dyn AddressCodec) -> Self {
        Self {
            hash: output.hash.to_hex(),
            src_tx: output.id.src_tx.to_hex(),
            index: output.id.index,
            address: codec.encode(&output.owner),
            coins: output.coins.to_string(),
            hours: output.hours.value(),
            calculated_hours: output.calculated_hours(head_time).value(),
            block_seq: output.block_seq,
            time: output.time.as_secs(),
        }
    }
}
