//! The in-memory unspent output set.
//!
//! Outputs are kept in a `BTreeMap` keyed by [`OutputId`], so every query
//! returns outputs in the same deterministic order (transaction hash, then
//! index). A secondary index maps each owner address to its output ids,
//! which keeps a lookup proportional to the number of matching outputs
//! rather than the size of the whole set.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use coinview_store::{AddressFilter, OutputSetGateway, StoreError};
use coinview_types::{Address, OutputId, OutputSet, Timestamp, UnspentOutput};

use crate::LedgerError;

#[derive(Default)]
struct Inner {
    head_seq: u64,
    head_time: Timestamp,
    outputs: BTreeMap<OutputId, UnspentOutput>,
    by_address: HashMap<Address, BTreeSet<OutputId>>,
}

/// Thread-safe unspent output set with an owner index.
#[derive(Default)]
pub struct UtxoSet {
    inner: RwLock<Inner>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("utxo set lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("utxo set lock poisoned".into()))
    }

    /// Add a new unspent output. Fails if an output with the same id exists.
    pub fn insert(&self, output: UnspentOutput) -> Result<(), LedgerError> {
        let mut inner = self.write()?;
        if inner.outputs.contains_key(&output.id) {
            return Err(LedgerError::DuplicateOutput(output.id.to_string()));
        }
        inner
            .by_address
            .entry(output.owner)
            .or_default()
            .insert(output.id);
        inner.outputs.insert(output.id, output);
        Ok(())
    }

    /// Advance the ledger head.
    pub fn set_head(&self, seq: u64, time: Timestamp) -> Result<(), LedgerError> {
        let mut inner = self.write()?;
        inner.head_seq = seq;
        inner.head_time = time;
        Ok(())
    }

    /// Sequence number and time of the ledger head.
    pub fn head(&self) -> Result<(u64, Timestamp), LedgerError> {
        let inner = self.read()?;
        Ok((inner.head_seq, inner.head_time))
    }

    /// Number of unspent outputs in the set.
    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read()?.outputs.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl OutputSetGateway for UtxoSet {
    fn unspent_outputs(&self, filter: &AddressFilter) -> Result<OutputSet, StoreError> {
        let inner = self.read()?;

        // Union of the per-address indexes; duplicate addresses collapse here.
        let ids: BTreeSet<&OutputId> = filter
            .addresses()
            .iter()
            .filter_map(|addr| inner.by_address.get(addr))
            .flatten()
            .collect();

        let outputs = ids
            .into_iter()
            .map(|id| {
                inner.outputs.get(id).cloned().ok_or_else(|| {
                    StoreError::Corruption(format!("address index references missing output {id}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OutputSet::new(inner.head_time, outputs))
    }
}
