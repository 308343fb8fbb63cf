//! Nullable gateway: scripted output sets and scripted failures.

use coinview_store::{AddressFilter, OutputSetGateway, StoreError};
use coinview_types::{Address, OutputSet};
use std::sync::Mutex;

/// An output set gateway that returns a fixed response.
///
/// The response is returned verbatim, without filtering, so tests can check
/// that callers pass it through untouched. Every query's address list is
/// recorded.
pub struct NullGateway {
    response: Result<OutputSet, StoreError>,
    queries: Mutex<Vec<Vec<Address>>>,
}

impl NullGateway {
    /// A gateway that always returns `outputs`.
    pub fn returning(outputs: OutputSet) -> Self {
        Self {
            response: Ok(outputs),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A gateway that always fails with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            response: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A gateway with no outputs.
    pub fn empty() -> Self {
        Self::returning(OutputSet::default())
    }

    /// The address lists of every query received, in call order.
    pub fn queries(&self) -> Vec<Vec<Address>> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of queries received.
    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl OutputSetGateway for NullGateway {
    fn unspent_outputs(&self, filter: &AddressFilter) -> Result<OutputSet, StoreError> {
        self.queries
            .lock()
            .unwrap()
            .push(filter.addresses().to_vec());
        self.response.clone()
    }
}
