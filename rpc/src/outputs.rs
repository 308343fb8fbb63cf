//! The `get_outputs` method.
//!
//! Three stages, each usable on its own:
//! - [`validate_params`] decodes and cleans the caller's address list.
//! - [`OutputsQuery::execute`] decodes every address, fails fast on the
//!   first invalid one, then makes a single gateway call.
//! - [`format_outputs`] turns the outcome into a response envelope.
//!
//! Validation stops at the first invalid address and reports only that one.

use serde_json::Value;
use tracing::{debug, error};

use coinview_crypto::AddressCodec;
use coinview_store::{AddressFilter, OutputSetGateway};
use coinview_types::OutputSet;

use crate::dispatch::RpcState;
use crate::envelope::{Request, Response};
use crate::error::RpcError;
use crate::handlers::{OutputsResult, ReadableOutput};

/// Method name.
pub const GET_OUTPUTS: &str = "get_outputs";

/// Operation named in internal error messages when the gateway fails.
const GATEWAY_OPERATION: &str = "get unspent outputs";

/// Outputs matching a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub outputs: OutputSet,
}

/// Decode the parameter list and trim each entry.
///
/// Only the ASCII space character is trimmed. The emptiness check runs on the
/// list as decoded, before trimming, so `["  "]` passes here and is rejected
/// later as an invalid address. Order and duplicates are kept.
pub fn validate_params(request: &Request) -> Result<Vec<String>, RpcError> {
    let addresses: Vec<String> = request.decode_params()?;
    if addresses.is_empty() {
        return Err(RpcError::InvalidParams);
    }
    Ok(addresses
        .into_iter()
        .map(|a| a.trim_matches(' ').to_string())
        .collect())
}

/// Runs one address query against the codec and gateway.
pub struct OutputsQuery<'a> {
    codec: &'a dyn AddressCodec,
    gateway: &'a dyn OutputSetGateway,
}

impl<'a> OutputsQuery<'a> {
    pub fn new(codec: &'a dyn AddressCodec, gateway: &'a dyn OutputSetGateway) -> Self {
        Self { codec, gateway }
    }

    /// Decode every address, then fetch their unspent outputs.
    ///
    /// The gateway is not called unless every address decodes. Its output set
    /// is returned as-is: no filtering, reordering or deduplication here.
    pub fn execute(&self, addresses: &[String]) -> Result<QueryResult, RpcError> {
        let decoded = addresses
            .iter()
            .map(|text| {
                self.codec.decode(text).map_err(|e| {
                    debug!(address = %text, reason = %e, "rejected address");
                    RpcError::InvalidAddress(text.clone())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let filter = AddressFilter::new(decoded);
        let outputs = self.gateway.unspent_outputs(&filter).map_err(|e| {
            error!(error = ?e, addresses = addresses.len(), "get unspent outputs failed: {e}");
            RpcError::internal(GATEWAY_OPERATION, e)
        })?;

        Ok(QueryResult { outputs })
    }
}

/// Build the response envelope for a query outcome.
pub fn format_outputs(
    outcome: Result<QueryResult, RpcError>,
    codec: &dyn AddressCodec,
    id: Value,
) -> Response {
    let result = outcome.and_then(|QueryResult { outputs: set }| {
        let body = OutputsResult {
            outputs: set
                .outputs
                .iter()
                .map(|o| ReadableOutput::new(o, set.head_time, codec))
                .collect(),
        };
        serde_json::to_value(body).map_err(|e| RpcError::internal("encode outputs", e))
    });

    match result {
        Ok(body) => Response::success(id, body),
        Err(e) => Response::error(id, &e),
    }
}

/// Handle a `get_outputs` request end to end.
pub fn get_outputs(request: &Request, state: &RpcState) -> Response {
    let codec = state.codec.as_ref();
    let outcome = validate_params(request)
        .and_then(|addresses| OutputsQuery::new(codec, state.gateway.as_ref()).execute(&addresses));
    format_outputs(outcome, codec, request.id.clone())
}
