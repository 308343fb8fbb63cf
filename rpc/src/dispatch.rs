//! Method dispatch.

use std::sync::Arc;

use tracing::debug;

use coinview_crypto::AddressCodec;
use coinview_store::OutputSetGateway;

use crate::envelope::{Request, Response, JSONRPC_VERSION};
use crate::error::RpcError;
use crate::outputs::{self, GET_OUTPUTS};

/// The capabilities every handler can use.
///
/// Holds no per-request state, so one instance is shared by all concurrent
/// calls.
#[derive(Clone)]
pub struct RpcState {
    pub codec: Arc<dyn AddressCodec>,
    pub gateway: Arc<dyn OutputSetGateway>,
}

impl RpcState {
    pub fn new(codec: Arc<dyn AddressCodec>, gateway: Arc<dyn OutputSetGateway>) -> Self {
        Self { codec, gateway }
    }

    /// Route a request to its method handler.
    pub fn handle(&self, request: &Request) -> Response {
        if request.jsonrpc != JSONRPC_VERSION {
            debug!(version = %request.jsonrpc, "unsupported jsonrpc version");
            return Response::error(request.id.clone(), &RpcError::InvalidRequest);
        }
        match request.method.as_str() {
            GET_OUTPUTS => outputs::get_outputs(request, self),
            other => {
                debug!(method = %other, "unknown method");
                Response::error(request.id.clone(), &RpcError::MethodNotFound)
            }
        }
    }

    /// Parse a raw body and handle it.
    pub fn handle_body(&self, body: &[u8]) -> Response {
        match Request::parse(body) {
            Ok(request) => self.handle(&request),
            Err((id, e)) => Response::error(id, &e),
        }
    }
}
