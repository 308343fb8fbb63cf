//! RPC error types.
//!
//! [`RpcError`] is the closed set of failures a caller can observe. Each kind
//! maps to a stable JSON-RPC error code via [`RpcError::code`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable wire codes.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    #[error("Parse error")]
    Parse,

    #[error("Invalid request")]
    InvalidRequest,

    #[error("Method not found")]
    MethodNotFound,

    #[error("Invalid params")]
    InvalidParams,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("{operation} failed: {detail}")]
    Internal { operation: String, detail: String },
}

impl RpcError {
    /// Build an internal error for a failed operation.
    pub fn internal(operation: impl Into<String>, detail: impl ToString) -> Self {
        RpcError::Internal {
            operation: operation.into(),
            detail: detail.to_string(),
        }
    }

    /// The JSON-RPC error code for this kind.
    ///
    /// An invalid address shares the invalid-params code; callers tell the two
    /// apart by the message.
    pub fn code(&self) -> i32 {
        match self {
            RpcError::Parse => codes::PARSE_ERROR,
            RpcError::InvalidRequest => codes::INVALID_REQUEST,
            RpcError::MethodNotFound => codes::METHOD_NOT_FOUND,
            RpcError::InvalidParams | RpcError::InvalidAddress(_) => codes::INVALID_PARAMS,
            RpcError::Internal { .. } => codes::INTERNAL_ERROR,
        }
    }

    pub fn to_error_object(&self) -> ErrorObject {
        ErrorObject {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// The `error` member of a failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// Failures loading or validating [`crate::RpcConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failures starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
