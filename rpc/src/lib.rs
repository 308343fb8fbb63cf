//! JSON-RPC server for unspent output queries.
//!
//! Provides the `get_outputs` method: given a list of address strings, return
//! the unspent outputs they own. The request pipeline is
//! validate params -> decode addresses -> query the gateway -> format.

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod outputs;
pub mod server;

pub use config::RpcConfig;
pub use dispatch::RpcState;
pub use envelope::{Outcome, Request, Response};
pub use error::{ConfigError, ErrorObject, RpcError, ServerError};
pub use outputs::{OutputsQuery, QueryResult};
pub use server::RpcServer;
