//! Nullable infrastructure for deterministic testing.
//!
//! The RPC layer depends on two external capabilities: the address codec and
//! the output set gateway. This crate provides test-friendly implementations
//! of both that:
//! - Return scripted values
//! - Record every call so tests can assert on what was (or was not) invoked
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod codec;
pub mod gateway;

pub use codec::NullAddressCodec;
pub use gateway::NullGateway;
