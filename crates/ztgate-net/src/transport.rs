//! Transport abstraction for the ledger network.
//!
//! The transport layer opens authenticated sessions against the ledger and
//! carries chaincode calls. A production implementation speaks the network's
//! wire protocol; tests use the in-process [`crate::memory::MemoryLedger`].

use async_trait::async_trait;
use bytes::Bytes;

use ztgate_core::{ChannelName, ContractName, Identity};

use crate::error::Result;

/// Options governing how a session is opened.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Learn peer topology dynamically instead of using a static peer list.
    pub discovery: bool,

    /// Rewrite discovered peer addresses to localhost (dev networks).
    pub as_localhost: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            discovery: true,
            as_localhost: true,
        }
    }
}

/// Transport trait for opening sessions against the ledger network.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait LedgerTransport: Send + Sync {
    /// Open a session authenticated as the given identity.
    ///
    /// Fails with `Connection` if the network is unreachable. The returned
    /// session holds network resources and must be closed by the caller.
    async fn open(
        &self,
        identity: &Identity,
        options: &ConnectOptions,
    ) -> Result<Box<dyn LedgerSession>>;
}

/// An open, authenticated session against the ledger network.
///
/// Sessions are scoped to a single request. They are not pooled or shared.
#[async_trait]
pub trait LedgerSession: Send + Sync + std::fmt::Debug {
    /// Check whether the session can reach the given channel.
    async fn has_channel(&self, channel: &ChannelName) -> Result<bool>;

    /// Check whether the chaincode is deployed on the channel.
    async fn has_contract(&self, channel: &ChannelName, contract: &ContractName) -> Result<bool>;

    /// Submit a state-mutating transaction.
    ///
    /// Routes through the ordering service and blocks until the transaction
    /// is endorsed, ordered, and committed (or rejected).
    async fn submit(
        &self,
        channel: &ChannelName,
        contract: &ContractName,
        function: &str,
        args: &[String],
    ) -> Result<Bytes>;

    /// Evaluate a read-only query against a single peer's world state.
    async fn evaluate(
        &self,
        channel: &ChannelName,
        contract: &ContractName,
        function: &str,
        args: &[String],
    ) -> Result<Bytes>;

    /// Release the session's network resources.
    ///
    /// Called on every exit path, success or failure.
    async fn close(&mut self);
}
