//! Error types for the network layer.

use thiserror::Error;

use ztgate_core::{ChannelName, ContractName, Username};
use ztgate_wallet::WalletError;

/// Errors that can occur while connecting to the ledger or invoking a
/// contract.
///
/// Every component surfaces failures to its caller with a distinguishing
/// kind; nothing is retried or swallowed at this layer.
#[derive(Debug, Error)]
pub enum NetError {
    /// The caller has no enrolled ledger identity.
    #[error("no enrolled identity for {0}, please log in to enroll")]
    IdentityNotFound(Username),

    /// The channel is not joined or reachable.
    #[error("channel {0} is not joined or reachable")]
    ChannelUnavailable(ChannelName),

    /// The chaincode is not installed/committed on the channel.
    #[error("contract {contract} is not deployed on channel {channel}")]
    ContractNotFound {
        contract: ContractName,
        channel: ChannelName,
    },

    /// Peers rejected the transaction (chaincode-level logic error).
    /// The message is passed through from the chaincode.
    #[error("endorsement failed: {0}")]
    Endorsement(String),

    /// The ordering service is unreachable or slow.
    #[error("commit timed out: {0}")]
    CommitTimeout(String),

    /// Transport-level failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Wallet lookup failed (storage error, not a missing identity).
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
}

/// Result type for network operations.
pub type Result<T> = std::result::Result<T, NetError>;
