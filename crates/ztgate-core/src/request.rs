//! Transaction requests and results.
//!
//! A [`TransactionRequest`] names a chaincode function, its positional
//! arguments, and the consensus semantics the call must use. It is immutable
//! once built.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::DecodedPayload;
use crate::types::ContractName;

/// How an invocation is routed through the ledger network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvocationMode {
    /// Ordered, replicated write. Blocks until the transaction is endorsed,
    /// ordered, and committed (or rejected).
    Submit,

    /// Read-only query against a single peer's world state. No ordering,
    /// no replication, side-effect-free.
    Evaluate,
}

impl InvocationMode {
    /// Check if this mode mutates ledger state.
    pub fn is_submit(self) -> bool {
        matches!(self, InvocationMode::Submit)
    }

    /// Check if this mode is a local read.
    pub fn is_evaluate(self) -> bool {
        matches!(self, InvocationMode::Evaluate)
    }
}

/// A chaincode call: contract, function, positional args, and mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// The contract to resolve within the channel.
    pub contract: ContractName,

    /// The chaincode function to call.
    pub function: String,

    /// Positional arguments, in the fixed order the function expects.
    pub args: Vec<String>,

    /// Consensus semantics for the call.
    pub mode: InvocationMode,
}

impl TransactionRequest {
    /// Start building a Submit (state-mutating) request.
    pub fn submit(contract: ContractName, function: impl Into<String>) -> Self {
        Self {
            contract,
            function: function.into(),
            args: Vec::new(),
            mode: InvocationMode::Submit,
        }
    }

    /// Start building an Evaluate (read-only) request.
    pub fn evaluate(contract: ContractName, function: impl Into<String>) -> Self {
        Self {
            contract,
            function: function.into(),
            args: Vec::new(),
            mode: InvocationMode::Evaluate,
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// The outcome of a completed invocation.
///
/// Produced once per request and consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    /// Raw bytes exactly as the chaincode returned them.
    pub raw: Bytes,

    /// Best-effort decoded view of the raw bytes.
    pub decoded: DecodedPayload,
}

impl TransactionResult {
    /// Decode raw chaincode output into a result.
    pub fn from_raw(raw: impl Into<Bytes>) -> Self {
        let raw = raw.into();
        let decoded = crate::codec::decode(&raw);
        Self { raw, decoded }
    }
}
