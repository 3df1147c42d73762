//! # ztgate Net
//!
//! The ledger network layer for the ztgate gateway: connecting to the
//! network under a caller's own identity and dispatching chaincode calls
//! with the correct consensus semantics.
//!
//! ## Overview
//!
//! The central operation is [`GatewayConnector::connect`]: resolve the
//! caller's enrolled identity, open a fresh session authenticated as that
//! identity, bind the channel, resolve the contract, and hand back a
//! [`ContractHandle`]. [`invoke`] then routes the call as a Submit (ordered,
//! replicated, blocks until commit) or an Evaluate (single-peer read).
//!
//! ## Key Properties
//!
//! - **Identity-scoped**: no resolvable identity, no network activity.
//!   There is no shared fallback identity.
//! - **One session per call**: connections are never pooled. Every handle is
//!   released on every exit path, success or failure.
//! - **No retries**: every failure surfaces to the caller with a
//!   distinguishing kind; retry policy belongs above this layer.
//!
//! ## Transport Seam
//!
//! The actual wire protocol lives behind [`LedgerTransport`] /
//! [`LedgerSession`]. The [`memory`] module provides an in-process ledger
//! with per-contract handlers and failure injection for tests.

pub mod connector;
pub mod error;
pub mod invoker;
pub mod memory;
pub mod transport;

pub use connector::{ContractHandle, GatewayConnector};
pub use error::{NetError, Result};
pub use invoker::{invoke, invoke_request};
pub use memory::{ContractFn, MemoryLedger};
pub use transport::{ConnectOptions, LedgerSession, LedgerTransport};
