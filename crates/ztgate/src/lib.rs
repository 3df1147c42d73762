//! # ztgate
//!
//! The unified API for the ztgate system - an identity-scoped gateway to a
//! permissioned distributed ledger.
//!
//! ## Overview
//!
//! ztgate lets authenticated end users invoke smart-contract functions under
//! their own cryptographic identity, never a shared service identity:
//!
//! - **Wallet**: maps a username to an enrolled credential
//! - **Connector**: opens a fresh, identity-scoped session per request
//! - **Invoker**: dispatches Submit (ordered, replicated) or Evaluate
//!   (local read) calls
//! - **Dispatcher**: maps every outcome to a uniform response envelope
//!
//! ## Key Concepts
//!
//! - **Zero trust**: no resolvable identity means no network activity.
//! - **Per-request connections**: a session lives exactly as long as one
//!   invocation and is released on every exit path.
//! - **Static modes**: whether an operation submits or evaluates is a
//!   property of the operation, never of request data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ztgate::{Gateway, GatewayConfig, LedgerOp};
//! use ztgate::wallet::SqliteWallet;
//! use ztgate::net::MemoryLedger;
//!
//! async fn example() {
//!     let wallet = Arc::new(SqliteWallet::open("wallet.db").unwrap());
//!     let ledger = Arc::new(MemoryLedger::new());
//!
//!     let gateway = Gateway::new(wallet, ledger, GatewayConfig::default());
//!
//!     // Typed call surface
//!     // let result = gateway.create_task(Some("alice"), "t1", "a task").await;
//!
//!     // Or the generic dispatch surface for the HTTP layer
//!     let reply = gateway
//!         .dispatch(Some("alice"), LedgerOp::GetTask, vec!["t1".to_string()])
//!         .await;
//!     println!("{} {:?}", reply.status, reply.body);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `ztgate::core` - Core primitives (Identity, TransactionRequest, codec)
//! - `ztgate::wallet` - Identity persistence
//! - `ztgate::net` - Connector, invoker, transport seam

pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod ops;

// Re-export component crates
pub use ztgate_core as core;
pub use ztgate_net as net;
pub use ztgate_wallet as wallet;

// Re-export main types for convenience
pub use config::GatewayConfig;
pub use envelope::{Envelope, Reply};
pub use error::{GatewayError, Result};
pub use gateway::Gateway;
pub use ops::LedgerOp;

// Re-export commonly used core types
pub use ztgate_core::{
    decode, ChannelName, ContractName, DecodedPayload, Identity, InvocationMode, MspId,
    TransactionRequest, TransactionResult, Username,
};
