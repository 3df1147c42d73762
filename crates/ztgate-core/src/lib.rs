//! # ztgate Core
//!
//! Pure primitives for the ztgate ledger gateway: identities, transaction
//! requests, and result decoding.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over gateway data structures.
//!
//! ## Key Types
//!
//! - [`Identity`] - An enrolled ledger credential (certificate, key, MSP id)
//! - [`Username`] - The exact-match key an identity is stored under
//! - [`TransactionRequest`] - A chaincode call plus its consensus mode
//! - [`InvocationMode`] - Submit (ordered, replicated) vs Evaluate (local)
//! - [`DecodedPayload`] - Tagged JSON-or-text view of a chaincode result
//!
//! ## Decoding
//!
//! Chaincode may return structured JSON or a bare text payload; callers must
//! not assume either shape in advance. See [`codec`].

pub mod codec;
pub mod identity;
pub mod request;
pub mod types;

pub use codec::{decode, DecodedPayload};
pub use identity::{Fingerprint, Identity};
pub use request::{InvocationMode, TransactionRequest, TransactionResult};
pub use types::{ChannelName, ContractName, MspId, Username};
