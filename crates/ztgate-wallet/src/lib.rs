//! # ztgate Wallet
//!
//! Identity persistence for the ztgate gateway. Provides a trait-based
//! interface for storing enrolled ledger identities with SQLite and
//! in-memory implementations.
//!
//! ## Overview
//!
//! The wallet maps a [`Username`](ztgate_core::Username) to a stored
//! [`Identity`](ztgate_core::Identity) (certificate, private key, MSP id).
//! Identities are written once by the external enrollment flow and read-only
//! thereafter; re-enrollment overwrites the whole record.
//!
//! ## Key Types
//!
//! - [`Wallet`] - The async trait for identity persistence
//! - [`SqliteWallet`] - SQLite-based persistent storage
//! - [`MemoryWallet`] - In-memory storage for tests
//!
//! ## Design Notes
//!
//! - **Exact-match lookups**: `get` matches the username byte-for-byte.
//! - **Absence is not an error**: `get` returns `Option`; callers decide
//!   what a missing identity means.
//! - **Upsert semantics**: `put` for an existing username replaces the
//!   record atomically.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, WalletError};
pub use memory::MemoryWallet;
pub use sqlite::SqliteWallet;
pub use traits::Wallet;
