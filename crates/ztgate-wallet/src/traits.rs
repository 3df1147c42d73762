//! Wallet trait: the abstract interface for identity persistence.
//!
//! This trait allows the gateway to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use ztgate_core::{Identity, Username};

use crate::error::Result;

/// The Wallet trait: async interface for identity persistence.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the
/// runtime.
///
/// # Design Notes
///
/// - **Upsert puts**: `put` for an existing username replaces the record.
/// - **Typed absence**: `get` returns `Option<Identity>`; a missing identity
///   is not an error at this layer. The connector turns absence into a
///   domain error naming the missing identity.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Store an identity, replacing any existing record for its username.
    async fn put(&self, identity: &Identity) -> Result<()>;

    /// Look up an identity by exact username match.
    ///
    /// Returns `None` if the user was never enrolled or has been removed.
    async fn get(&self, username: &Username) -> Result<Option<Identity>>;

    /// Remove an identity.
    ///
    /// Returns `true` if a record existed and was removed.
    async fn remove(&self, username: &Username) -> Result<bool>;

    /// List the usernames of all stored identities.
    async fn list(&self) -> Result<Vec<Username>>;
}
