//! In-memory implementation of the Wallet trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use ztgate_core::{Identity, Username};

use crate::error::Result;
use crate::traits::Wallet;

/// In-memory wallet implementation.
///
/// All data is lost when the wallet is dropped. Thread-safe via RwLock.
pub struct MemoryWallet {
    identities: RwLock<HashMap<Username, Identity>>,
}

impl MemoryWallet {
    /// Create a new empty in-memory wallet.
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryWallet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Wallet for MemoryWallet {
    async fn put(&self, identity: &Identity) -> Result<()> {
        let mut identities = self.identities.write().unwrap();
        identities.insert(identity.username.clone(), identity.clone());
        Ok(())
    }

    async fn get(&self, username: &Username) -> Result<Option<Identity>> {
        let identities = self.identities.read().unwrap();
        Ok(identities.get(username).cloned())
    }

    async fn remove(&self, username: &Username) -> Result<bool> {
        let mut identities = self.identities.write().unwrap();
        Ok(identities.remove(username).is_some())
    }

    async fn list(&self) -> Result<Vec<Username>> {
        let identities = self.identities.read().unwrap();
        let mut names: Vec<Username> = identities.keys().cloned().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(names)
    }
}
