//! An in-process ledger for testing.
//!
//! Simulates the network seam with real consensus semantics: Submit commits
//! world state only when the handler endorses, Evaluate runs against a copy
//! and discards writes. Failure injection covers orderer outages, network
//! outages, and chaincode rejections.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use bytes::Bytes;

use ztgate_core::{ChannelName, ContractName, Fingerprint, Identity};

use crate::error::{NetError, Result};
use crate::transport::{ConnectOptions, LedgerSession, LedgerTransport};

/// A simulated chaincode: `(function, args, world_state) -> payload`.
///
/// Returning `Err` models an endorsement rejection; the message is passed
/// through to the caller and no state change is applied.
pub type ContractFn = Arc<
    dyn Fn(&str, &[String], &mut HashMap<String, Vec<u8>>) -> std::result::Result<Vec<u8>, String>
        + Send
        + Sync,
>;

struct ContractSim {
    handler: ContractFn,
    state: HashMap<String, Vec<u8>>,
}

#[derive(Default)]
struct ChannelSim {
    contracts: HashMap<ContractName, ContractSim>,
}

#[derive(Default)]
struct Inner {
    channels: HashMap<ChannelName, ChannelSim>,
    network_down: bool,
    orderer_down: bool,
    connect_attempts: u64,
    open_sessions: u64,
    committed: u64,
}

/// In-process ledger implementation.
///
/// Cheap to clone; all clones share the same network state.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryLedger {
    /// Create a new empty ledger with no channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a channel with no contracts.
    pub fn create_channel(&self, channel: ChannelName) {
        let mut inner = self.inner.write().unwrap();
        inner.channels.entry(channel).or_default();
    }

    /// Deploy a contract handler on a channel, creating the channel if
    /// needed. Re-installing replaces the handler and resets its state.
    pub fn install_contract(
        &self,
        channel: &ChannelName,
        contract: ContractName,
        handler: ContractFn,
    ) {
        let mut inner = self.inner.write().unwrap();
        inner
            .channels
            .entry(channel.clone())
            .or_default()
            .contracts
            .insert(
                contract,
                ContractSim {
                    handler,
                    state: HashMap::new(),
                },
            );
    }

    /// Simulate a network outage: all `open` attempts fail.
    pub fn set_network_down(&self, down: bool) {
        self.inner.write().unwrap().network_down = down;
    }

    /// Simulate an ordering-service outage: all submits time out.
    pub fn set_orderer_down(&self, down: bool) {
        self.inner.write().unwrap().orderer_down = down;
    }

    /// Number of connection attempts made against this ledger.
    pub fn connect_attempts(&self) -> u64 {
        self.inner.read().unwrap().connect_attempts
    }

    /// Number of currently open sessions.
    pub fn open_sessions(&self) -> u64 {
        self.inner.read().unwrap().open_sessions
    }

    /// Number of committed transactions.
    pub fn committed_count(&self) -> u64 {
        self.inner.read().unwrap().committed
    }

    /// Peek at a contract's world state (for assertions).
    pub fn state(
        &self,
        channel: &ChannelName,
        contract: &ContractName,
        key: &str,
    ) -> Option<Vec<u8>> {
        let inner = self.inner.read().unwrap();
        inner
            .channels
            .get(channel)?
            .contracts
            .get(contract)?
            .state
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl LedgerTransport for MemoryLedger {
    async fn open(
        &self,
        identity: &Identity,
        _options: &ConnectOptions,
    ) -> Result<Box<dyn LedgerSession>> {
        let mut inner = self.inner.write().unwrap();
        inner.connect_attempts += 1;

        if inner.network_down {
            return Err(NetError::Connection("network unreachable".to_string()));
        }

        inner.open_sessions += 1;
        Ok(Box::new(MemorySession {
            inner: Arc::clone(&self.inner),
            client: identity.fingerprint(),
            closed: false,
        }))
    }
}

/// A session against the in-process ledger.
struct MemorySession {
    inner: Arc<RwLock<Inner>>,
    client: Fingerprint,
    closed: bool,
}

impl std::fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySession")
            .field("client", &self.client)
            .field("closed", &self.closed)
            .finish()
    }
}

impl MemorySession {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(NetError::Connection(format!(
                "session for {} already closed",
                self.client
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerSession for MemorySession {
    async fn has_channel(&self, channel: &ChannelName) -> Result<bool> {
        self.ensure_open()?;
        let inner = self.inner.read().unwrap();
        Ok(inner.channels.contains_key(channel))
    }

    async fn has_contract(&self, channel: &ChannelName, contract: &ContractName) -> Result<bool> {
        self.ensure_open()?;
        let inner = self.inner.read().unwrap();
        Ok(inner
            .channels
            .get(channel)
            .map(|c| c.contracts.contains_key(contract))
            .unwrap_or(false))
    }

    async fn submit(
        &self,
        channel: &ChannelName,
        contract: &ContractName,
        function: &str,
        args: &[String],
    ) -> Result<Bytes> {
        self.ensure_open()?;
        let mut inner = self.inner.write().unwrap();

        if inner.orderer_down {
            return Err(NetError::CommitTimeout(
                "ordering service unreachable".to_string(),
            ));
        }

        let sim = inner
            .channels
            .get_mut(channel)
            .ok_or_else(|| NetError::ChannelUnavailable(channel.clone()))?
            .contracts
            .get_mut(contract)
            .ok_or_else(|| NetError::ContractNotFound {
                contract: contract.clone(),
                channel: channel.clone(),
            })?;

        // Endorse against a scratch copy; commit only if the handler accepts.
        let mut scratch = sim.state.clone();
        match (sim.handler)(function, args, &mut scratch) {
            Ok(payload) => {
                sim.state = scratch;
                inner.committed += 1;
                Ok(Bytes::from(payload))
            }
            Err(message) => Err(NetError::Endorsement(message)),
        }
    }

    async fn evaluate(
        &self,
        channel: &ChannelName,
        contract: &ContractName,
        function: &str,
        args: &[String],
    ) -> Result<Bytes> {
        self.ensure_open()?;
        let (handler, state) = {
            let inner = self.inner.read().unwrap();
            let sim = inner
                .channels
                .get(channel)
                .ok_or_else(|| NetError::ChannelUnavailable(channel.clone()))?
                .contracts
                .get(contract)
                .ok_or_else(|| NetError::ContractNotFound {
                    contract: contract.clone(),
                    channel: channel.clone(),
                })?;
            (Arc::clone(&sim.handler), sim.state.clone())
        };

        // Queries run against a copy of world state; writes are discarded.
        let mut view = state;
        match handler(function, args, &mut view) {
            Ok(payload) => Ok(Bytes::from(payload)),
            Err(message) => Err(NetError::Endorsement(message)),
        }
    }

    async fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.inner.write().unwrap().open_sessions -= 1;
        }
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        if !self.closed {
            if let Ok(mut inner) = self.inner.write() {
                inner.open_sessions -= 1;
            }
        }
    }
}
