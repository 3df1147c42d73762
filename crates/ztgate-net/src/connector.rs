//! The connector: from authenticated username to a bound contract handle.
//!
//! Every call opens a fresh session scoped to the request's lifetime. The
//! session is released on every exit path, including the failure paths of
//! channel and contract binding.

use std::sync::Arc;

use ztgate_core::{ChannelName, ContractName, Fingerprint, Username};
use ztgate_wallet::Wallet;

use crate::error::{NetError, Result};
use crate::transport::{ConnectOptions, LedgerSession, LedgerTransport};

/// Opens identity-scoped connections to the ledger network.
pub struct GatewayConnector {
    /// Where enrolled identities are resolved from.
    wallet: Arc<dyn Wallet>,
    /// The wire seam to the ledger network.
    transport: Arc<dyn LedgerTransport>,
    /// Session options (discovery on by default).
    options: ConnectOptions,
}

impl GatewayConnector {
    /// Create a new connector.
    pub fn new(
        wallet: Arc<dyn Wallet>,
        transport: Arc<dyn LedgerTransport>,
        options: ConnectOptions,
    ) -> Self {
        Self {
            wallet,
            transport,
            options,
        }
    }

    /// Connect to `channel` as `username` and bind `contract`.
    ///
    /// Fails with `IdentityNotFound` before any network activity if the user
    /// has no enrolled identity. There is no fallback to a shared identity.
    pub async fn connect(
        &self,
        username: &Username,
        channel: &ChannelName,
        contract: &ContractName,
    ) -> Result<ContractHandle> {
        let identity = self
            .wallet
            .get(username)
            .await?
            .ok_or_else(|| NetError::IdentityNotFound(username.clone()))?;

        let mut session = self.transport.open(&identity, &self.options).await?;

        if let Err(e) = bind(session.as_mut(), channel, contract).await {
            tracing::warn!(user = %username, channel = %channel, error = %e, "bind failed");
            session.close().await;
            return Err(e);
        }

        tracing::debug!(
            user = %username,
            channel = %channel,
            contract = %contract,
            client = %identity.fingerprint(),
            "gateway connected"
        );

        Ok(ContractHandle {
            session,
            channel: channel.clone(),
            contract: contract.clone(),
            client: identity.fingerprint(),
        })
    }
}

/// Verify the channel is reachable and the contract is deployed.
async fn bind(
    session: &mut dyn LedgerSession,
    channel: &ChannelName,
    contract: &ContractName,
) -> Result<()> {
    if !session.has_channel(channel).await? {
        return Err(NetError::ChannelUnavailable(channel.clone()));
    }

    if !session.has_contract(channel, contract).await? {
        return Err(NetError::ContractNotFound {
            contract: contract.clone(),
            channel: channel.clone(),
        });
    }

    Ok(())
}

/// An open session bound to one contract on one channel.
///
/// Created per invocation and torn down after it completes or fails. Two
/// invocations never share a handle, though they may share the underlying
/// identity.
#[derive(Debug)]
pub struct ContractHandle {
    pub(crate) session: Box<dyn LedgerSession>,
    channel: ChannelName,
    contract: ContractName,
    client: Fingerprint,
}

impl ContractHandle {
    /// The channel this handle is bound to.
    pub fn channel(&self) -> &ChannelName {
        &self.channel
    }

    /// The contract this handle is bound to.
    pub fn contract(&self) -> &ContractName {
        &self.contract
    }

    /// Fingerprint of the identity the session was opened under.
    pub fn client(&self) -> Fingerprint {
        self.client
    }

    /// Release the handle's network resources.
    pub async fn close(mut self) {
        self.session.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use ztgate_core::{Identity, MspId};
    use ztgate_wallet::MemoryWallet;

    use crate::memory::{ContractFn, MemoryLedger};

    fn noop_contract() -> ContractFn {
        Arc::new(|_, _, _| Ok(Vec::new()))
    }

    async fn enrolled_wallet(username: &str) -> Arc<MemoryWallet> {
        let wallet = Arc::new(MemoryWallet::new());
        let identity = Identity::new(
            Username::new(username),
            format!("cert-{}", username).into_bytes(),
            format!("key-{}", username).into_bytes(),
            MspId::new("Org1MSP"),
            1_700_000_000_000,
        );
        wallet.put(&identity).await.unwrap();
        wallet
    }

    fn connector(wallet: Arc<MemoryWallet>, ledger: &MemoryLedger) -> GatewayConnector {
        GatewayConnector::new(
            wallet,
            Arc::new(ledger.clone()),
            ConnectOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_connect_success() {
        let channel = ChannelName::new("mychannel");
        let contract = ContractName::new("FLTaskContract");

        let ledger = MemoryLedger::new();
        ledger.install_contract(&channel, contract.clone(), noop_contract());

        let wallet = enrolled_wallet("alice").await;
        let connector = connector(wallet, &ledger);

        let handle = connector
            .connect(&Username::new("alice"), &channel, &contract)
            .await
            .unwrap();

        assert_eq!(handle.channel(), &channel);
        assert_eq!(handle.contract(), &contract);
        assert_eq!(ledger.open_sessions(), 1);

        handle.close().await;
        assert_eq!(ledger.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_unenrolled_user_makes_no_connection_attempt() {
        let channel = ChannelName::new("mychannel");
        let contract = ContractName::new("FLTaskContract");

        let ledger = MemoryLedger::new();
        ledger.install_contract(&channel, contract.clone(), noop_contract());

        let wallet = Arc::new(MemoryWallet::new());
        let connector = connector(wallet, &ledger);

        let err = connector
            .connect(&Username::new("bob"), &channel, &contract)
            .await
            .unwrap_err();

        assert!(matches!(err, NetError::IdentityNotFound(ref u) if u.as_str() == "bob"));
        assert_eq!(ledger.connect_attempts(), 0);
    }

    #[tokio::test]
    async fn test_unknown_channel_releases_session() {
        let ledger = MemoryLedger::new();
        let wallet = enrolled_wallet("alice").await;
        let connector = connector(wallet, &ledger);

        let err = connector
            .connect(
                &Username::new("alice"),
                &ChannelName::new("nochannel"),
                &ContractName::new("FLTaskContract"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, NetError::ChannelUnavailable(_)));
        assert_eq!(ledger.connect_attempts(), 1);
        assert_eq!(ledger.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_unknown_contract_releases_session() {
        let channel = ChannelName::new("mychannel");
        let ledger = MemoryLedger::new();
        ledger.create_channel(channel.clone());

        let wallet = enrolled_wallet("alice").await;
        let connector = connector(wallet, &ledger);

        let err = connector
            .connect(
                &Username::new("alice"),
                &channel,
                &ContractName::new("MissingContract"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, NetError::ContractNotFound { .. }));
        assert_eq!(ledger.open_sessions(), 0);
    }
}
