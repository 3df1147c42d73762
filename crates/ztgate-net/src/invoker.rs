//! The invoker: dispatch a chaincode call with the correct consensus
//! semantics.
//!
//! Submit routes through ordering and blocks until commit; Evaluate answers
//! from a single peer's world state. Failures surface as-is; retry policy,
//! if any, belongs to the caller.

use bytes::Bytes;

use ztgate_core::{InvocationMode, TransactionRequest};

use crate::connector::ContractHandle;
use crate::error::Result;

/// Invoke a function on a connected contract handle.
pub async fn invoke(
    handle: &ContractHandle,
    function: &str,
    args: &[String],
    mode: InvocationMode,
) -> Result<Bytes> {
    match mode {
        InvocationMode::Submit => {
            handle
                .session
                .submit(handle.channel(), handle.contract(), function, args)
                .await
        }
        InvocationMode::Evaluate => {
            handle
                .session
                .evaluate(handle.channel(), handle.contract(), function, args)
                .await
        }
    }
}

/// Invoke a built [`TransactionRequest`] on a connected handle.
pub async fn invoke_request(handle: &ContractHandle, request: &TransactionRequest) -> Result<Bytes> {
    invoke(handle, &request.function, &request.args, request.mode).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ztgate_core::{ChannelName, ContractName, Identity, MspId, Username};
    use ztgate_wallet::{MemoryWallet, Wallet};

    use crate::connector::GatewayConnector;
    use crate::error::NetError;
    use crate::memory::{ContractFn, MemoryLedger};
    use crate::transport::ConnectOptions;

    fn run_counter(
        function: &str,
        _args: &[String],
        state: &mut std::collections::HashMap<String, Vec<u8>>,
    ) -> std::result::Result<Vec<u8>, String> {
        match function {
            "Bump" => {
                let n = state
                    .get("count")
                    .and_then(|b| String::from_utf8(b.clone()).ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(0);
                let next = (n + 1).to_string();
                state.insert("count".to_string(), next.clone().into_bytes());
                Ok(next.into_bytes())
            }
            "Count" => Ok(state.get("count").cloned().unwrap_or_else(|| b"0".to_vec())),
            other => Err(format!("unknown function {}", other)),
        }
    }

    fn counter_contract() -> ContractFn {
        Arc::new(run_counter)
    }

    async fn setup() -> (MemoryLedger, GatewayConnector, ChannelName, ContractName) {
        let channel = ChannelName::new("mychannel");
        let contract = ContractName::new("CounterContract");

        let ledger = MemoryLedger::new();
        ledger.install_contract(&channel, contract.clone(), counter_contract());

        let wallet = Arc::new(MemoryWallet::new());
        wallet
            .put(&Identity::new(
                Username::new("alice"),
                b"cert".to_vec(),
                b"key".to_vec(),
                MspId::new("Org1MSP"),
                1_700_000_000_000,
            ))
            .await
            .unwrap();

        let connector = GatewayConnector::new(
            wallet,
            Arc::new(ledger.clone()),
            ConnectOptions::default(),
        );

        (ledger, connector, channel, contract)
    }

    #[tokio::test]
    async fn test_submit_mutates_evaluate_does_not() {
        let (ledger, connector, channel, contract) = setup().await;
        let alice = Username::new("alice");

        let handle = connector.connect(&alice, &channel, &contract).await.unwrap();
        let raw = invoke(&handle, "Bump", &[], InvocationMode::Submit)
            .await
            .unwrap();
        assert_eq!(raw.as_ref(), b"1");
        handle.close().await;

        // Evaluating the mutating function does not change committed state.
        let handle = connector.connect(&alice, &channel, &contract).await.unwrap();
        let raw = invoke(&handle, "Bump", &[], InvocationMode::Evaluate)
            .await
            .unwrap();
        assert_eq!(raw.as_ref(), b"2");
        handle.close().await;

        let handle = connector.connect(&alice, &channel, &contract).await.unwrap();
        let raw = invoke(&handle, "Count", &[], InvocationMode::Evaluate)
            .await
            .unwrap();
        assert_eq!(raw.as_ref(), b"1");
        handle.close().await;

        assert_eq!(ledger.committed_count(), 1);
        assert_eq!(ledger.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_invoke_request_follows_mode() {
        let (_ledger, connector, channel, contract) = setup().await;
        let alice = Username::new("alice");

        let request = TransactionRequest::submit(contract.clone(), "Bump");
        let handle = connector.connect(&alice, &channel, &contract).await.unwrap();
        let raw = invoke_request(&handle, &request).await.unwrap();
        assert_eq!(raw.as_ref(), b"1");
        handle.close().await;
    }

    #[tokio::test]
    async fn test_chaincode_rejection_surfaces_message() {
        let (_ledger, connector, channel, contract) = setup().await;
        let alice = Username::new("alice");

        let handle = connector.connect(&alice, &channel, &contract).await.unwrap();
        let err = invoke(&handle, "Nope", &[], InvocationMode::Submit)
            .await
            .unwrap_err();
        handle.close().await;

        match err {
            NetError::Endorsement(message) => assert!(message.contains("Nope")),
            other => panic!("expected Endorsement, got {:?}", other),
        }
    }
}
