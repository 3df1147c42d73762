//! The Gateway: unified API over wallet, connector, and invoker.
//!
//! Each operation resolves the caller's identity, opens a fresh session
//! under it, invokes the chaincode function with the operation's static
//! consensus mode, releases the session, and normalizes the outcome.

use std::sync::Arc;

use ztgate_core::{TransactionResult, Username};
use ztgate_net::{invoke_request, GatewayConnector, LedgerTransport};
use ztgate_wallet::Wallet;

use crate::config::GatewayConfig;
use crate::envelope::{Envelope, Reply};
use crate::error::{GatewayError, Result};
use crate::ops::LedgerOp;

/// The main Gateway struct.
///
/// Cheap to share behind an `Arc`; operations for different usernames, and
/// concurrent operations for the same username, run independently. The only
/// shared resource is the wallet, which is read-mostly.
pub struct Gateway {
    /// Opens identity-scoped sessions.
    connector: GatewayConnector,
    /// Channel and contract routing.
    config: GatewayConfig,
}

impl Gateway {
    /// Create a new gateway over the given wallet and transport.
    pub fn new(
        wallet: Arc<dyn Wallet>,
        transport: Arc<dyn LedgerTransport>,
        config: GatewayConfig,
    ) -> Self {
        let connector = GatewayConnector::new(wallet, transport, config.connect.clone());
        Self { connector, config }
    }

    /// Get the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Execute an operation and return the typed result.
    ///
    /// `caller` is the already-authenticated username from the external
    /// token verifier; a missing caller fails before any network activity.
    /// Args pass through positionally; no business rules are applied here.
    pub async fn execute(
        &self,
        caller: Option<&str>,
        op: LedgerOp,
        args: Vec<String>,
    ) -> Result<TransactionResult> {
        let username = match caller {
            Some(name) if !name.is_empty() => Username::new(name),
            _ => return Err(GatewayError::Unauthenticated),
        };

        let request = op.request(&self.config, args);
        let handle = self
            .connector
            .connect(&username, &self.config.channel, &request.contract)
            .await?;

        // The session is released on both outcomes before the error is
        // propagated.
        let outcome = invoke_request(&handle, &request).await;
        handle.close().await;

        let raw = outcome?;
        Ok(TransactionResult::from_raw(raw))
    }

    /// Execute an operation and map the outcome to a uniform reply.
    ///
    /// This is the surface the external HTTP router calls.
    pub async fn dispatch(&self, caller: Option<&str>, op: LedgerOp, args: Vec<String>) -> Reply {
        match self.execute(caller, op, args).await {
            Ok(result) => match op.success_message() {
                Some(message) => Reply::ok(Envelope::ok_message(message)),
                None => Reply::ok(Envelope::ok_data(result.decoded)),
            },
            Err(e) => {
                tracing::warn!(op = op.function(), error = %e, "operation failed");
                Reply::failure(e.status(), e.to_string())
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Task Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a task. Submit.
    pub async fn create_task(
        &self,
        caller: Option<&str>,
        task_id: &str,
        description: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::CreateTask,
            vec![task_id.to_string(), description.to_string()],
        )
        .await
    }

    /// Update a task's status. Submit.
    pub async fn update_task_status(
        &self,
        caller: Option<&str>,
        task_id: &str,
        status: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::UpdateTaskStatus,
            vec![task_id.to_string(), status.to_string()],
        )
        .await
    }

    /// Fetch a task. Evaluate.
    pub async fn get_task(&self, caller: Option<&str>, task_id: &str) -> Result<TransactionResult> {
        self.execute(caller, LedgerOp::GetTask, vec![task_id.to_string()])
            .await
    }

    /// List all tasks. Evaluate.
    pub async fn list_tasks(&self, caller: Option<&str>) -> Result<TransactionResult> {
        self.execute(caller, LedgerOp::ListTasks, Vec::new()).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Model Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Submit a trained model. Submit.
    pub async fn submit_model(
        &self,
        caller: Option<&str>,
        model_id: &str,
        task_id: &str,
        ipfs_hash: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::SubmitModel,
            vec![model_id.to_string(), task_id.to_string(), ipfs_hash.to_string()],
        )
        .await
    }

    /// Record a model verification result. Submit.
    pub async fn verify_model(
        &self,
        caller: Option<&str>,
        model_id: &str,
        result: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::VerifyModel,
            vec![model_id.to_string(), result.to_string()],
        )
        .await
    }

    /// Fetch a model. Evaluate.
    pub async fn get_model(
        &self,
        caller: Option<&str>,
        model_id: &str,
    ) -> Result<TransactionResult> {
        self.execute(caller, LedgerOp::GetModel, vec![model_id.to_string()])
            .await
    }

    /// List all models. Evaluate.
    pub async fn list_models(&self, caller: Option<&str>) -> Result<TransactionResult> {
        self.execute(caller, LedgerOp::ListModels, Vec::new()).await
    }

    /// Record a contribution score for a model. Submit.
    pub async fn record_contribution(
        &self,
        caller: Option<&str>,
        model_id: &str,
        score: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::RecordContribution,
            vec![model_id.to_string(), score.to_string()],
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stats and Endorsement
    // ─────────────────────────────────────────────────────────────────────────

    /// Query channel statistics. Evaluate.
    pub async fn channel_stats(&self, caller: Option<&str>) -> Result<TransactionResult> {
        self.execute(caller, LedgerOp::GetStats, Vec::new()).await
    }

    /// Endorse a model. Submit.
    pub async fn endorse_model(
        &self,
        caller: Option<&str>,
        model_id: &str,
        reason: &str,
    ) -> Result<TransactionResult> {
        self.execute(
            caller,
            LedgerOp::EndorseModel,
            vec![model_id.to_string(), reason.to_string()],
        )
        .await
    }
}
