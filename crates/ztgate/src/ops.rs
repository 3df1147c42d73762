//! The operation table: every ledger operation the gateway exposes.
//!
//! Chaincode function, target contract, and consensus mode are static
//! properties of each operation, never request data. Mutating operations
//! submit; read-only operations evaluate.

use ztgate_core::{ContractName, InvocationMode, TransactionRequest};

use crate::config::GatewayConfig;

/// A logical ledger operation supported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerOp {
    /// CreateTask(taskId, description)
    CreateTask,
    /// UpdateTaskStatus(taskId, status)
    UpdateTaskStatus,
    /// GetTask(taskId)
    GetTask,
    /// ListTasks()
    ListTasks,
    /// SubmitModel(modelId, taskId, ipfsHash)
    SubmitModel,
    /// VerifyModel(modelId, result)
    VerifyModel,
    /// GetModel(modelId)
    GetModel,
    /// ListModels()
    ListModels,
    /// RecordContribution(modelId, score)
    RecordContribution,
    /// GetStats()
    GetStats,
    /// EndorseModel(modelId, reason)
    EndorseModel,
}

impl LedgerOp {
    /// Every operation, for exhaustive table tests.
    pub const ALL: [LedgerOp; 11] = [
        LedgerOp::CreateTask,
        LedgerOp::UpdateTaskStatus,
        LedgerOp::GetTask,
        LedgerOp::ListTasks,
        LedgerOp::SubmitModel,
        LedgerOp::VerifyModel,
        LedgerOp::GetModel,
        LedgerOp::ListModels,
        LedgerOp::RecordContribution,
        LedgerOp::GetStats,
        LedgerOp::EndorseModel,
    ];

    /// The chaincode function this operation calls.
    pub fn function(self) -> &'static str {
        match self {
            LedgerOp::CreateTask => "CreateTask",
            LedgerOp::UpdateTaskStatus => "UpdateTaskStatus",
            LedgerOp::GetTask => "GetTask",
            LedgerOp::ListTasks => "ListTasks",
            LedgerOp::SubmitModel => "SubmitModel",
            LedgerOp::VerifyModel => "VerifyModel",
            LedgerOp::GetModel => "GetModel",
            LedgerOp::ListModels => "ListModels",
            LedgerOp::RecordContribution => "RecordContribution",
            LedgerOp::GetStats => "GetStats",
            LedgerOp::EndorseModel => "EndorseModel",
        }
    }

    /// The consensus mode: Submit for all mutating operations, Evaluate for
    /// all read-only queries.
    pub fn mode(self) -> InvocationMode {
        match self {
            LedgerOp::CreateTask
            | LedgerOp::UpdateTaskStatus
            | LedgerOp::SubmitModel
            | LedgerOp::VerifyModel
            | LedgerOp::RecordContribution
            | LedgerOp::EndorseModel => InvocationMode::Submit,

            LedgerOp::GetTask
            | LedgerOp::ListTasks
            | LedgerOp::GetModel
            | LedgerOp::ListModels
            | LedgerOp::GetStats => InvocationMode::Evaluate,
        }
    }

    /// The contract this operation targets, resolved from configuration.
    pub fn contract(self, config: &GatewayConfig) -> &ContractName {
        match self {
            LedgerOp::CreateTask
            | LedgerOp::UpdateTaskStatus
            | LedgerOp::GetTask
            | LedgerOp::ListTasks => &config.task_contract,

            LedgerOp::SubmitModel
            | LedgerOp::VerifyModel
            | LedgerOp::GetModel
            | LedgerOp::ListModels
            | LedgerOp::RecordContribution => &config.model_contract,

            LedgerOp::GetStats => &config.stats_contract,

            LedgerOp::EndorseModel => &config.endorse_contract,
        }
    }

    /// Success message for submit operations (queries return data instead).
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            LedgerOp::CreateTask => Some("task created"),
            LedgerOp::UpdateTaskStatus => Some("task status updated"),
            LedgerOp::SubmitModel => Some("model submitted"),
            LedgerOp::VerifyModel => Some("model verification recorded"),
            LedgerOp::RecordContribution => Some("contribution score recorded"),
            LedgerOp::EndorseModel => Some("model endorsed"),
            _ => None,
        }
    }

    /// Build the transaction request for this operation.
    ///
    /// Args pass through in the fixed positional order the chaincode
    /// function expects; no business rules are applied here.
    pub fn request(self, config: &GatewayConfig, args: Vec<String>) -> TransactionRequest {
        TransactionRequest {
            contract: self.contract(config).clone(),
            function: self.function().to_string(),
            args,
            mode: self.mode(),
        }
    }
}
