//! Gateway configuration.
//!
//! Channel and contract names are explicit configuration passed in at
//! construction, not embedded constants, so one process can serve multiple
//! channels/networks by running multiple gateways.

use ztgate_core::{ChannelName, ContractName};
use ztgate_net::ConnectOptions;

/// Configuration for the Gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// The single channel this gateway serves.
    pub channel: ChannelName,

    /// Contract handling task lifecycle operations.
    pub task_contract: ContractName,

    /// Contract handling model lifecycle operations.
    pub model_contract: ContractName,

    /// Contract answering channel statistics queries.
    pub stats_contract: ContractName,

    /// Contract recording model endorsements.
    pub endorse_contract: ContractName,

    /// How sessions are opened (discovery on by default).
    pub connect: ConnectOptions,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            channel: ChannelName::new("mychannel"),
            task_contract: ContractName::new("FLTaskContract"),
            model_contract: ContractName::new("ModelContract"),
            stats_contract: ContractName::new("ChannelStatsContract"),
            endorse_contract: ContractName::new("ZeroTrustEndorseContract"),
            connect: ConnectOptions::default(),
        }
    }
}
