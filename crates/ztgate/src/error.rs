//! Error types for the Gateway.

use thiserror::Error;

use ztgate_net::NetError;

/// Errors that can occur during Gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No authenticated caller was supplied.
    ///
    /// Checked before any network activity; the token verifier upstream is
    /// responsible for 401/403.
    #[error("missing authenticated user, please log in")]
    Unauthenticated,

    /// Any wallet/ledger/network failure, with a distinguishing kind.
    #[error(transparent)]
    Net(#[from] NetError),
}

impl GatewayError {
    /// The HTTP status the external router should use for this error.
    ///
    /// This is the single place kind maps to status: a missing caller is a
    /// client error; everything under the gateway is a server error.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::Unauthenticated => 400,
            GatewayError::Net(_) => 500,
        }
    }
}

/// Result type for Gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ztgate_core::Username;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GatewayError::Unauthenticated.status(), 400);
        assert_eq!(
            GatewayError::Net(NetError::IdentityNotFound(Username::new("bob"))).status(),
            500
        );
        assert_eq!(
            GatewayError::Net(NetError::Endorsement("rejected".to_string())).status(),
            500
        );
        assert_eq!(
            GatewayError::Net(NetError::CommitTimeout("orderer".to_string())).status(),
            500
        );
    }

    #[test]
    fn test_identity_not_found_instructs_relogin() {
        let err = GatewayError::Net(NetError::IdentityNotFound(Username::new("bob")));
        let message = err.to_string();
        assert!(message.contains("bob"));
        assert!(message.contains("log in"));
    }
}
