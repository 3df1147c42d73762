//! Uniform response envelopes.
//!
//! Every operation resolves to the same JSON shape: success with an optional
//! message and optional data, or failure with a human-readable message.
//! Failure messages carry the proximate error only, never stack detail.

use serde::{Deserialize, Serialize};

use ztgate_core::DecodedPayload;

/// The uniform request/response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Human-readable message (always present on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Decoded chaincode result, for query operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DecodedPayload>,
}

impl Envelope {
    /// A success with a message (submit operations).
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A success carrying data (query operations).
    pub fn ok_data(data: DecodedPayload) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A failure with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// An envelope paired with the HTTP status the external router should use.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status code: 200 on success, 400 for a missing caller, 500 for
    /// any ledger/network error.
    pub status: u16,

    /// The response body.
    pub body: Envelope,
}

impl Reply {
    /// A 200 reply.
    pub fn ok(body: Envelope) -> Self {
        Self { status: 200, body }
    }

    /// A failure reply with the given status.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Envelope::failure(message),
        }
    }
}
