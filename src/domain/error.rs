//! Error types for wallet, chain and bridge operations.
//!
//! Every capability in [`crate::client`] reports failures through
//! [`BridgeError`], so the UI layer has a single error vocabulary to
//! decide what is shown, logged, or downgraded.

use alloy::transports::TransportError;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for wallet, chain and bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport-level failure talking to an RPC endpoint.
    #[error("Network error: {0}")]
    Transport(String),

    /// The RPC endpoint answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message returned by the endpoint.
        message: String,
    },

    /// A response could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input (amounts, addresses).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The wallet refused to switch to the requested chain.
    #[error("Wallet rejected switch to {chain}")]
    SwitchRejected {
        /// Display name of the requested chain.
        chain: String,
    },

    /// The bridge did not accept the transfer.
    #[error("Bridge submission failed: {0}")]
    Submission(String),

    /// No wallet account is connected.
    #[error("Wallet not connected")]
    NotConnected,
}

impl BridgeError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new submission error.
    #[must_use]
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }
}

impl From<TransportError> for BridgeError {
    fn from(error: TransportError) -> Self {
        match error.as_error_resp() {
            Some(payload) => Self::Rpc {
                code: payload.code,
                message: payload.message.to_string(),
            },
            None => Self::Transport(error.to_string()),
        }
    }
}

impl From<alloy::contract::Error> for BridgeError {
    fn from(error: alloy::contract::Error) -> Self {
        match error {
            alloy::contract::Error::TransportError(e) => e.into(),
            other => Self::parse(other.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_error_display() {
        assert_eq!(
            BridgeError::parse("bad hex").to_string(),
            "Parse error: bad hex"
        );
        assert_eq!(
            BridgeError::invalid_input("empty amount").to_string(),
            "Invalid input: empty amount"
        );
        assert_eq!(
            BridgeError::Rpc {
                code: 4001,
                message: "User rejected the request.".to_string(),
            }
            .to_string(),
            "RPC error 4001: User rejected the request."
        );
        assert_eq!(
            BridgeError::SwitchRejected {
                chain: "Polygon".to_string()
            }
            .to_string(),
            "Wallet rejected switch to Polygon"
        );
        assert_eq!(BridgeError::NotConnected.to_string(), "Wallet not connected");
    }

    #[test]
    fn test_transport_error_mapping() {
        let rejected = TransportError::ErrorResp(alloy::rpc::json_rpc::ErrorPayload {
            code: 4001,
            message: "User rejected the request.".into(),
            data: None,
        });
        match BridgeError::from(rejected) {
            BridgeError::Rpc { code, message } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "User rejected the request.");
            }
            other => panic!("Expected Rpc variant, got {other:?}"),
        }

        let refused = alloy::transports::TransportErrorKind::custom_str("connection refused");
        match BridgeError::from(refused) {
            BridgeError::Transport(message) => assert!(message.contains("connection refused")),
            other => panic!("Expected Transport variant, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_error_creation() {
        match BridgeError::submission("nonce too low") {
            BridgeError::Submission(msg) => assert_eq!(msg, "nonce too low"),
            other => panic!("Expected Submission variant, got {other:?}"),
        }
    }
}
