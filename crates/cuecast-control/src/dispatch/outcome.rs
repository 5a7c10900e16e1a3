//! Per-endpoint send results

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use super::endpoint::Endpoint;

/// Why a send to one endpoint did not leave this host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendFailure {
    /// Host name could not be resolved to an address
    #[error("resolution failed: {0}")]
    Resolution(String),

    /// Socket bind or send failed
    #[error("transmit failed: {0}")]
    Transmit(String),

    /// Resolve + send did not finish in time
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Result of sending one message to one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Datagram handed to the network stack
    Success {
        /// Receiver the datagram went to
        endpoint: Endpoint,
        /// Bytes accepted by the socket
        bytes_sent: usize,
    },
    /// Datagram was not sent
    Failure {
        /// Receiver that was skipped
        endpoint: Endpoint,
        /// What went wrong
        detail: SendFailure,
    },
}

impl SendOutcome {
    /// The endpoint this outcome belongs to
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            SendOutcome::Success { endpoint, .. } | SendOutcome::Failure { endpoint, .. } => {
                endpoint
            }
        }
    }

    /// True when the datagram left this host
    pub fn is_success(&self) -> bool {
        matches!(self, SendOutcome::Success { .. })
    }

    /// Failure detail, if the send failed
    pub fn failure(&self) -> Option<&SendFailure> {
        match self {
            SendOutcome::Success { .. } => None,
            SendOutcome::Failure { detail, .. } => Some(detail),
        }
    }
}

impl fmt::Display for SendOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendOutcome::Success {
                endpoint,
                bytes_sent,
            } => write!(f, "{}: sent {} bytes", endpoint, bytes_sent),
            SendOutcome::Failure { endpoint, detail } => write!(f, "{}: {}", endpoint, detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok = SendOutcome::Success {
            endpoint: Endpoint::new("10.0.0.1"),
            bytes_sent: 20,
        };
        assert!(ok.is_success());
        assert!(ok.failure().is_none());
        assert_eq!(ok.to_string(), "10.0.0.1:53000: sent 20 bytes");

        let failed = SendOutcome::Failure {
            endpoint: Endpoint::new("nowhere"),
            detail: SendFailure::Resolution("no such host".to_string()),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.endpoint().host, "nowhere");
        assert_eq!(
            failed.to_string(),
            "nowhere:53000: resolution failed: no such host"
        );
    }

    #[test]
    fn test_timeout_display() {
        let failure = SendFailure::Timeout(Duration::from_millis(500));
        assert_eq!(failure.to_string(), "timed out after 500ms");
    }
}
