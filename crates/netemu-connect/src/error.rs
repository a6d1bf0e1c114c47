//! Error types for the netemu-connect crate
//!
//! Three kinds are kept apart so callers can tell them apart:
//!
//! - transport faults: the call did not complete (`Transport`,
//!   `InvalidEndpoint`, `Status`, `MalformedResponse`)
//! - mapping errors: the call completed but a value could not be converted
//! - caller contract violations (`MissingNodeId`)
//!
//! A call that completed with a negative result is not an error; operations
//! return `Ok(false)` for it.

use crate::mapper::MappingError;
use netemu_interface::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Invalid daemon endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("Malformed response from {method}: {reason}")]
    MalformedResponse {
        method: &'static str,
        reason: String,
    },

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Node has no id; {operation} needs one")]
    MissingNodeId { operation: &'static str },
}

impl ConnectError {
    /// The remote call could not complete
    pub fn is_transport_fault(&self) -> bool {
        matches!(
            self,
            ConnectError::Transport(_)
                | ConnectError::InvalidEndpoint { .. }
                | ConnectError::Status(_)
                | ConnectError::MalformedResponse { .. }
        )
    }

    /// A value could not be converted between the wire and the domain
    pub fn is_mapping_error(&self) -> bool {
        matches!(self, ConnectError::Mapping(_))
    }

    /// gRPC status code, for status errors
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ConnectError::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}

impl From<ApiError> for ConnectError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => ConnectError::Status(status),
            ApiError::MalformedResponse { method, reason } => {
                ConnectError::MalformedResponse { method, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let status = ConnectError::from(ApiError::Status(tonic::Status::internal("boom")));
        assert!(status.is_transport_fault());
        assert!(!status.is_mapping_error());
        assert_eq!(status.code(), Some(tonic::Code::Internal));

        let mapping = ConnectError::from(MappingError::UnknownEnum {
            kind: "node type",
            value: 99,
        });
        assert!(mapping.is_mapping_error());
        assert!(!mapping.is_transport_fault());

        let missing = ConnectError::MissingNodeId {
            operation: "get_wlan_config",
        };
        assert!(!missing.is_transport_fault());
        assert!(!missing.is_mapping_error());
    }

    #[test]
    fn test_malformed_response_is_a_transport_fault() {
        let err = ConnectError::from(ApiError::missing_field("GetSession", "session"));
        assert!(err.is_transport_fault());
        assert_eq!(
            err.to_string(),
            "Malformed response from GetSession: missing field `session`"
        );
    }
}
