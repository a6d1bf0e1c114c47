//! netemu Interface: the remote CORE API as a trait
//!
//! This crate defines the `CoreApi` trait, one async method per remote
//! capability of a CORE daemon. Each method takes a wire request and yields
//! the matching wire response, so everything above this seam (field mapping,
//! configuration codecs, session orchestration) can run against either a
//! live gRPC channel or an in-memory double.
//!
//! # Implementations
//!
//! - **GrpcCoreApi** (in `netemu-connect`): proxies every call over a tonic channel
//! - **RecordingApi** (in [`testing`]): records calls in order and replays canned responses
//!
//! # Example
//!
//! ```rust,no_run
//! use netemu_interface::CoreApi;
//! use netemu_proto::{SessionState, SetSessionStateRequest};
//!
//! async fn shutdown<A: CoreApi>(api: &A, session_id: i32) -> netemu_interface::Result<bool> {
//!     let response = api
//!         .set_session_state(SetSessionStateRequest {
//!             session_id,
//!             state: SessionState::Shutdown as i32,
//!         })
//!         .await?;
//!     Ok(response.result)
//! }
//! ```

use async_trait::async_trait;
use netemu_proto::*;
use thiserror::Error;

pub mod testing;

/// A remote call that could not complete.
///
/// A call that completed but reported a negative result is *not* an error at
/// this level; it comes back as a response whose `result` field is false.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("Malformed response from {method}: {reason}")]
    MalformedResponse {
        method: &'static str,
        reason: String,
    },
}

impl ApiError {
    /// Build an error for a response missing a required field.
    pub fn missing_field(method: &'static str, field: &str) -> Self {
        ApiError::MalformedResponse {
            method,
            reason: format!("missing field `{}`", field),
        }
    }

    /// gRPC status code, when the failure came from the channel
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ApiError::Status(status) => Some(status.code()),
            ApiError::MalformedResponse { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// The remote capabilities of a CORE daemon
///
/// Calls are unary and independent: implementations must not retry, batch
/// or cache. Ordering between calls is the caller's business.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync + 'static` to work across async boundaries.
#[async_trait]
pub trait CoreApi: Send + Sync + 'static {
    // ═══════════════════════════════════════════════════════════════════════
    // 1. Sessions
    // ═══════════════════════════════════════════════════════════════════════

    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse>;

    async fn delete_session(&self, request: DeleteSessionRequest) -> Result<DeleteSessionResponse>;

    async fn get_sessions(&self, request: GetSessionsRequest) -> Result<GetSessionsResponse>;

    /// Full node/link snapshot of one session
    async fn get_session(&self, request: GetSessionRequest) -> Result<GetSessionResponse>;

    async fn set_session_state(
        &self,
        request: SetSessionStateRequest,
    ) -> Result<SetSessionStateResponse>;

    async fn get_session_options(
        &self,
        request: GetSessionOptionsRequest,
    ) -> Result<GetSessionOptionsResponse>;

    async fn set_session_options(
        &self,
        request: SetSessionOptionsRequest,
    ) -> Result<SetSessionOptionsResponse>;

    async fn get_session_location(
        &self,
        request: GetSessionLocationRequest,
    ) -> Result<GetSessionLocationResponse>;

    async fn set_session_location(
        &self,
        request: SetSessionLocationRequest,
    ) -> Result<SetSessionLocationResponse>;

    /// Export the session as CORE XML
    async fn save_xml(&self, request: SaveXmlRequest) -> Result<SaveXmlResponse>;

    /// Create a new session from CORE XML
    async fn open_xml(&self, request: OpenXmlRequest) -> Result<OpenXmlResponse>;

    // ═══════════════════════════════════════════════════════════════════════
    // 2. Topology
    // ═══════════════════════════════════════════════════════════════════════

    async fn add_node(&self, request: AddNodeRequest) -> Result<AddNodeResponse>;

    async fn edit_node(&self, request: EditNodeRequest) -> Result<EditNodeResponse>;

    async fn delete_node(&self, request: DeleteNodeRequest) -> Result<DeleteNodeResponse>;

    async fn add_link(&self, request: AddLinkRequest) -> Result<AddLinkResponse>;

    async fn edit_link(&self, request: EditLinkRequest) -> Result<EditLinkResponse>;

    async fn get_hooks(&self, request: GetHooksRequest) -> Result<GetHooksResponse>;

    async fn add_hook(&self, request: AddHookRequest) -> Result<AddHookResponse>;

    // ═══════════════════════════════════════════════════════════════════════
    // 3. Mobility, WLAN and EMANE configuration
    // ═══════════════════════════════════════════════════════════════════════

    async fn get_mobility_configs(
        &self,
        request: GetMobilityConfigsRequest,
    ) -> Result<GetMobilityConfigsResponse>;

    async fn get_mobility_config(
        &self,
        request: GetMobilityConfigRequest,
    ) -> Result<GetMobilityConfigResponse>;

    async fn set_mobility_config(
        &self,
        request: SetMobilityConfigRequest,
    ) -> Result<SetMobilityConfigResponse>;

    async fn mobility_action(&self, request: MobilityActionRequest)
        -> Result<MobilityActionResponse>;

    async fn get_wlan_config(&self, request: GetWlanConfigRequest) -> Result<GetWlanConfigResponse>;

    async fn set_wlan_config(&self, request: SetWlanConfigRequest) -> Result<SetWlanConfigResponse>;

    async fn get_emane_config(
        &self,
        request: GetEmaneConfigRequest,
    ) -> Result<GetEmaneConfigResponse>;

    async fn set_emane_config(
        &self,
        request: SetEmaneConfigRequest,
    ) -> Result<SetEmaneConfigResponse>;

    async fn get_emane_models(
        &self,
        request: GetEmaneModelsRequest,
    ) -> Result<GetEmaneModelsResponse>;

    async fn get_emane_model_config(
        &self,
        request: GetEmaneModelConfigRequest,
    ) -> Result<GetEmaneModelConfigResponse>;

    async fn set_emane_model_config(
        &self,
        request: SetEmaneModelConfigRequest,
    ) -> Result<SetEmaneModelConfigResponse>;

    // ═══════════════════════════════════════════════════════════════════════
    // 4. Node services
    // ═══════════════════════════════════════════════════════════════════════

    async fn get_services(&self, request: GetServicesRequest) -> Result<GetServicesResponse>;

    async fn get_service_defaults(
        &self,
        request: GetServiceDefaultsRequest,
    ) -> Result<GetServiceDefaultsResponse>;

    async fn set_service_defaults(
        &self,
        request: SetServiceDefaultsRequest,
    ) -> Result<SetServiceDefaultsResponse>;

    async fn get_node_service(
        &self,
        request: GetNodeServiceRequest,
    ) -> Result<GetNodeServiceResponse>;

    async fn set_node_service(
        &self,
        request: SetNodeServiceRequest,
    ) -> Result<SetNodeServiceResponse>;

    async fn get_node_service_file(
        &self,
        request: GetNodeServiceFileRequest,
    ) -> Result<GetNodeServiceFileResponse>;

    async fn set_node_service_file(
        &self,
        request: SetNodeServiceFileRequest,
    ) -> Result<SetNodeServiceFileResponse>;

    async fn service_action(&self, request: ServiceActionRequest) -> Result<ServiceActionResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let err = ApiError::missing_field("GetSession", "session");
        assert!(err.code().is_none());
        assert_eq!(
            err.to_string(),
            "Malformed response from GetSession: missing field `session`"
        );
    }

    #[test]
    fn test_status_error_keeps_code() {
        let err = ApiError::from(tonic::Status::unavailable("daemon down"));
        assert_eq!(err.code(), Some(tonic::Code::Unavailable));
    }
}
