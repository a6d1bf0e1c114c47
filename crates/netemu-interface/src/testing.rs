//! In-memory `CoreApi` double for tests
//!
//! `RecordingApi` accepts every call, records it in arrival order together
//! with its encoded request, and answers with a plausible default response.
//! Tests can script faults (`fail_on`), negative acknowledgments
//! (`reject_on`) and canned responses (`respond_with`) per method.
//!
//! ```
//! use netemu_interface::testing::{Method, RecordingApi};
//! use netemu_interface::CoreApi;
//! use netemu_proto::{SessionState, SetSessionStateRequest};
//!
//! # tokio_test::block_on(async {
//! let api = RecordingApi::new();
//! api.reject_on(Method::SetSessionState, 1);
//!
//! let response = api
//!     .set_session_state(SetSessionStateRequest {
//!         session_id: 1,
//!         state: SessionState::Definition as i32,
//!     })
//!     .await
//!     .unwrap();
//!
//! assert!(!response.result);
//! assert_eq!(api.methods(), vec![Method::SetSessionState]);
//! # });
//! ```

use crate::{ApiError, CoreApi, Result};
use async_trait::async_trait;
use netemu_proto::*;
use prost::Message;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// One remote capability, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    CreateSession,
    DeleteSession,
    GetSessions,
    GetSession,
    SetSessionState,
    GetSessionOptions,
    SetSessionOptions,
    GetSessionLocation,
    SetSessionLocation,
    SaveXml,
    OpenXml,
    AddNode,
    EditNode,
    DeleteNode,
    AddLink,
    EditLink,
    GetHooks,
    AddHook,
    GetMobilityConfigs,
    GetMobilityConfig,
    SetMobilityConfig,
    MobilityAction,
    GetWlanConfig,
    SetWlanConfig,
    GetEmaneConfig,
    SetEmaneConfig,
    GetEmaneModels,
    GetEmaneModelConfig,
    SetEmaneModelConfig,
    GetServices,
    GetServiceDefaults,
    SetServiceDefaults,
    GetNodeService,
    SetNodeService,
    GetNodeServiceFile,
    SetNodeServiceFile,
    ServiceAction,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::CreateSession => "CreateSession",
            Method::DeleteSession => "DeleteSession",
            Method::GetSessions => "GetSessions",
            Method::GetSession => "GetSession",
            Method::SetSessionState => "SetSessionState",
            Method::GetSessionOptions => "GetSessionOptions",
            Method::SetSessionOptions => "SetSessionOptions",
            Method::GetSessionLocation => "GetSessionLocation",
            Method::SetSessionLocation => "SetSessionLocation",
            Method::SaveXml => "SaveXml",
            Method::OpenXml => "OpenXml",
            Method::AddNode => "AddNode",
            Method::EditNode => "EditNode",
            Method::DeleteNode => "DeleteNode",
            Method::AddLink => "AddLink",
            Method::EditLink => "EditLink",
            Method::GetHooks => "GetHooks",
            Method::AddHook => "AddHook",
            Method::GetMobilityConfigs => "GetMobilityConfigs",
            Method::GetMobilityConfig => "GetMobilityConfig",
            Method::SetMobilityConfig => "SetMobilityConfig",
            Method::MobilityAction => "MobilityAction",
            Method::GetWlanConfig => "GetWlanConfig",
            Method::SetWlanConfig => "SetWlanConfig",
            Method::GetEmaneConfig => "GetEmaneConfig",
            Method::SetEmaneConfig => "SetEmaneConfig",
            Method::GetEmaneModels => "GetEmaneModels",
            Method::GetEmaneModelConfig => "GetEmaneModelConfig",
            Method::SetEmaneModelConfig => "SetEmaneModelConfig",
            Method::GetServices => "GetServices",
            Method::GetServiceDefaults => "GetServiceDefaults",
            Method::SetServiceDefaults => "SetServiceDefaults",
            Method::GetNodeService => "GetNodeService",
            Method::SetNodeService => "SetNodeService",
            Method::GetNodeServiceFile => "GetNodeServiceFile",
            Method::SetNodeServiceFile => "SetNodeServiceFile",
            Method::ServiceAction => "ServiceAction",
        }
    }

    /// Whether the response carries a boolean `result` acknowledgment
    pub fn acknowledges(&self) -> bool {
        !matches!(
            self,
            Method::CreateSession
                | Method::GetSessions
                | Method::GetSession
                | Method::GetSessionOptions
                | Method::GetSessionLocation
                | Method::SaveXml
                | Method::AddNode
                | Method::GetHooks
                | Method::GetMobilityConfigs
                | Method::GetMobilityConfig
                | Method::GetWlanConfig
                | Method::GetEmaneConfig
                | Method::GetEmaneModels
                | Method::GetEmaneModelConfig
                | Method::GetServices
                | Method::GetServiceDefaults
                | Method::GetNodeService
                | Method::GetNodeServiceFile
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scripted result for the n-th call of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call does not complete (`Status::unavailable`)
    Fault,
    /// The call completes with `result: false`; methods without an
    /// acknowledgment field answer `Status::failed_precondition` instead
    Reject,
}

/// A call as seen by the double
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    payload: Vec<u8>,
}

impl RecordedCall {
    /// Decode the recorded request
    ///
    /// # Panics
    ///
    /// Panics if `M` is not the request type of this call.
    pub fn request<M: Message + Default>(&self) -> M {
        M::decode(self.payload.as_slice())
            .expect("recorded request does not decode as the given type")
    }
}

#[derive(Default)]
struct Inner {
    calls: Vec<RecordedCall>,
    counts: HashMap<Method, usize>,
    plans: HashMap<(Method, usize), Outcome>,
    canned: HashMap<Method, Vec<u8>>,
    next_node_id: i32,
}

/// Recording `CoreApi` implementation
///
/// Cheap to clone; clones share the same recording.
#[derive(Clone, Default)]
pub struct RecordingApi {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingApi {
    /// Create a double that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the `nth` (1-based) call of `method` fail in transport
    pub fn fail_on(&self, method: Method, nth: usize) {
        self.lock().plans.insert((method, nth), Outcome::Fault);
    }

    /// Make the `nth` (1-based) call of `method` report a negative result
    pub fn reject_on(&self, method: Method, nth: usize) {
        self.lock().plans.insert((method, nth), Outcome::Reject);
    }

    /// Answer every successful call of `method` with `response`
    pub fn respond_with<M: Message>(&self, method: Method, response: M) {
        self.lock().canned.insert(method, response.encode_to_vec());
    }

    /// All calls so far, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Methods of all calls so far, in arrival order
    pub fn methods(&self) -> Vec<Method> {
        self.lock().calls.iter().map(|c| c.method).collect()
    }

    /// Calls of one method, in arrival order
    pub fn calls_to(&self, method: Method) -> Vec<RecordedCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    /// Number of calls of one method
    pub fn count(&self, method: Method) -> usize {
        self.lock().counts.get(&method).copied().unwrap_or(0)
    }

    /// Forget recorded calls and call counters; scripts and canned responses stay
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.calls.clear();
        inner.counts.clear();
    }

    fn reply<Req, Resp>(
        &self,
        method: Method,
        request: &Req,
        build: impl FnOnce(&mut Inner, bool) -> Resp,
    ) -> Result<Resp>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall {
            method,
            payload: request.encode_to_vec(),
        });
        let nth = {
            let count = inner.counts.entry(method).or_insert(0);
            *count += 1;
            *count
        };

        match inner.plans.get(&(method, nth)).copied() {
            Some(Outcome::Fault) => {
                return Err(ApiError::Status(tonic::Status::unavailable(format!(
                    "{} call #{} failed",
                    method, nth
                ))));
            }
            Some(Outcome::Reject) if !method.acknowledges() => {
                return Err(ApiError::Status(tonic::Status::failed_precondition(
                    format!("{} call #{} rejected", method, nth),
                )));
            }
            Some(Outcome::Reject) => return Ok(build(&mut inner, false)),
            None => {}
        }

        if let Some(bytes) = inner.canned.get(&method) {
            return Resp::decode(bytes.as_slice()).map_err(|e| ApiError::MalformedResponse {
                method: method.as_str(),
                reason: e.to_string(),
            });
        }

        Ok(build(&mut inner, true))
    }
}

#[async_trait]
impl CoreApi for RecordingApi {
    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse> {
        let session_id = request.session_id.unwrap_or(1);
        self.reply(Method::CreateSession, &request, |_, _| CreateSessionResponse {
            session_id,
            state: SessionState::Definition as i32,
        })
    }

    async fn delete_session(&self, request: DeleteSessionRequest) -> Result<DeleteSessionResponse> {
        self.reply(Method::DeleteSession, &request, |_, result| {
            DeleteSessionResponse { result }
        })
    }

    async fn get_sessions(&self, request: GetSessionsRequest) -> Result<GetSessionsResponse> {
        self.reply(Method::GetSessions, &request, |_, _| GetSessionsResponse::default())
    }

    async fn get_session(&self, request: GetSessionRequest) -> Result<GetSessionResponse> {
        let id = request.session_id;
        self.reply(Method::GetSession, &request, |_, _| GetSessionResponse {
            session: Some(Session {
                id,
                state: SessionState::Definition as i32,
                ..Default::default()
            }),
        })
    }

    async fn set_session_state(
        &self,
        request: SetSessionStateRequest,
    ) -> Result<SetSessionStateResponse> {
        self.reply(Method::SetSessionState, &request, |_, result| {
            SetSessionStateResponse { result }
        })
    }

    async fn get_session_options(
        &self,
        request: GetSessionOptionsRequest,
    ) -> Result<GetSessionOptionsResponse> {
        self.reply(Method::GetSessionOptions, &request, |_, _| {
            GetSessionOptionsResponse::default()
        })
    }

    async fn set_session_options(
        &self,
        request: SetSessionOptionsRequest,
    ) -> Result<SetSessionOptionsResponse> {
        self.reply(Method::SetSessionOptions, &request, |_, result| {
            SetSessionOptionsResponse { result }
        })
    }

    async fn get_session_location(
        &self,
        request: GetSessionLocationRequest,
    ) -> Result<GetSessionLocationResponse> {
        self.reply(Method::GetSessionLocation, &request, |_, _| {
            GetSessionLocationResponse::default()
        })
    }

    async fn set_session_location(
        &self,
        request: SetSessionLocationRequest,
    ) -> Result<SetSessionLocationResponse> {
        self.reply(Method::SetSessionLocation, &request, |_, result| {
            SetSessionLocationResponse { result }
        })
    }

    async fn save_xml(&self, request: SaveXmlRequest) -> Result<SaveXmlResponse> {
        self.reply(Method::SaveXml, &request, |_, _| SaveXmlResponse::default())
    }

    async fn open_xml(&self, request: OpenXmlRequest) -> Result<OpenXmlResponse> {
        self.reply(Method::OpenXml, &request, |_, result| OpenXmlResponse {
            result,
            session_id: if result { 1 } else { 0 },
        })
    }

    async fn add_node(&self, request: AddNodeRequest) -> Result<AddNodeResponse> {
        let requested = request.node.as_ref().and_then(|node| node.id);
        self.reply(Method::AddNode, &request, |inner, _| {
            inner.next_node_id += 1;
            AddNodeResponse {
                node_id: requested.unwrap_or(inner.next_node_id),
            }
        })
    }

    async fn edit_node(&self, request: EditNodeRequest) -> Result<EditNodeResponse> {
        self.reply(Method::EditNode, &request, |_, result| EditNodeResponse { result })
    }

    async fn delete_node(&self, request: DeleteNodeRequest) -> Result<DeleteNodeResponse> {
        self.reply(Method::DeleteNode, &request, |_, result| DeleteNodeResponse {
            result,
        })
    }

    async fn add_link(&self, request: AddLinkRequest) -> Result<AddLinkResponse> {
        self.reply(Method::AddLink, &request, |_, result| AddLinkResponse { result })
    }

    async fn edit_link(&self, request: EditLinkRequest) -> Result<EditLinkResponse> {
        self.reply(Method::EditLink, &request, |_, result| EditLinkResponse { result })
    }

    async fn get_hooks(&self, request: GetHooksRequest) -> Result<GetHooksResponse> {
        self.reply(Method::GetHooks, &request, |_, _| GetHooksResponse::default())
    }

    async fn add_hook(&self, request: AddHookRequest) -> Result<AddHookResponse> {
        self.reply(Method::AddHook, &request, |_, result| AddHookResponse { result })
    }

    async fn get_mobility_configs(
        &self,
        request: GetMobilityConfigsRequest,
    ) -> Result<GetMobilityConfigsResponse> {
        self.reply(Method::GetMobilityConfigs, &request, |_, _| {
            GetMobilityConfigsResponse::default()
        })
    }

    async fn get_mobility_config(
        &self,
        request: GetMobilityConfigRequest,
    ) -> Result<GetMobilityConfigResponse> {
        self.reply(Method::GetMobilityConfig, &request, |_, _| {
            GetMobilityConfigResponse::default()
        })
    }

    async fn set_mobility_config(
        &self,
        request: SetMobilityConfigRequest,
    ) -> Result<SetMobilityConfigResponse> {
        self.reply(Method::SetMobilityConfig, &request, |_, result| {
            SetMobilityConfigResponse { result }
        })
    }

    async fn mobility_action(
        &self,
        request: MobilityActionRequest,
    ) -> Result<MobilityActionResponse> {
        self.reply(Method::MobilityAction, &request, |_, result| {
            MobilityActionResponse { result }
        })
    }

    async fn get_wlan_config(
        &self,
        request: GetWlanConfigRequest,
    ) -> Result<GetWlanConfigResponse> {
        self.reply(Method::GetWlanConfig, &request, |_, _| {
            GetWlanConfigResponse::default()
        })
    }

    async fn set_wlan_config(
        &self,
        request: SetWlanConfigRequest,
    ) -> Result<SetWlanConfigResponse> {
        self.reply(Method::SetWlanConfig, &request, |_, result| {
            SetWlanConfigResponse { result }
        })
    }

    async fn get_emane_config(
        &self,
        request: GetEmaneConfigRequest,
    ) -> Result<GetEmaneConfigResponse> {
        self.reply(Method::GetEmaneConfig, &request, |_, _| {
            GetEmaneConfigResponse::default()
        })
    }

    async fn set_emane_config(
        &self,
        request: SetEmaneConfigRequest,
    ) -> Result<SetEmaneConfigResponse> {
        self.reply(Method::SetEmaneConfig, &request, |_, result| {
            SetEmaneConfigResponse { result }
        })
    }

    async fn get_emane_models(
        &self,
        request: GetEmaneModelsRequest,
    ) -> Result<GetEmaneModelsResponse> {
        self.reply(Method::GetEmaneModels, &request, |_, _| {
            GetEmaneModelsResponse::default()
        })
    }

    async fn get_emane_model_config(
        &self,
        request: GetEmaneModelConfigRequest,
    ) -> Result<GetEmaneModelConfigResponse> {
        self.reply(Method::GetEmaneModelConfig, &request, |_, _| {
            GetEmaneModelConfigResponse::default()
        })
    }

    async fn set_emane_model_config(
        &self,
        request: SetEmaneModelConfigRequest,
    ) -> Result<SetEmaneModelConfigResponse> {
        self.reply(Method::SetEmaneModelConfig, &request, |_, result| {
            SetEmaneModelConfigResponse { result }
        })
    }

    async fn get_services(&self, request: GetServicesRequest) -> Result<GetServicesResponse> {
        self.reply(Method::GetServices, &request, |_, _| GetServicesResponse::default())
    }

    async fn get_service_defaults(
        &self,
        request: GetServiceDefaultsRequest,
    ) -> Result<GetServiceDefaultsResponse> {
        self.reply(Method::GetServiceDefaults, &request, |_, _| {
            GetServiceDefaultsResponse::default()
        })
    }

    async fn set_service_defaults(
        &self,
        request: SetServiceDefaultsRequest,
    ) -> Result<SetServiceDefaultsResponse> {
        self.reply(Method::SetServiceDefaults, &request, |_, result| {
            SetServiceDefaultsResponse { result }
        })
    }

    async fn get_node_service(
        &self,
        request: GetNodeServiceRequest,
    ) -> Result<GetNodeServiceResponse> {
        self.reply(Method::GetNodeService, &request, |_, _| GetNodeServiceResponse {
            service: Some(NodeServiceData::default()),
        })
    }

    async fn set_node_service(
        &self,
        request: SetNodeServiceRequest,
    ) -> Result<SetNodeServiceResponse> {
        self.reply(Method::SetNodeService, &request, |_, result| {
            SetNodeServiceResponse { result }
        })
    }

    async fn get_node_service_file(
        &self,
        request: GetNodeServiceFileRequest,
    ) -> Result<GetNodeServiceFileResponse> {
        self.reply(Method::GetNodeServiceFile, &request, |_, _| {
            GetNodeServiceFileResponse::default()
        })
    }

    async fn set_node_service_file(
        &self,
        request: SetNodeServiceFileRequest,
    ) -> Result<SetNodeServiceFileResponse> {
        self.reply(Method::SetNodeServiceFile, &request, |_, result| {
            SetNodeServiceFileResponse { result }
        })
    }

    async fn service_action(&self, request: ServiceActionRequest) -> Result<ServiceActionResponse> {
        self.reply(Method::ServiceAction, &request, |_, result| {
            ServiceActionResponse { result }
        })
    }
}
