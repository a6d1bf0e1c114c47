//! GrpcCoreApi: CoreApi implementation that proxies to a CORE daemon via gRPC

use async_trait::async_trait;
use netemu_interface::{ApiError, CoreApi, Result};
use netemu_proto::core_api_client::CoreApiClient;
use netemu_proto::*;
use tonic::transport::Channel;
use tracing::debug;

/// Issue one unary call on a fresh handle of the shared client
macro_rules! forward {
    ($self:ident, $rpc:ident, $request:expr) => {{
        debug!(rpc = stringify!($rpc), "Calling CORE daemon");
        $self
            .client
            .clone()
            .$rpc($request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(ApiError::from)
    }};
}

/// A remote implementation of CoreApi that delegates every call to the
/// daemon over one gRPC channel.
///
/// This struct is cheaply cloneable (internally uses Arc via tonic's Channel).
///
/// # Example
///
/// ```rust,no_run
/// use netemu_connect::GrpcCoreApi;
/// use netemu_interface::CoreApi;
/// use netemu_proto::GetSessionsRequest;
/// use tonic::transport::Channel;
///
/// # async fn example() -> anyhow::Result<()> {
/// let channel = Channel::from_static("http://127.0.0.1:50051").connect().await?;
/// let api = GrpcCoreApi::new(channel);
///
/// let sessions = api.get_sessions(GetSessionsRequest {}).await?;
/// println!("{} sessions", sessions.sessions.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GrpcCoreApi {
    client: CoreApiClient<Channel>,
}

impl GrpcCoreApi {
    /// Wrap a channel; the channel may still be unconnected
    pub fn new(channel: Channel) -> Self {
        Self {
            client: CoreApiClient::new(channel),
        }
    }
}

#[async_trait]
impl CoreApi for GrpcCoreApi {
    // ═══════════════════════════════════════════════════════════════════════
    // 1. Sessions
    // ═══════════════════════════════════════════════════════════════════════

    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse> {
        forward!(self, create_session, request)
    }

    async fn delete_session(&self, request: DeleteSessionRequest) -> Result<DeleteSessionResponse> {
        forward!(self, delete_session, request)
    }

    async fn get_sessions(&self, request: GetSessionsRequest) -> Result<GetSessionsResponse> {
        forward!(self, get_sessions, request)
    }

    async fn get_session(&self, request: GetSessionRequest) -> Result<GetSessionResponse> {
        forward!(self, get_session, request)
    }

    async fn set_session_state(
        &self,
        request: SetSessionStateRequest,
    ) -> Result<SetSessionStateResponse> {
        forward!(self, set_session_state, request)
    }

    async fn get_session_options(
        &self,
        request: GetSessionOptionsRequest,
    ) -> Result<GetSessionOptionsResponse> {
        forward!(self, get_session_options, request)
    }

    async fn set_session_options(
        &self,
        request: SetSessionOptionsRequest,
    ) -> Result<SetSessionOptionsResponse> {
        forward!(self, set_session_options, request)
    }

    async fn get_session_location(
        &self,
        request: GetSessionLocationRequest,
    ) -> Result<GetSessionLocationResponse> {
        forward!(self, get_session_location, request)
    }

    async fn set_session_location(
        &self,
        request: SetSessionLocationRequest,
    ) -> Result<SetSessionLocationResponse> {
        forward!(self, set_session_location, request)
    }

    async fn save_xml(&self, request: SaveXmlRequest) -> Result<SaveXmlResponse> {
        forward!(self, save_xml, request)
    }

    async fn open_xml(&self, request: OpenXmlRequest) -> Result<OpenXmlResponse> {
        debug!("Uploading {} bytes of session XML", request.data.len());
        forward!(self, open_xml, request)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 2. Topology
    // ═══════════════════════════════════════════════════════════════════════

    async fn add_node(&self, request: AddNodeRequest) -> Result<AddNodeResponse> {
        forward!(self, add_node, request)
    }

    async fn edit_node(&self, request: EditNodeRequest) -> Result<EditNodeResponse> {
        forward!(self, edit_node, request)
    }

    async fn delete_node(&self, request: DeleteNodeRequest) -> Result<DeleteNodeResponse> {
        forward!(self, delete_node, request)
    }

    async fn add_link(&self, request: AddLinkRequest) -> Result<AddLinkResponse> {
        forward!(self, add_link, request)
    }

    async fn edit_link(&self, request: EditLinkRequest) -> Result<EditLinkResponse> {
        forward!(self, edit_link, request)
    }

    async fn get_hooks(&self, request: GetHooksRequest) -> Result<GetHooksResponse> {
        forward!(self, get_hooks, request)
    }

    async fn add_hook(&self, request: AddHookRequest) -> Result<AddHookResponse> {
        forward!(self, add_hook, request)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 3. Mobility, WLAN and EMANE configuration
    // ═══════════════════════════════════════════════════════════════════════

    async fn get_mobility_configs(
        &self,
        request: GetMobilityConfigsRequest,
    ) -> Result<GetMobilityConfigsResponse> {
        forward!(self, get_mobility_configs, request)
    }

    async fn get_mobility_config(
        &self,
        request: GetMobilityConfigRequest,
    ) -> Result<GetMobilityConfigResponse> {
        forward!(self, get_mobility_config, request)
    }

    async fn set_mobility_config(
        &self,
        request: SetMobilityConfigRequest,
    ) -> Result<SetMobilityConfigResponse> {
        forward!(self, set_mobility_config, request)
    }

    async fn mobility_action(
        &self,
        request: MobilityActionRequest,
    ) -> Result<MobilityActionResponse> {
        forward!(self, mobility_action, request)
    }

    async fn get_wlan_config(
        &self,
        request: GetWlanConfigRequest,
    ) -> Result<GetWlanConfigResponse> {
        forward!(self, get_wlan_config, request)
    }

    async fn set_wlan_config(
        &self,
        request: SetWlanConfigRequest,
    ) -> Result<SetWlanConfigResponse> {
        forward!(self, set_wlan_config, request)
    }

    async fn get_emane_config(
        &self,
        request: GetEmaneConfigRequest,
    ) -> Result<GetEmaneConfigResponse> {
        forward!(self, get_emane_config, request)
    }

    async fn set_emane_config(
        &self,
        request: SetEmaneConfigRequest,
    ) -> Result<SetEmaneConfigResponse> {
        forward!(self, set_emane_config, request)
    }

    async fn get_emane_models(
        &self,
        request: GetEmaneModelsRequest,
    ) -> Result<GetEmaneModelsResponse> {
        forward!(self, get_emane_models, request)
    }

    async fn get_emane_model_config(
        &self,
        request: GetEmaneModelConfigRequest,
    ) -> Result<GetEmaneModelConfigResponse> {
        forward!(self, get_emane_model_config, request)
    }

    async fn set_emane_model_config(
        &self,
        request: SetEmaneModelConfigRequest,
    ) -> Result<SetEmaneModelConfigResponse> {
        forward!(self, set_emane_model_config, request)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 4. Node services
    // ═══════════════════════════════════════════════════════════════════════

    async fn get_services(&self, request: GetServicesRequest) -> Result<GetServicesResponse> {
        forward!(self, get_services, request)
    }

    async fn get_service_defaults(
        &self,
        request: GetServiceDefaultsRequest,
    ) -> Result<GetServiceDefaultsResponse> {
        forward!(self, get_service_defaults, request)
    }

    async fn set_service_defaults(
        &self,
        request: SetServiceDefaultsRequest,
    ) -> Result<SetServiceDefaultsResponse> {
        forward!(self, set_service_defaults, request)
    }

    async fn get_node_service(
        &self,
        request: GetNodeServiceRequest,
    ) -> Result<GetNodeServiceResponse> {
        forward!(self, get_node_service, request)
    }

    async fn set_node_service(
        &self,
        request: SetNodeServiceRequest,
    ) -> Result<SetNodeServiceResponse> {
        forward!(self, set_node_service, request)
    }

    async fn get_node_service_file(
        &self,
        request: GetNodeServiceFileRequest,
    ) -> Result<GetNodeServiceFileResponse> {
        forward!(self, get_node_service_file, request)
    }

    async fn set_node_service_file(
        &self,
        request: SetNodeServiceFileRequest,
    ) -> Result<SetNodeServiceFileResponse> {
        forward!(self, set_node_service_file, request)
    }

    async fn service_action(&self, request: ServiceActionRequest) -> Result<ServiceActionResponse> {
        forward!(self, service_action, request)
    }
}
