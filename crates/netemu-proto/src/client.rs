//! Client stub for the `core.CoreApi` gRPC service.
//!
//! Mirrors the shape of a `tonic-prost-build` generated client. Every RPC of
//! the service is unary, so each method is stamped out by `unary_rpc!`.

pub mod core_api_client {
    use tonic::codegen::{http, Body, Bytes, StdError};

    /// Fully-qualified service name used to build request paths.
    pub const SERVICE_NAME: &str = "core.CoreApi";

    macro_rules! unary_rpc {
        ($(#[$doc:meta])* $name:ident, $path:literal, $req:ident => $resp:ident) => {
            $(#[$doc])*
            pub async fn $name(
                &mut self,
                request: impl tonic::IntoRequest<crate::$req>,
            ) -> std::result::Result<tonic::Response<crate::$resp>, tonic::Status> {
                self.inner.ready().await.map_err(|e| {
                    tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
                })?;
                let codec = tonic_prost::ProstCodec::default();
                let path = http::uri::PathAndQuery::from_static($path);
                self.inner.unary(request.into_request(), path, codec).await
            }
        };
    }

    #[derive(Debug, Clone)]
    pub struct CoreApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl CoreApiClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> CoreApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        /// Limits the maximum size of a decoded message.
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }

        // ── Sessions ──
        unary_rpc!(create_session, "/core.CoreApi/CreateSession", CreateSessionRequest => CreateSessionResponse);
        unary_rpc!(delete_session, "/core.CoreApi/DeleteSession", DeleteSessionRequest => DeleteSessionResponse);
        unary_rpc!(get_sessions, "/core.CoreApi/GetSessions", GetSessionsRequest => GetSessionsResponse);
        unary_rpc!(get_session, "/core.CoreApi/GetSession", GetSessionRequest => GetSessionResponse);
        unary_rpc!(set_session_state, "/core.CoreApi/SetSessionState", SetSessionStateRequest => SetSessionStateResponse);
        unary_rpc!(get_session_options, "/core.CoreApi/GetSessionOptions", GetSessionOptionsRequest => GetSessionOptionsResponse);
        unary_rpc!(set_session_options, "/core.CoreApi/SetSessionOptions", SetSessionOptionsRequest => SetSessionOptionsResponse);
        unary_rpc!(get_session_location, "/core.CoreApi/GetSessionLocation", GetSessionLocationRequest => GetSessionLocationResponse);
        unary_rpc!(set_session_location, "/core.CoreApi/SetSessionLocation", SetSessionLocationRequest => SetSessionLocationResponse);
        unary_rpc!(save_xml, "/core.CoreApi/SaveXml", SaveXmlRequest => SaveXmlResponse);
        unary_rpc!(open_xml, "/core.CoreApi/OpenXml", OpenXmlRequest => OpenXmlResponse);

        // ── Topology ──
        unary_rpc!(add_node, "/core.CoreApi/AddNode", AddNodeRequest => AddNodeResponse);
        unary_rpc!(edit_node, "/core.CoreApi/EditNode", EditNodeRequest => EditNodeResponse);
        unary_rpc!(delete_node, "/core.CoreApi/DeleteNode", DeleteNodeRequest => DeleteNodeResponse);
        unary_rpc!(add_link, "/core.CoreApi/AddLink", AddLinkRequest => AddLinkResponse);
        unary_rpc!(edit_link, "/core.CoreApi/EditLink", EditLinkRequest => EditLinkResponse);
        unary_rpc!(get_hooks, "/core.CoreApi/GetHooks", GetHooksRequest => GetHooksResponse);
        unary_rpc!(add_hook, "/core.CoreApi/AddHook", AddHookRequest => AddHookResponse);

        // ── Mobility / WLAN / EMANE ──
        unary_rpc!(get_mobility_configs, "/core.CoreApi/GetMobilityConfigs", GetMobilityConfigsRequest => GetMobilityConfigsResponse);
        unary_rpc!(get_mobility_config, "/core.CoreApi/GetMobilityConfig", GetMobilityConfigRequest => GetMobilityConfigResponse);
        unary_rpc!(set_mobility_config, "/core.CoreApi/SetMobilityConfig", SetMobilityConfigRequest => SetMobilityConfigResponse);
        unary_rpc!(mobility_action, "/core.CoreApi/MobilityAction", MobilityActionRequest => MobilityActionResponse);
        unary_rpc!(get_wlan_config, "/core.CoreApi/GetWlanConfig", GetWlanConfigRequest => GetWlanConfigResponse);
        unary_rpc!(set_wlan_config, "/core.CoreApi/SetWlanConfig", SetWlanConfigRequest => SetWlanConfigResponse);
        unary_rpc!(get_emane_config, "/core.CoreApi/GetEmaneConfig", GetEmaneConfigRequest => GetEmaneConfigResponse);
        unary_rpc!(set_emane_config, "/core.CoreApi/SetEmaneConfig", SetEmaneConfigRequest => SetEmaneConfigResponse);
        unary_rpc!(get_emane_models, "/core.CoreApi/GetEmaneModels", GetEmaneModelsRequest => GetEmaneModelsResponse);
        unary_rpc!(get_emane_model_config, "/core.CoreApi/GetEmaneModelConfig", GetEmaneModelConfigRequest => GetEmaneModelConfigResponse);
        unary_rpc!(set_emane_model_config, "/core.CoreApi/SetEmaneModelConfig", SetEmaneModelConfigRequest => SetEmaneModelConfigResponse);

        // ── Services ──
        unary_rpc!(get_services, "/core.CoreApi/GetServices", GetServicesRequest => GetServicesResponse);
        unary_rpc!(get_service_defaults, "/core.CoreApi/GetServiceDefaults", GetServiceDefaultsRequest => GetServiceDefaultsResponse);
        unary_rpc!(set_service_defaults, "/core.CoreApi/SetServiceDefaults", SetServiceDefaultsRequest => SetServiceDefaultsResponse);
        unary_rpc!(get_node_service, "/core.CoreApi/GetNodeService", GetNodeServiceRequest => GetNodeServiceResponse);
        unary_rpc!(set_node_service, "/core.CoreApi/SetNodeService", SetNodeServiceRequest => SetNodeServiceResponse);
        unary_rpc!(get_node_service_file, "/core.CoreApi/GetNodeServiceFile", GetNodeServiceFileRequest => GetNodeServiceFileResponse);
        unary_rpc!(set_node_service_file, "/core.CoreApi/SetNodeServiceFile", SetNodeServiceFileRequest => SetNodeServiceFileResponse);
        unary_rpc!(service_action, "/core.CoreApi/ServiceAction", ServiceActionRequest => ServiceActionResponse);
    }
}
