//! SessionClient: one domain-level operation per remote capability
//!
//! Each operation builds one wire request through the mapper or the config
//! codec, awaits exactly one call and maps the response back. Nothing is
//! retried, batched or cached. Operations on an existing session take the
//! [`SessionContext`] explicitly; only [`SessionClient::set_state`] writes it.

use crate::codec::{
    groups_to_map, groups_to_record, record_to_map, ConfigMap, EMANE_MODEL_SCHEMA, EMANE_SCHEMA,
    SESSION_OPTIONS_SCHEMA,
};
use crate::error::ConnectError;
use crate::mapper::{self, MappingError};
use crate::model::{
    ConfigGroup, ConfigOption, Hook, Link, LocationConfig, MobilityAction, MobilityConfig, Node,
    ServiceAction, ServiceData, ServiceDefaults, ServiceFile, ServiceGroups, Session,
    SessionContext, SessionState, SessionSummary, WlanConfig,
};
use netemu_interface::{ApiError, CoreApi};
use netemu_proto as proto;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, ConnectError>;

/// Session operations against any [`CoreApi`]
pub struct SessionClient<A: CoreApi> {
    api: A,
}

fn node_id(node: &Node, operation: &'static str) -> Result<i32> {
    node.id.ok_or(ConnectError::MissingNodeId { operation })
}

impl<A: CoreApi> SessionClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 1. Sessions
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session and return its context
    pub async fn create_session(&self) -> Result<SessionContext> {
        let response = self
            .api
            .create_session(proto::CreateSessionRequest { session_id: None })
            .await?;
        let state = mapper::session_state_from_wire(response.state)?;

        info!("Created session {} in {}", response.session_id, state);

        Ok(SessionContext::new(response.session_id, state))
    }

    pub async fn delete_session(&self, session_id: i32) -> Result<bool> {
        let response = self
            .api
            .delete_session(proto::DeleteSessionRequest { session_id })
            .await?;
        if response.result {
            info!("Deleted session {}", session_id);
        } else {
            warn!("Daemon refused to delete session {}", session_id);
        }
        Ok(response.result)
    }

    pub async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        let response = self.api.get_sessions(proto::GetSessionsRequest {}).await?;
        debug!("Daemon reports {} sessions", response.sessions.len());
        response
            .sessions
            .into_iter()
            .map(|summary| mapper::session_summary_from_wire(summary).map_err(ConnectError::from))
            .collect()
    }

    /// Node and link snapshot of a session
    pub async fn get_session(&self, session_id: i32) -> Result<Session> {
        let response = self
            .api
            .get_session(proto::GetSessionRequest { session_id })
            .await?;
        let session = response
            .session
            .ok_or_else(|| ApiError::missing_field("GetSession", "session"))?;
        let session = mapper::session_from_wire(session)?;

        debug!(
            "Session {}: {} nodes, {} links",
            session.id,
            session.nodes.len(),
            session.links.len()
        );

        Ok(session)
    }

    /// Move the session to `state`
    ///
    /// The context follows only when the daemon acknowledges the transition.
    pub async fn set_state(&self, ctx: &mut SessionContext, state: SessionState) -> Result<bool> {
        let response = self
            .api
            .set_session_state(proto::SetSessionStateRequest {
                session_id: ctx.id,
                state: mapper::session_state_to_wire(state),
            })
            .await?;

        if response.result {
            info!("Session {}: {} -> {}", ctx.id, ctx.state, state);
            ctx.state = state;
        } else {
            warn!("Session {}: daemon refused transition to {}", ctx.id, state);
        }
        Ok(response.result)
    }

    pub async fn get_session_options(&self, ctx: &SessionContext) -> Result<Vec<ConfigGroup>> {
        let response = self
            .api
            .get_session_options(proto::GetSessionOptionsRequest { session_id: ctx.id })
            .await?;
        Ok(mapper::config_groups_from_wire(response.groups))
    }

    /// Session options flattened to `name -> value`
    pub async fn get_session_option_map(&self, ctx: &SessionContext) -> Result<ConfigMap> {
        let groups = self.get_session_options(ctx).await?;
        let values = SESSION_OPTIONS_SCHEMA.extract(&groups_to_map(&groups))?;
        Ok(SESSION_OPTIONS_SCHEMA.render(&values))
    }

    pub async fn set_session_options(
        &self,
        ctx: &SessionContext,
        options: &[ConfigOption],
    ) -> Result<bool> {
        let config = SESSION_OPTIONS_SCHEMA.encode_options(options)?;
        let response = self
            .api
            .set_session_options(proto::SetSessionOptionsRequest {
                session_id: ctx.id,
                config,
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_location(&self, ctx: &SessionContext) -> Result<LocationConfig> {
        let response = self
            .api
            .get_session_location(proto::GetSessionLocationRequest { session_id: ctx.id })
            .await?;
        Ok(mapper::location_from_wire(response.position, response.scale))
    }

    pub async fn set_location(
        &self,
        ctx: &SessionContext,
        config: &LocationConfig,
    ) -> Result<bool> {
        let (position, scale) = mapper::location_to_wire(config);
        let response = self
            .api
            .set_session_location(proto::SetSessionLocationRequest {
                session_id: ctx.id,
                position: Some(position),
                scale,
            })
            .await?;
        Ok(response.result)
    }

    /// Export the session as CORE XML, returned untouched
    pub async fn save_xml(&self, ctx: &SessionContext) -> Result<Vec<u8>> {
        let response = self
            .api
            .save_xml(proto::SaveXmlRequest { session_id: ctx.id })
            .await?;
        debug!("Session {}: saved {} bytes of XML", ctx.id, response.data.len());
        Ok(response.data)
    }

    /// Create a session from CORE XML
    ///
    /// Returns the new session id, or `None` if the daemon rejected the file.
    pub async fn open_xml(&self, data: Vec<u8>) -> Result<Option<i32>> {
        let response = self.api.open_xml(proto::OpenXmlRequest { data }).await?;
        if response.result {
            info!("Opened XML as session {}", response.session_id);
            Ok(Some(response.session_id))
        } else {
            warn!("Daemon rejected session XML");
            Ok(None)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 2. Topology
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a node; returns the id the daemon assigned
    ///
    /// Node creation has no negative acknowledgment: the daemon either
    /// answers with an id or fails the call.
    pub async fn create_node(&self, ctx: &SessionContext, node: &Node) -> Result<i32> {
        let response = self
            .api
            .add_node(proto::AddNodeRequest {
                session_id: ctx.id,
                node: Some(mapper::node_to_wire(node)),
            })
            .await?;
        debug!(
            "Session {}: created {} node {}",
            ctx.id, node.node_type, response.node_id
        );
        Ok(response.node_id)
    }

    /// Move a node on the canvas
    pub async fn edit_node(&self, ctx: &SessionContext, node: &Node) -> Result<bool> {
        let node_id = node_id(node, "edit_node")?;
        let response = self
            .api
            .edit_node(proto::EditNodeRequest {
                session_id: ctx.id,
                node_id,
                position: node.position.as_ref().map(mapper::position_to_wire),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn delete_node(&self, ctx: &SessionContext, node_id: i32) -> Result<bool> {
        let response = self
            .api
            .delete_node(proto::DeleteNodeRequest {
                session_id: ctx.id,
                node_id,
            })
            .await?;
        Ok(response.result)
    }

    pub async fn create_link(&self, ctx: &SessionContext, link: &Link) -> Result<bool> {
        let response = self
            .api
            .add_link(proto::AddLinkRequest {
                session_id: ctx.id,
                link: Some(mapper::link_to_wire(link)?),
            })
            .await?;
        debug!(
            "Session {}: link {:?} - {:?} accepted: {}",
            ctx.id, link.node_one, link.node_two, response.result
        );
        Ok(response.result)
    }

    /// Change the options of an existing link
    ///
    /// Interfaces are addressed by id only.
    pub async fn edit_link(&self, ctx: &SessionContext, link: &Link) -> Result<bool> {
        let response = self
            .api
            .edit_link(proto::EditLinkRequest {
                session_id: ctx.id,
                node_one_id: link.node_one,
                node_two_id: link.node_two,
                interface_one_id: link.interface_one.as_ref().and_then(|i| i.id),
                interface_two_id: link.interface_two.as_ref().and_then(|i| i.id),
                options: link.options.as_ref().map(mapper::link_options_to_wire),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn create_hook(&self, ctx: &SessionContext, hook: &Hook) -> Result<bool> {
        let response = self
            .api
            .add_hook(proto::AddHookRequest {
                session_id: ctx.id,
                hook: Some(mapper::hook_to_wire(hook)),
            })
            .await?;
        debug!(
            "Session {}: hook {} for {} accepted: {}",
            ctx.id, hook.file, hook.state, response.result
        );
        Ok(response.result)
    }

    pub async fn get_hooks(&self, ctx: &SessionContext) -> Result<Vec<Hook>> {
        let response = self
            .api
            .get_hooks(proto::GetHooksRequest { session_id: ctx.id })
            .await?;
        response
            .hooks
            .into_iter()
            .map(|hook| mapper::hook_from_wire(hook).map_err(ConnectError::from))
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 3. Mobility, WLAN and EMANE configuration
    // ═══════════════════════════════════════════════════════════════════════

    pub async fn get_wlan_config(&self, ctx: &SessionContext, node_id: i32) -> Result<WlanConfig> {
        let response = self
            .api
            .get_wlan_config(proto::GetWlanConfigRequest {
                session_id: ctx.id,
                node_id,
            })
            .await?;
        let groups = mapper::config_groups_from_wire(response.groups);
        Ok(groups_to_record(&groups)?)
    }

    pub async fn set_wlan_config(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        config: &WlanConfig,
    ) -> Result<bool> {
        let response = self
            .api
            .set_wlan_config(proto::SetWlanConfigRequest {
                session_id: ctx.id,
                node_id,
                config: record_to_map(config),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_mobility_config(
        &self,
        ctx: &SessionContext,
        node_id: i32,
    ) -> Result<MobilityConfig> {
        let response = self
            .api
            .get_mobility_config(proto::GetMobilityConfigRequest {
                session_id: ctx.id,
                node_id,
            })
            .await?;
        let groups = mapper::config_groups_from_wire(response.groups);
        Ok(groups_to_record(&groups)?)
    }

    /// Mobility configuration of every node that has one, keyed by node id
    pub async fn get_mobility_configs(
        &self,
        ctx: &SessionContext,
    ) -> Result<BTreeMap<i32, MobilityConfig>> {
        let response = self
            .api
            .get_mobility_configs(proto::GetMobilityConfigsRequest { session_id: ctx.id })
            .await?;

        let mut configs = BTreeMap::new();
        for (node_id, config) in response.configs {
            let groups = mapper::config_groups_from_wire(config.groups);
            configs.insert(node_id, groups_to_record(&groups)?);
        }
        Ok(configs)
    }

    pub async fn set_mobility_config(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        config: &MobilityConfig,
    ) -> Result<bool> {
        let response = self
            .api
            .set_mobility_config(proto::SetMobilityConfigRequest {
                session_id: ctx.id,
                node_id,
                config: record_to_map(config),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn mobility_action(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        action: MobilityAction,
    ) -> Result<bool> {
        let response = self
            .api
            .mobility_action(proto::MobilityActionRequest {
                session_id: ctx.id,
                node_id,
                action: mapper::mobility_action_to_wire(action),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_emane_config(&self, ctx: &SessionContext) -> Result<Vec<ConfigGroup>> {
        let response = self
            .api
            .get_emane_config(proto::GetEmaneConfigRequest { session_id: ctx.id })
            .await?;
        Ok(mapper::config_groups_from_wire(response.groups))
    }

    pub async fn set_emane_config(
        &self,
        ctx: &SessionContext,
        options: &[ConfigOption],
    ) -> Result<bool> {
        let config = EMANE_SCHEMA.encode_options(options)?;
        let response = self
            .api
            .set_emane_config(proto::SetEmaneConfigRequest {
                session_id: ctx.id,
                config,
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_emane_models(&self, ctx: &SessionContext) -> Result<Vec<String>> {
        let response = self
            .api
            .get_emane_models(proto::GetEmaneModelsRequest { session_id: ctx.id })
            .await?;
        Ok(response.models)
    }

    pub async fn get_emane_model_config(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        model: &str,
    ) -> Result<Vec<ConfigGroup>> {
        let response = self
            .api
            .get_emane_model_config(proto::GetEmaneModelConfigRequest {
                session_id: ctx.id,
                node_id,
                model: model.to_string(),
            })
            .await?;
        Ok(mapper::config_groups_from_wire(response.groups))
    }

    pub async fn set_emane_model_config(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        model: &str,
        options: &[ConfigOption],
    ) -> Result<bool> {
        let config = EMANE_MODEL_SCHEMA.encode_options(options)?;
        let response = self
            .api
            .set_emane_model_config(proto::SetEmaneModelConfigRequest {
                session_id: ctx.id,
                node_id,
                model: model.to_string(),
                config,
            })
            .await?;
        Ok(response.result)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 4. Node services
    // ═══════════════════════════════════════════════════════════════════════

    /// The daemon's service catalogue, by group
    pub async fn get_services(&self) -> Result<ServiceGroups> {
        let response = self.api.get_services(proto::GetServicesRequest {}).await?;
        Ok(mapper::service_groups_from_wire(response.services))
    }

    pub async fn get_service_defaults(&self, ctx: &SessionContext) -> Result<ServiceDefaults> {
        let response = self
            .api
            .get_service_defaults(proto::GetServiceDefaultsRequest { session_id: ctx.id })
            .await?;
        Ok(mapper::service_defaults_from_wire(response.defaults))
    }

    pub async fn set_service_defaults(
        &self,
        ctx: &SessionContext,
        defaults: &ServiceDefaults,
    ) -> Result<bool> {
        let response = self
            .api
            .set_service_defaults(proto::SetServiceDefaultsRequest {
                session_id: ctx.id,
                defaults: mapper::service_defaults_to_wire(defaults),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
    ) -> Result<ServiceData> {
        let response = self
            .api
            .get_node_service(proto::GetNodeServiceRequest {
                session_id: ctx.id,
                node_id,
                service: service.to_string(),
            })
            .await?;
        let data = response
            .service
            .ok_or_else(|| ApiError::missing_field("GetNodeService", "service"))?;
        Ok(mapper::service_data_from_wire(data)?)
    }

    /// Replace the startup, validate and shutdown commands of a node's service
    pub async fn set_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
        data: &ServiceData,
    ) -> Result<bool> {
        let response = self
            .api
            .set_node_service(proto::SetNodeServiceRequest {
                session_id: ctx.id,
                node_id,
                service: service.to_string(),
                startup: data.startup.clone(),
                validate: data.validate.clone(),
                shutdown: data.shutdown.clone(),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn get_service_file(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
        file: &str,
    ) -> Result<ServiceFile> {
        let response = self
            .api
            .get_node_service_file(proto::GetNodeServiceFileRequest {
                session_id: ctx.id,
                node_id,
                service: service.to_string(),
                file: file.to_string(),
            })
            .await?;
        let data = String::from_utf8(response.data).map_err(|_| {
            MappingError::InvalidUtf8 {
                what: format!("service file {}", file),
            }
        })?;
        Ok(ServiceFile {
            name: file.to_string(),
            data,
        })
    }

    pub async fn set_service_file(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
        file: &ServiceFile,
    ) -> Result<bool> {
        let response = self
            .api
            .set_node_service_file(proto::SetNodeServiceFileRequest {
                session_id: ctx.id,
                node_id,
                service: service.to_string(),
                file: file.name.clone(),
                data: file.data.as_bytes().to_vec(),
            })
            .await?;
        Ok(response.result)
    }

    pub async fn service_action(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
        action: ServiceAction,
    ) -> Result<bool> {
        let response = self
            .api
            .service_action(proto::ServiceActionRequest {
                session_id: ctx.id,
                node_id,
                service: service.to_string(),
                action: mapper::service_action_to_wire(action),
            })
            .await?;
        debug!(
            "Session {}: {:?} {} on node {} accepted: {}",
            ctx.id, action, service, node_id, response.result
        );
        Ok(response.result)
    }

    pub async fn start_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
    ) -> Result<bool> {
        self.service_action(ctx, node_id, service, ServiceAction::Start)
            .await
    }

    pub async fn stop_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
    ) -> Result<bool> {
        self.service_action(ctx, node_id, service, ServiceAction::Stop)
            .await
    }

    pub async fn restart_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
    ) -> Result<bool> {
        self.service_action(ctx, node_id, service, ServiceAction::Restart)
            .await
    }

    pub async fn validate_service(
        &self,
        ctx: &SessionContext,
        node_id: i32,
        service: &str,
    ) -> Result<bool> {
        self.service_action(ctx, node_id, service, ServiceAction::Validate)
            .await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // 5. Node-scoped helpers
    // ═══════════════════════════════════════════════════════════════════════

    /// Read a WLAN node's configuration; the node must carry an id
    pub async fn get_node_wlan_config(
        &self,
        ctx: &SessionContext,
        node: &Node,
    ) -> Result<WlanConfig> {
        self.get_wlan_config(ctx, node_id(node, "get_wlan_config")?)
            .await
    }

    /// Write a WLAN node's configuration; the node must carry an id
    pub async fn set_node_wlan_config(
        &self,
        ctx: &SessionContext,
        node: &Node,
        config: &WlanConfig,
    ) -> Result<bool> {
        self.set_wlan_config(ctx, node_id(node, "set_wlan_config")?, config)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;
    use netemu_interface::testing::{Method, RecordingApi};

    fn ctx() -> SessionContext {
        SessionContext::new(1, SessionState::Definition)
    }

    fn wire_group(name: &str, options: &[(&str, &str)]) -> proto::ConfigGroup {
        proto::ConfigGroup {
            name: name.to_string(),
            options: options
                .iter()
                .map(|(name, value)| proto::ConfigOption {
                    name: name.to_string(),
                    value: value.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_create_session_returns_context() {
        let client = SessionClient::new(RecordingApi::new());

        let ctx = client.create_session().await.unwrap();
        assert_eq!(ctx, SessionContext::new(1, SessionState::Definition));
    }

    #[tokio::test]
    async fn test_set_state_updates_context_only_when_acknowledged() {
        let api = RecordingApi::new();
        api.reject_on(Method::SetSessionState, 2);
        let client = SessionClient::new(api.clone());
        let mut ctx = ctx();

        assert!(client
            .set_state(&mut ctx, SessionState::Configuration)
            .await
            .unwrap());
        assert_eq!(ctx.state, SessionState::Configuration);

        assert!(!client
            .set_state(&mut ctx, SessionState::Instantiation)
            .await
            .unwrap());
        assert_eq!(ctx.state, SessionState::Configuration);
    }

    #[tokio::test]
    async fn test_set_state_fault_leaves_context() {
        let api = RecordingApi::new();
        api.fail_on(Method::SetSessionState, 1);
        let client = SessionClient::new(api);
        let mut ctx = ctx();

        let err = client
            .set_state(&mut ctx, SessionState::Runtime)
            .await
            .unwrap_err();
        assert!(err.is_transport_fault());
        assert_eq!(ctx.state, SessionState::Definition);
    }

    #[tokio::test]
    async fn test_wlan_config_last_group_wins() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetWlanConfig,
            proto::GetWlanConfigResponse {
                groups: vec![
                    wire_group("Basic", &[("range", "275"), ("bandwidth", "54000000")]),
                    wire_group("Override", &[("range", "400")]),
                ],
            },
        );
        let client = SessionClient::new(api);

        let config = client.get_wlan_config(&ctx(), 3).await.unwrap();
        assert_eq!(config.range.as_deref(), Some("400"));
        assert_eq!(config.bandwidth.as_deref(), Some("54000000"));
        assert_eq!(config.delay, None);
    }

    #[tokio::test]
    async fn test_mobility_configs_bad_refresh_is_mapping_error() {
        let api = RecordingApi::new();
        let mut configs = BTreeMap::new();
        configs.insert(
            6,
            proto::get_mobility_configs_response::MobilityConfig {
                groups: vec![wire_group("ns2", &[("refresh_ms", "soon")])],
            },
        );
        api.respond_with(
            Method::GetMobilityConfigs,
            proto::GetMobilityConfigsResponse { configs },
        );
        let client = SessionClient::new(api);

        let err = client.get_mobility_configs(&ctx()).await.unwrap_err();
        assert!(err.is_mapping_error());
    }

    #[tokio::test]
    async fn test_create_link_sends_session_and_options() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let mut link = Link::between(1, 2);
        link.options = Some(crate::model::LinkOptions {
            delay: Some(250.0),
            ..Default::default()
        });

        assert!(client.create_link(&ctx(), &link).await.unwrap());

        let request: proto::AddLinkRequest = api.calls_to(Method::AddLink)[0].request();
        let wire = request.link.unwrap();
        assert_eq!(request.session_id, 1);
        assert_eq!(wire.node_one_id, Some(1));
        assert_eq!(wire.options.unwrap().delay, Some(250.0));
    }

    #[tokio::test]
    async fn test_hook_carries_session_id() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let hook = Hook {
            state: SessionState::Runtime,
            file: "runtime_hook.sh".to_string(),
            data: "echo hi".to_string(),
        };

        client
            .create_hook(&SessionContext::new(9, SessionState::Configuration), &hook)
            .await
            .unwrap();

        let request: proto::AddHookRequest = api.calls()[0].request();
        assert_eq!(request.session_id, 9);
        assert_eq!(request.hook.unwrap().data, b"echo hi".to_vec());
    }

    #[tokio::test]
    async fn test_edit_node_requires_id() {
        let client = SessionClient::new(RecordingApi::new());
        let err = client
            .edit_node(&ctx(), &Node::new(NodeType::Default))
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectError::MissingNodeId { .. }));
        assert!(client.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_session_without_snapshot_is_malformed() {
        let api = RecordingApi::new();
        api.respond_with(Method::GetSession, proto::GetSessionResponse { session: None });
        let client = SessionClient::new(api);

        let err = client.get_session(1).await.unwrap_err();
        assert!(matches!(err, ConnectError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_open_xml_rejected() {
        let api = RecordingApi::new();
        api.reject_on(Method::OpenXml, 1);
        let client = SessionClient::new(api);

        assert_eq!(client.open_xml(b"<scenario/>".to_vec()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_service_action_helpers() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());

        client.restart_service(&ctx(), 2, "zebra").await.unwrap();

        let request: proto::ServiceActionRequest = api.calls()[0].request();
        assert_eq!(request.action, proto::ServiceAction::Restart as i32);
        assert_eq!(request.service, "zebra");
        assert_eq!(request.node_id, 2);
    }

    #[tokio::test]
    async fn test_delete_node_and_edit_link_address_by_id() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let mut link = Link::between(1, 2);
        link.options = Some(crate::model::LinkOptions {
            jitter: Some(10.0),
            ..Default::default()
        });

        assert!(client.delete_node(&ctx(), 4).await.unwrap());
        assert!(client.edit_link(&ctx(), &link).await.unwrap());

        let delete: proto::DeleteNodeRequest = api.calls_to(Method::DeleteNode)[0].request();
        assert_eq!(delete.node_id, 4);
        let edit: proto::EditLinkRequest = api.calls_to(Method::EditLink)[0].request();
        assert_eq!(edit.node_one_id, Some(1));
        assert_eq!(edit.node_two_id, Some(2));
        assert_eq!(edit.interface_one_id, None);
        assert_eq!(edit.options.unwrap().jitter, Some(10.0));
    }

    #[tokio::test]
    async fn test_get_hooks_decodes_state_and_script() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetHooks,
            proto::GetHooksResponse {
                hooks: vec![proto::Hook {
                    state: proto::SessionState::Runtime as i32,
                    file: "up.sh".to_string(),
                    data: b"echo up".to_vec(),
                }],
            },
        );
        let client = SessionClient::new(api);

        let hooks = client.get_hooks(&ctx()).await.unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].state, SessionState::Runtime);
        assert_eq!(hooks[0].data, "echo up");
    }

    #[tokio::test]
    async fn test_get_hooks_unknown_state_is_mapping_error() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetHooks,
            proto::GetHooksResponse {
                hooks: vec![proto::Hook {
                    state: 42,
                    file: "odd.sh".to_string(),
                    data: Vec::new(),
                }],
            },
        );
        let client = SessionClient::new(api);

        assert!(client.get_hooks(&ctx()).await.unwrap_err().is_mapping_error());
    }

    #[tokio::test]
    async fn test_session_options_round_through_open_schema() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetSessionOptions,
            proto::GetSessionOptionsResponse {
                groups: vec![wire_group("Options", &[("controlnet", "172.16.0.0/24")])],
            },
        );
        let client = SessionClient::new(api.clone());

        let map = client.get_session_option_map(&ctx()).await.unwrap();
        assert_eq!(map.get("controlnet").map(String::as_str), Some("172.16.0.0/24"));

        let options = vec![ConfigOption {
            name: "preservedir".to_string(),
            value: "1".to_string(),
            ..Default::default()
        }];
        assert!(client.set_session_options(&ctx(), &options).await.unwrap());

        let request: proto::SetSessionOptionsRequest =
            api.calls_to(Method::SetSessionOptions)[0].request();
        assert_eq!(request.config.get("preservedir").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_location_round_trip_through_wire() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let mut location = LocationConfig {
            scale: Some(150.0),
            ..Default::default()
        };
        location.location.latitude = Some(47.5);
        location.location.longitude = Some(-122.25);

        assert!(client.set_location(&ctx(), &location).await.unwrap());

        let request: proto::SetSessionLocationRequest =
            api.calls_to(Method::SetSessionLocation)[0].request();
        assert_eq!(request.scale, Some(150.0));
        let position = request.position.unwrap();
        assert_eq!(position.lat, Some(47.5));
        assert_eq!(position.x, None);

        api.respond_with(
            Method::GetSessionLocation,
            proto::GetSessionLocationResponse {
                position: Some(position),
                scale: request.scale,
            },
        );
        assert_eq!(client.get_location(&ctx()).await.unwrap(), location);
    }

    #[tokio::test]
    async fn test_location_without_position_is_empty() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetSessionLocation,
            proto::GetSessionLocationResponse {
                position: None,
                scale: None,
            },
        );
        let client = SessionClient::new(api);

        assert_eq!(
            client.get_location(&ctx()).await.unwrap(),
            LocationConfig::default()
        );
    }

    #[tokio::test]
    async fn test_set_wlan_config_omits_absent_values() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let config = WlanConfig {
            range: Some("300".to_string()),
            ..Default::default()
        };

        assert!(client.set_wlan_config(&ctx(), 2, &config).await.unwrap());

        let request: proto::SetWlanConfigRequest = api.calls_to(Method::SetWlanConfig)[0].request();
        assert_eq!(request.node_id, 2);
        assert_eq!(request.config.len(), 1);
        assert_eq!(request.config.get("range").map(String::as_str), Some("300"));
    }

    #[tokio::test]
    async fn test_mobility_config_refresh_is_numeric() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetMobilityConfig,
            proto::GetMobilityConfigResponse {
                groups: vec![wire_group(
                    "ns2",
                    &[("file", "sample.scen"), ("refresh_ms", " 50 "), ("loop", "1")],
                )],
            },
        );
        let client = SessionClient::new(api.clone());

        let config = client.get_mobility_config(&ctx(), 5).await.unwrap();
        assert_eq!(config.refresh_ms, Some(50));
        assert_eq!(config.repeat.as_deref(), Some("1"));

        assert!(client.set_mobility_config(&ctx(), 5, &config).await.unwrap());
        let request: proto::SetMobilityConfigRequest =
            api.calls_to(Method::SetMobilityConfig)[0].request();
        assert_eq!(request.config.get("refresh_ms").map(String::as_str), Some("50"));
        assert_eq!(request.config.get("loop").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_mobility_action_wire_value() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());

        client
            .mobility_action(&ctx(), 5, MobilityAction::Pause)
            .await
            .unwrap();

        let request: proto::MobilityActionRequest = api.calls()[0].request();
        assert_eq!(request.node_id, 5);
        assert_eq!(request.action, proto::MobilityAction::Pause as i32);
    }

    #[tokio::test]
    async fn test_emane_model_config_keeps_unknown_keys() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetEmaneModels,
            proto::GetEmaneModelsResponse {
                models: vec!["emane_rfpipe".to_string(), "emane_ieee80211abg".to_string()],
            },
        );
        let client = SessionClient::new(api.clone());

        let models = client.get_emane_models(&ctx()).await.unwrap();
        assert_eq!(models[0], "emane_rfpipe");

        let options = vec![ConfigOption {
            name: "datarate".to_string(),
            value: "1M".to_string(),
            ..Default::default()
        }];
        client
            .set_emane_model_config(&ctx(), 3, "emane_rfpipe", &options)
            .await
            .unwrap();
        client.set_emane_config(&ctx(), &options).await.unwrap();

        let model: proto::SetEmaneModelConfigRequest =
            api.calls_to(Method::SetEmaneModelConfig)[0].request();
        assert_eq!(model.model, "emane_rfpipe");
        assert_eq!(model.config.get("datarate").map(String::as_str), Some("1M"));
        let global: proto::SetEmaneConfigRequest =
            api.calls_to(Method::SetEmaneConfig)[0].request();
        assert_eq!(global.config.len(), 1);
    }

    #[tokio::test]
    async fn test_services_grouped_by_catalogue_group() {
        let api = RecordingApi::new();
        let service = |group: &str, name: &str| proto::Service {
            group: group.to_string(),
            name: name.to_string(),
        };
        api.respond_with(
            Method::GetServices,
            proto::GetServicesResponse {
                services: vec![
                    service("Quagga", "zebra"),
                    service("Utility", "DefaultRoute"),
                    service("Quagga", "OSPFv2"),
                ],
            },
        );
        let client = SessionClient::new(api);

        let groups = client.get_services().await.unwrap();
        assert_eq!(groups["Quagga"], vec!["zebra", "OSPFv2"]);
        assert_eq!(groups["Utility"], vec!["DefaultRoute"]);
    }

    #[tokio::test]
    async fn test_service_defaults_round_trip() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let mut defaults = ServiceDefaults::new();
        defaults.insert(
            "router".to_string(),
            ["zebra", "OSPFv2"].iter().map(|s| s.to_string()).collect(),
        );

        client.set_service_defaults(&ctx(), &defaults).await.unwrap();

        let request: proto::SetServiceDefaultsRequest =
            api.calls_to(Method::SetServiceDefaults)[0].request();
        assert_eq!(request.defaults[0].node_type, "router");
        api.respond_with(
            Method::GetServiceDefaults,
            proto::GetServiceDefaultsResponse {
                defaults: request.defaults,
            },
        );
        assert_eq!(client.get_service_defaults(&ctx()).await.unwrap(), defaults);
    }

    #[tokio::test]
    async fn test_get_service_maps_validation_fields() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetNodeService,
            proto::GetNodeServiceResponse {
                service: Some(proto::NodeServiceData {
                    startup: vec!["zebra -d".to_string()],
                    validation_mode: proto::ServiceValidationMode::Timer as i32,
                    validation_timer: 5,
                    ..Default::default()
                }),
            },
        );
        let client = SessionClient::new(api.clone());

        let data = client.get_service(&ctx(), 1, "zebra").await.unwrap();
        assert_eq!(data.validation_mode, crate::model::ValidationMode::Timer);
        assert_eq!(data.validation_timer, "5");

        client.set_service(&ctx(), 1, "zebra", &data).await.unwrap();
        let request: proto::SetNodeServiceRequest =
            api.calls_to(Method::SetNodeService)[0].request();
        assert_eq!(request.startup, vec!["zebra -d"]);
    }

    #[tokio::test]
    async fn test_get_service_without_data_is_malformed() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::GetNodeService,
            proto::GetNodeServiceResponse { service: None },
        );
        let client = SessionClient::new(api);

        let err = client.get_service(&ctx(), 1, "zebra").await.unwrap_err();
        assert!(matches!(err, ConnectError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_service_file_text_and_invalid_bytes() {
        let api = RecordingApi::new();
        let client = SessionClient::new(api.clone());
        let file = ServiceFile {
            name: "zebra.conf".to_string(),
            data: "hostname r1\n".to_string(),
        };

        client
            .set_service_file(&ctx(), 1, "zebra", &file)
            .await
            .unwrap();
        let request: proto::SetNodeServiceFileRequest =
            api.calls_to(Method::SetNodeServiceFile)[0].request();
        assert_eq!(request.file, "zebra.conf");
        assert_eq!(request.data, b"hostname r1\n".to_vec());

        api.respond_with(
            Method::GetNodeServiceFile,
            proto::GetNodeServiceFileResponse {
                data: b"hostname r1\n".to_vec(),
            },
        );
        assert_eq!(
            client
                .get_service_file(&ctx(), 1, "zebra", "zebra.conf")
                .await
                .unwrap(),
            file
        );

        api.respond_with(
            Method::GetNodeServiceFile,
            proto::GetNodeServiceFileResponse {
                data: vec![0xff, 0xfe],
            },
        );
        assert!(client
            .get_service_file(&ctx(), 1, "zebra", "zebra.conf")
            .await
            .unwrap_err()
            .is_mapping_error());
    }

    #[tokio::test]
    async fn test_save_xml_returns_bytes_untouched() {
        let api = RecordingApi::new();
        api.respond_with(
            Method::SaveXml,
            proto::SaveXmlResponse {
                data: b"<scenario name=\"x\"/>".to_vec(),
            },
        );
        let client = SessionClient::new(api);

        assert_eq!(
            client.save_xml(&ctx()).await.unwrap(),
            b"<scenario name=\"x\"/>".to_vec()
        );
    }
}
