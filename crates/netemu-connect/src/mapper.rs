//! Field Mapper: domain records to wire messages and back
//!
//! Rules applied throughout:
//!
//! - A domain `None` never reaches the wire; the field is left unset.
//! - Coordinates and link parameters are `f64` in the domain and `f32` on the
//!   wire. Outgoing values are truncated with `as f32`, incoming values are
//!   widened. The precision loss matches what the daemon stores.
//! - Enumerations fail closed: an unknown wire value is a [`MappingError`].

use crate::model::{
    CanvasPosition, ConfigGroup, ConfigOption, GeoLocation, Hook, Interface, Link, LinkOptions,
    LinkType, LocationConfig, MobilityAction, Node, NodeType, Position, ServiceAction,
    ServiceData, ServiceDefaults, ServiceGroups, Session, SessionState, SessionSummary,
    ValidationMode,
};
use netemu_proto as proto;
use thiserror::Error;

/// A value that could not be converted between the wire and the domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Unknown {kind} value: {value}")]
    UnknownEnum { kind: &'static str, value: i32 },

    #[error("Invalid number for `{key}`: {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("{what} is not valid UTF-8")]
    InvalidUtf8 { what: String },
}

impl MappingError {
    fn invalid_number(key: &str, value: &str) -> Self {
        MappingError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;

// ═══════════════════════════════════════════════════════════════════════════
// Enumerations
// ═══════════════════════════════════════════════════════════════════════════

pub fn session_state_to_wire(state: SessionState) -> i32 {
    let wire = match state {
        SessionState::Undefined => proto::SessionState::None,
        SessionState::Definition => proto::SessionState::Definition,
        SessionState::Configuration => proto::SessionState::Configuration,
        SessionState::Instantiation => proto::SessionState::Instantiation,
        SessionState::Runtime => proto::SessionState::Runtime,
        SessionState::Datacollect => proto::SessionState::Datacollect,
        SessionState::Shutdown => proto::SessionState::Shutdown,
    };
    wire as i32
}

pub fn session_state_from_wire(value: i32) -> Result<SessionState> {
    let wire = proto::SessionState::try_from(value).map_err(|_| MappingError::UnknownEnum {
        kind: "session state",
        value,
    })?;
    Ok(match wire {
        proto::SessionState::None => SessionState::Undefined,
        proto::SessionState::Definition => SessionState::Definition,
        proto::SessionState::Configuration => SessionState::Configuration,
        proto::SessionState::Instantiation => SessionState::Instantiation,
        proto::SessionState::Runtime => SessionState::Runtime,
        proto::SessionState::Datacollect => SessionState::Datacollect,
        proto::SessionState::Shutdown => SessionState::Shutdown,
    })
}

pub fn node_type_to_wire(node_type: NodeType) -> i32 {
    let wire = match node_type {
        NodeType::Default => proto::NodeType::Default,
        NodeType::Physical => proto::NodeType::Physical,
        NodeType::Tbd => proto::NodeType::Tbd,
        NodeType::Switch => proto::NodeType::Switch,
        NodeType::Hub => proto::NodeType::Hub,
        NodeType::WirelessLan => proto::NodeType::WirelessLan,
        NodeType::Rj45 => proto::NodeType::Rj45,
        NodeType::Tunnel => proto::NodeType::Tunnel,
        NodeType::Ktunnel => proto::NodeType::Ktunnel,
        NodeType::Emane => proto::NodeType::Emane,
        NodeType::TapBridge => proto::NodeType::TapBridge,
        NodeType::PeerToPeer => proto::NodeType::PeerToPeer,
        NodeType::ControlNet => proto::NodeType::ControlNet,
        NodeType::EmaneNet => proto::NodeType::EmaneNet,
    };
    wire as i32
}

pub fn node_type_from_wire(value: i32) -> Result<NodeType> {
    let wire = proto::NodeType::try_from(value).map_err(|_| MappingError::UnknownEnum {
        kind: "node type",
        value,
    })?;
    Ok(match wire {
        proto::NodeType::Default => NodeType::Default,
        proto::NodeType::Physical => NodeType::Physical,
        proto::NodeType::Tbd => NodeType::Tbd,
        proto::NodeType::Switch => NodeType::Switch,
        proto::NodeType::Hub => NodeType::Hub,
        proto::NodeType::WirelessLan => NodeType::WirelessLan,
        proto::NodeType::Rj45 => NodeType::Rj45,
        proto::NodeType::Tunnel => NodeType::Tunnel,
        proto::NodeType::Ktunnel => NodeType::Ktunnel,
        proto::NodeType::Emane => NodeType::Emane,
        proto::NodeType::TapBridge => NodeType::TapBridge,
        proto::NodeType::PeerToPeer => NodeType::PeerToPeer,
        proto::NodeType::ControlNet => NodeType::ControlNet,
        proto::NodeType::EmaneNet => NodeType::EmaneNet,
    })
}

pub fn link_type_to_wire(link_type: LinkType) -> i32 {
    match link_type {
        LinkType::Wireless => proto::LinkType::Wireless as i32,
        LinkType::Wired => proto::LinkType::Wired as i32,
    }
}

pub fn link_type_from_wire(value: i32) -> Result<LinkType> {
    match proto::LinkType::try_from(value) {
        Ok(proto::LinkType::Wireless) => Ok(LinkType::Wireless),
        Ok(proto::LinkType::Wired) => Ok(LinkType::Wired),
        Err(_) => Err(MappingError::UnknownEnum {
            kind: "link type",
            value,
        }),
    }
}

pub fn validation_mode_to_wire(mode: ValidationMode) -> i32 {
    let wire = match mode {
        ValidationMode::Blocking => proto::ServiceValidationMode::Blocking,
        ValidationMode::NonBlocking => proto::ServiceValidationMode::NonBlocking,
        ValidationMode::Timer => proto::ServiceValidationMode::Timer,
    };
    wire as i32
}

pub fn validation_mode_from_wire(value: i32) -> Result<ValidationMode> {
    match proto::ServiceValidationMode::try_from(value) {
        Ok(proto::ServiceValidationMode::Blocking) => Ok(ValidationMode::Blocking),
        Ok(proto::ServiceValidationMode::NonBlocking) => Ok(ValidationMode::NonBlocking),
        Ok(proto::ServiceValidationMode::Timer) => Ok(ValidationMode::Timer),
        Err(_) => Err(MappingError::UnknownEnum {
            kind: "validation mode",
            value,
        }),
    }
}

pub fn service_action_to_wire(action: ServiceAction) -> i32 {
    let wire = match action {
        ServiceAction::Start => proto::ServiceAction::Start,
        ServiceAction::Stop => proto::ServiceAction::Stop,
        ServiceAction::Restart => proto::ServiceAction::Restart,
        ServiceAction::Validate => proto::ServiceAction::Validate,
    };
    wire as i32
}

pub fn mobility_action_to_wire(action: MobilityAction) -> i32 {
    let wire = match action {
        MobilityAction::Start => proto::MobilityAction::Start,
        MobilityAction::Pause => proto::MobilityAction::Pause,
        MobilityAction::Stop => proto::MobilityAction::Stop,
    };
    wire as i32
}

// ═══════════════════════════════════════════════════════════════════════════
// Nodes
// ═══════════════════════════════════════════════════════════════════════════

pub fn position_to_wire(position: &Position) -> proto::Position {
    proto::Position {
        x: narrow(position.x),
        y: narrow(position.y),
        ..Default::default()
    }
}

/// Only the canvas coordinates; geographic fields belong to the session location
pub fn position_from_wire(position: &proto::Position) -> Position {
    Position {
        x: widen(position.x),
        y: widen(position.y),
    }
}

pub fn node_to_wire(node: &Node) -> proto::Node {
    proto::Node {
        id: node.id,
        name: node.name.clone(),
        r#type: node_type_to_wire(node.node_type),
        model: node.model.clone(),
        position: node.position.as_ref().map(position_to_wire),
        services: node.services.iter().cloned().collect(),
        emane: node.emane.clone(),
        icon: node.icon.clone(),
    }
}

pub fn node_from_wire(node: proto::Node) -> Result<Node> {
    Ok(Node {
        id: node.id,
        name: node.name,
        node_type: node_type_from_wire(node.r#type)?,
        position: node.position.as_ref().map(position_from_wire),
        services: node.services.into_iter().collect(),
        emane: node.emane,
        model: node.model,
        icon: node.icon,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Links
// ═══════════════════════════════════════════════════════════════════════════

/// Parse an IPv6 prefix length for the wire
///
/// The only place the textual prefix becomes an integer.
pub fn ip6_mask_to_wire(mask: &str) -> Result<i32> {
    mask.trim()
        .parse()
        .map_err(|_| MappingError::invalid_number("ip6_mask", mask))
}

/// Format an IPv6 prefix length from the wire
pub fn ip6_mask_from_wire(mask: i32) -> String {
    mask.to_string()
}

pub fn interface_to_wire(interface: &Interface) -> Result<proto::Interface> {
    Ok(proto::Interface {
        id: interface.id,
        name: interface.name.clone(),
        mac: interface.mac.clone(),
        ip4: interface.ip4.clone(),
        ip4mask: interface.ip4_mask,
        ip6: interface.ip6.clone(),
        ip6mask: interface
            .ip6_mask
            .as_deref()
            .map(ip6_mask_to_wire)
            .transpose()?,
    })
}

pub fn interface_from_wire(interface: proto::Interface) -> Interface {
    Interface {
        id: interface.id,
        name: interface.name,
        mac: interface.mac,
        ip4: interface.ip4,
        ip4_mask: interface.ip4mask,
        ip6: interface.ip6,
        ip6_mask: interface.ip6mask.map(ip6_mask_from_wire),
    }
}

fn narrow(value: Option<f64>) -> Option<f32> {
    value.map(|v| v as f32)
}

fn widen(value: Option<f32>) -> Option<f64> {
    value.map(f64::from)
}

pub fn link_options_to_wire(options: &LinkOptions) -> proto::LinkOptions {
    proto::LinkOptions {
        opaque: options.opaque.clone(),
        jitter: narrow(options.jitter),
        key: options.key.map(|key| key.to_string()),
        mburst: narrow(options.mburst),
        mer: narrow(options.mer),
        per: narrow(options.per),
        bandwidth: narrow(options.bandwidth),
        burst: narrow(options.burst),
        delay: narrow(options.delay),
        dup: narrow(options.dup),
        unidirectional: options.unidirectional == 1,
    }
}

pub fn link_options_from_wire(options: proto::LinkOptions) -> Result<LinkOptions> {
    let key = match options.key.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(
            text.parse()
                .map_err(|_| MappingError::invalid_number("key", text))?,
        ),
    };

    Ok(LinkOptions {
        bandwidth: widen(options.bandwidth),
        burst: widen(options.burst),
        delay: widen(options.delay),
        jitter: widen(options.jitter),
        dup: widen(options.dup),
        per: widen(options.per),
        mburst: widen(options.mburst),
        mer: widen(options.mer),
        opaque: options.opaque,
        key,
        unidirectional: i32::from(options.unidirectional),
    })
}

pub fn link_to_wire(link: &Link) -> Result<proto::Link> {
    Ok(proto::Link {
        node_one_id: link.node_one,
        node_two_id: link.node_two,
        r#type: link_type_to_wire(link.link_type),
        interface_one: link.interface_one.as_ref().map(interface_to_wire).transpose()?,
        interface_two: link.interface_two.as_ref().map(interface_to_wire).transpose()?,
        options: link.options.as_ref().map(link_options_to_wire),
    })
}

pub fn link_from_wire(link: proto::Link) -> Result<Link> {
    Ok(Link {
        node_one: link.node_one_id,
        node_two: link.node_two_id,
        interface_one: link.interface_one.map(interface_from_wire),
        interface_two: link.interface_two.map(interface_from_wire),
        options: link.options.map(link_options_from_wire).transpose()?,
        link_type: link_type_from_wire(link.r#type)?,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Sessions and hooks
// ═══════════════════════════════════════════════════════════════════════════

pub fn session_summary_from_wire(summary: proto::SessionSummary) -> Result<SessionSummary> {
    Ok(SessionSummary {
        id: summary.id,
        state: session_state_from_wire(summary.state)?,
        node_count: summary.nodes,
    })
}

/// Map a session snapshot
///
/// Peer-to-peer nodes are daemon-internal plumbing behind point-to-point
/// links and are left out of the snapshot.
pub fn session_from_wire(session: proto::Session) -> Result<Session> {
    let mut nodes = Vec::with_capacity(session.nodes.len());
    for node in session.nodes {
        if node.r#type == proto::NodeType::PeerToPeer as i32 {
            continue;
        }
        nodes.push(node_from_wire(node)?);
    }

    Ok(Session {
        id: session.id,
        state: session_state_from_wire(session.state)?,
        nodes,
        links: session
            .links
            .into_iter()
            .map(link_from_wire)
            .collect::<Result<_>>()?,
    })
}

pub fn hook_to_wire(hook: &Hook) -> proto::Hook {
    proto::Hook {
        state: session_state_to_wire(hook.state),
        file: hook.file.clone(),
        data: hook.data.as_bytes().to_vec(),
    }
}

pub fn hook_from_wire(hook: proto::Hook) -> Result<Hook> {
    let data = String::from_utf8(hook.data).map_err(|_| MappingError::InvalidUtf8 {
        what: format!("hook {}", hook.file),
    })?;
    Ok(Hook {
        state: session_state_from_wire(hook.state)?,
        file: hook.file,
        data,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Location
// ═══════════════════════════════════════════════════════════════════════════

/// Session location as a wire position plus scale
pub fn location_to_wire(config: &LocationConfig) -> (proto::Position, Option<f32>) {
    let position = proto::Position {
        x: narrow(config.position.x),
        y: narrow(config.position.y),
        z: narrow(config.position.z),
        lat: narrow(config.location.latitude),
        lon: narrow(config.location.longitude),
        alt: narrow(config.location.altitude),
    };
    (position, narrow(config.scale))
}

pub fn location_from_wire(position: Option<proto::Position>, scale: Option<f32>) -> LocationConfig {
    let position = position.unwrap_or_default();
    LocationConfig {
        scale: widen(scale),
        position: CanvasPosition {
            x: widen(position.x),
            y: widen(position.y),
            z: widen(position.z),
        },
        location: GeoLocation {
            latitude: widen(position.lat),
            longitude: widen(position.lon),
            altitude: widen(position.alt),
        },
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration groups
// ═══════════════════════════════════════════════════════════════════════════

pub fn config_option_to_wire(option: &ConfigOption) -> proto::ConfigOption {
    proto::ConfigOption {
        label: option.label.clone(),
        name: option.name.clone(),
        value: option.value.clone(),
        r#type: option.option_type,
        select: option.select.clone(),
    }
}

pub fn config_option_from_wire(option: proto::ConfigOption) -> ConfigOption {
    ConfigOption {
        option_type: option.r#type,
        label: option.label,
        name: option.name,
        value: option.value,
        select: option.select,
    }
}

pub fn config_group_to_wire(group: &ConfigGroup) -> proto::ConfigGroup {
    proto::ConfigGroup {
        name: group.name.clone(),
        options: group.options.iter().map(config_option_to_wire).collect(),
    }
}

pub fn config_groups_from_wire(groups: Vec<proto::ConfigGroup>) -> Vec<ConfigGroup> {
    groups
        .into_iter()
        .map(|group| ConfigGroup {
            name: group.name,
            options: group
                .options
                .into_iter()
                .map(config_option_from_wire)
                .collect(),
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Services
// ═══════════════════════════════════════════════════════════════════════════

pub fn service_data_to_wire(service: &ServiceData) -> Result<proto::NodeServiceData> {
    let validation_timer = service
        .validation_timer
        .trim()
        .parse()
        .map_err(|_| MappingError::invalid_number("validation_timer", &service.validation_timer))?;

    Ok(proto::NodeServiceData {
        executables: service.executables.clone(),
        dependencies: service.dependencies.clone(),
        dirs: service.dirs.clone(),
        configs: service.configs.clone(),
        startup: service.startup.clone(),
        validate: service.validate.clone(),
        validation_mode: validation_mode_to_wire(service.validation_mode),
        validation_timer,
        shutdown: service.shutdown.clone(),
        meta: service.meta.clone(),
    })
}

pub fn service_data_from_wire(service: proto::NodeServiceData) -> Result<ServiceData> {
    Ok(ServiceData {
        executables: service.executables,
        dependencies: service.dependencies,
        dirs: service.dirs,
        configs: service.configs,
        startup: service.startup,
        validate: service.validate,
        shutdown: service.shutdown,
        meta: service.meta,
        validation_mode: validation_mode_from_wire(service.validation_mode)?,
        validation_timer: service.validation_timer.to_string(),
    })
}

/// Group the daemon's service catalogue, keeping catalogue order within a group
pub fn service_groups_from_wire(services: Vec<proto::Service>) -> ServiceGroups {
    let mut groups = ServiceGroups::new();
    for service in services {
        groups.entry(service.group).or_default().push(service.name);
    }
    groups
}

pub fn service_defaults_to_wire(defaults: &ServiceDefaults) -> Vec<proto::ServiceDefaults> {
    defaults
        .iter()
        .map(|(node_type, services)| proto::ServiceDefaults {
            node_type: node_type.clone(),
            services: services.iter().cloned().collect(),
        })
        .collect()
}

pub fn service_defaults_from_wire(defaults: Vec<proto::ServiceDefaults>) -> ServiceDefaults {
    defaults
        .into_iter()
        .map(|entry| (entry.node_type, entry.services.into_iter().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_options() -> LinkOptions {
        LinkOptions {
            bandwidth: Some(54_000_000.0),
            burst: Some(0.0),
            delay: Some(5000.0),
            jitter: Some(10.0),
            dup: Some(1.0),
            per: Some(0.5),
            mburst: Some(2.0),
            mer: Some(3.0),
            opaque: Some("tag".to_string()),
            key: Some(7),
            unidirectional: 1,
        }
    }

    #[test]
    fn test_absent_link_options_stay_off_the_wire() {
        let wire = link_options_to_wire(&LinkOptions::default());

        assert_eq!(wire.bandwidth, None);
        assert_eq!(wire.delay, None);
        assert_eq!(wire.key, None);
        assert_eq!(wire.opaque, None);
        assert!(!wire.unidirectional);
    }

    #[test]
    fn test_zero_is_not_absence() {
        let options = LinkOptions {
            delay: Some(0.0),
            ..Default::default()
        };
        let wire = link_options_to_wire(&options);
        assert_eq!(wire.delay, Some(0.0));
        assert_eq!(wire.jitter, None);
    }

    #[test]
    fn test_link_options_round_trip() {
        let options = full_options();
        let back = link_options_from_wire(link_options_to_wire(&options)).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_unidirectional_only_for_exactly_one() {
        for (value, expected) in [(1, true), (2, false), (0, false), (-1, false)] {
            let options = LinkOptions {
                unidirectional: value,
                ..Default::default()
            };
            assert_eq!(link_options_to_wire(&options).unidirectional, expected);
        }
    }

    #[test]
    fn test_empty_key_reads_as_absent() {
        let wire = proto::LinkOptions {
            key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(link_options_from_wire(wire).unwrap().key, None);

        let wire = proto::LinkOptions {
            key: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            link_options_from_wire(wire),
            Err(MappingError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_coordinates_truncate_to_single_precision() {
        let node = Node::new(NodeType::Default).at(0.1, 123.456_789_012);
        let back = node_from_wire(node_to_wire(&node)).unwrap();

        let position = back.position.unwrap();
        assert_eq!(position.x, Some(f64::from(0.1_f32)));
        assert_eq!(position.y, Some(f64::from(123.456_789_012_f64 as f32)));
        assert_ne!(position.x, Some(0.1));
    }

    #[test]
    fn test_node_round_trip() {
        let mut node = Node::new(NodeType::Emane)
            .with_id(4)
            .with_name("n4")
            .with_model("mdr")
            .at(150.0, 250.5);
        node.emane = Some("emane_rfpipe".to_string());
        node.icon = Some("router.png".to_string());
        node.services.insert("zebra".to_string());
        node.services.insert("OSPFv3MDR".to_string());

        assert_eq!(node_from_wire(node_to_wire(&node)).unwrap(), node);
    }

    #[test]
    fn test_wire_node_keeps_missing_position() {
        let wire = proto::Node {
            id: Some(3),
            r#type: proto::NodeType::Switch as i32,
            position: None,
            ..Default::default()
        };
        let node = node_from_wire(wire.clone()).unwrap();
        assert_eq!(node.position, None);
        assert_eq!(node_to_wire(&node), wire);

        let wire = proto::Node {
            position: Some(proto::Position {
                x: Some(40.0),
                y: None,
                ..Default::default()
            }),
            ..wire
        };
        assert_eq!(node_to_wire(&node_from_wire(wire.clone()).unwrap()), wire);
    }

    #[test]
    fn test_default_link_options_round_trip() {
        let options = LinkOptions::default();
        let back = link_options_from_wire(link_options_to_wire(&options)).unwrap();
        assert_eq!(back, options);
        assert_eq!(back.unidirectional, 0);
    }

    #[test]
    fn test_config_groups_round_trip() {
        let groups = vec![ConfigGroup {
            name: "Basic".to_string(),
            options: vec![ConfigOption {
                option_type: 10,
                label: "Range".to_string(),
                name: "range".to_string(),
                value: "275".to_string(),
                select: vec!["100".to_string(), "275".to_string()],
            }],
        }];

        let wire: Vec<proto::ConfigGroup> = groups.iter().map(config_group_to_wire).collect();
        assert_eq!(wire[0].options[0].r#type, 10);
        assert_eq!(config_groups_from_wire(wire.clone()), groups);
        assert_eq!(
            config_groups_from_wire(wire.clone())
                .iter()
                .map(config_group_to_wire)
                .collect::<Vec<_>>(),
            wire
        );
    }

    #[test]
    fn test_absent_node_fields_are_unset() {
        let wire = node_to_wire(&Node::new(NodeType::Switch));
        assert_eq!(wire.id, None);
        assert_eq!(wire.name, None);
        assert_eq!(wire.emane, None);
        assert_eq!(wire.icon, None);
        assert_eq!(wire.r#type, 4);
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let wire = proto::Node {
            r#type: 2,
            ..Default::default()
        };
        assert_eq!(
            node_from_wire(wire),
            Err(MappingError::UnknownEnum {
                kind: "node type",
                value: 2
            })
        );
    }

    #[test]
    fn test_ip6_mask_conversion() {
        assert_eq!(ip6_mask_to_wire("64").unwrap(), 64);
        assert_eq!(ip6_mask_from_wire(128), "128");
        assert!(matches!(
            ip6_mask_to_wire("/64"),
            Err(MappingError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_interface_round_trip() {
        let interface = Interface {
            id: Some(0),
            name: Some("eth0".to_string()),
            mac: Some("00:00:00:aa:00:01".to_string()),
            ip4: Some("10.0.0.1".to_string()),
            ip4_mask: Some(24),
            ip6: Some("2001::1".to_string()),
            ip6_mask: Some("64".to_string()),
        };
        let wire = interface_to_wire(&interface).unwrap();
        assert_eq!(wire.ip6mask, Some(64));
        assert_eq!(interface_from_wire(wire), interface);
    }

    #[test]
    fn test_wire_link_round_trip() {
        let wire = proto::Link {
            node_one_id: Some(1),
            node_two_id: None,
            r#type: proto::LinkType::Wireless as i32,
            interface_one: Some(proto::Interface {
                id: Some(1),
                ip4: Some("10.0.0.2".to_string()),
                ip4mask: Some(24),
                ..Default::default()
            }),
            interface_two: None,
            options: Some(proto::LinkOptions {
                delay: Some(20.0),
                unidirectional: true,
                ..Default::default()
            }),
        };

        let back = link_to_wire(&link_from_wire(wire.clone()).unwrap()).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn test_session_snapshot_skips_peer_to_peer_nodes() {
        let session = proto::Session {
            id: 2,
            state: proto::SessionState::Runtime as i32,
            nodes: vec![
                proto::Node {
                    id: Some(1),
                    r#type: proto::NodeType::Default as i32,
                    ..Default::default()
                },
                proto::Node {
                    id: Some(2),
                    r#type: proto::NodeType::PeerToPeer as i32,
                    ..Default::default()
                },
            ],
            links: vec![],
        };

        let session = session_from_wire(session).unwrap();
        assert_eq!(session.state, SessionState::Runtime);
        assert_eq!(session.nodes.len(), 1);
        assert_eq!(session.nodes[0].id, Some(1));
    }

    #[test]
    fn test_hook_round_trip_and_utf8() {
        let hook = Hook {
            state: SessionState::Runtime,
            file: "runtime_hook.sh".to_string(),
            data: "#!/bin/sh\necho up\n".to_string(),
        };
        assert_eq!(hook_from_wire(hook_to_wire(&hook)).unwrap(), hook);

        let broken = proto::Hook {
            state: proto::SessionState::Runtime as i32,
            file: "bad.sh".to_string(),
            data: vec![0xff, 0xfe],
        };
        assert!(matches!(
            hook_from_wire(broken),
            Err(MappingError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_location_keeps_absent_fields_absent() {
        let config = LocationConfig {
            scale: Some(150.0),
            position: CanvasPosition {
                x: Some(0.0),
                y: Some(0.0),
                z: None,
            },
            location: GeoLocation {
                latitude: Some(47.5791667),
                longitude: Some(-122.132322),
                altitude: Some(2.0),
            },
        };

        let (position, scale) = location_to_wire(&config);
        assert_eq!(position.z, None);
        assert_eq!(scale, Some(150.0));

        let back = location_from_wire(Some(position), scale);
        assert_eq!(back.position.z, None);
        assert_eq!(back.location.latitude, Some(f64::from(47.5791667_f32)));
    }

    #[test]
    fn test_service_data_round_trip() {
        let service = ServiceData {
            executables: vec!["zebra".to_string()],
            dependencies: vec![],
            dirs: vec!["/usr/local/etc/quagga".to_string()],
            configs: vec!["quaggaboot.sh".to_string()],
            startup: vec!["sh quaggaboot.sh zebra".to_string()],
            validate: vec!["pidof zebra".to_string()],
            shutdown: vec!["killall zebra".to_string()],
            meta: String::new(),
            validation_mode: ValidationMode::NonBlocking,
            validation_timer: "5".to_string(),
        };

        let wire = service_data_to_wire(&service).unwrap();
        assert_eq!(wire.validation_timer, 5);
        assert_eq!(service_data_from_wire(wire).unwrap(), service);
    }

    #[test]
    fn test_service_catalogue_grouping() {
        let services = vec![
            proto::Service {
                group: "Quagga".to_string(),
                name: "zebra".to_string(),
            },
            proto::Service {
                group: "Utility".to_string(),
                name: "DefaultRoute".to_string(),
            },
            proto::Service {
                group: "Quagga".to_string(),
                name: "OSPFv2".to_string(),
            },
        ];

        let groups = service_groups_from_wire(services);
        assert_eq!(groups["Quagga"], vec!["zebra", "OSPFv2"]);
        assert_eq!(groups["Utility"], vec!["DefaultRoute"]);
    }
}
