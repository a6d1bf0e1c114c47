//! Domain model of a CORE session
//!
//! These records are what callers build and inspect. They never carry wire
//! types; the [`mapper`](crate::mapper) owns every conversion. Optional
//! fields are `Option` so that "not configured" stays distinct from zero.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a session, as last acknowledged by the daemon
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    #[default]
    Undefined,
    Definition,
    Configuration,
    Instantiation,
    Runtime,
    Datacollect,
    Shutdown,
}

impl SessionState {
    pub const ALL: [SessionState; 7] = [
        SessionState::Undefined,
        SessionState::Definition,
        SessionState::Configuration,
        SessionState::Instantiation,
        SessionState::Runtime,
        SessionState::Datacollect,
        SessionState::Shutdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Undefined => "UNDEFINED",
            SessionState::Definition => "DEFINITION",
            SessionState::Configuration => "CONFIGURATION",
            SessionState::Instantiation => "INSTANTIATION",
            SessionState::Runtime => "RUNTIME",
            SessionState::Datacollect => "DATACOLLECT",
            SessionState::Shutdown => "SHUTDOWN",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown session state: {}", s))
    }
}

/// Kind of emulated node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    #[default]
    Default,
    Physical,
    Tbd,
    Switch,
    Hub,
    WirelessLan,
    Rj45,
    Tunnel,
    Ktunnel,
    Emane,
    TapBridge,
    PeerToPeer,
    ControlNet,
    EmaneNet,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Default => "default",
            NodeType::Physical => "physical",
            NodeType::Tbd => "tbd",
            NodeType::Switch => "switch",
            NodeType::Hub => "hub",
            NodeType::WirelessLan => "wireless_lan",
            NodeType::Rj45 => "rj45",
            NodeType::Tunnel => "tunnel",
            NodeType::Ktunnel => "ktunnel",
            NodeType::Emane => "emane",
            NodeType::TapBridge => "tap_bridge",
            NodeType::PeerToPeer => "peer_to_peer",
            NodeType::ControlNet => "control_net",
            NodeType::EmaneNet => "emane_net",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Wireless,
    #[default]
    Wired,
}

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Client-supplied, or assigned by the daemon on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub services: BTreeSet<String>,
    /// EMANE model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emane: Option<String>,
    /// Platform model, e.g. `router` or `PC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Node {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn is_wlan(&self) -> bool {
        self.node_type == NodeType::WirelessLan
    }
}

/// One endpoint of a link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip4_mask: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    /// Prefix length kept as text; an integer on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip6_mask: Option<String>,
}

/// Link shaping parameters
///
/// Every field left `None` is omitted from the wire, which tells the daemon
/// "not configured" rather than "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
    /// Duplication rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dup: Option<f64>,
    /// Loss rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mburst: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opaque: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<i32>,
    /// Asymmetric when exactly 1; always sent
    #[serde(default)]
    pub unidirectional: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_one: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_two: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_one: Option<Interface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_two: Option<Interface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LinkOptions>,
    #[serde(default, rename = "type")]
    pub link_type: LinkType,
}

impl Link {
    /// Wired link between two nodes, interfaces left to the daemon
    pub fn between(node_one: i32, node_two: i32) -> Self {
        Self {
            node_one: Some(node_one),
            node_two: Some(node_two),
            ..Default::default()
        }
    }
}

/// Script the daemon runs when the session reaches `state`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub state: SessionState,
    pub file: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i32,
    pub state: SessionState,
    pub node_count: i32,
}

/// Snapshot of a remote session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i32,
    pub state: SessionState,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// The session every operation targets, with its last acknowledged state
///
/// Written only after the daemon acknowledged a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub id: i32,
    pub state: SessionState,
}

impl SessionContext {
    pub fn new(id: i32, state: SessionState) -> Self {
        Self { id, state }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Runtime
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Presentation type tag, opaque to the client
    pub option_type: i32,
    pub label: String,
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub select: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGroup {
    pub name: String,
    pub options: Vec<ConfigOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WlanConfig {
    pub bandwidth: Option<String>,
    pub delay: Option<String>,
    pub error: Option<String>,
    pub jitter: Option<String>,
    pub range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityConfig {
    pub file: Option<String>,
    pub refresh_ms: Option<i64>,
    pub autostart: Option<String>,
    #[serde(rename = "loop")]
    pub repeat: Option<String>,
    pub map: Option<String>,
    pub script_pause: Option<String>,
    pub script_start: Option<String>,
    pub script_stop: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPosition {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

/// Session reference point tying canvas coordinates to geography
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub scale: Option<f64>,
    pub position: CanvasPosition,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Blocking,
    NonBlocking,
    Timer,
}

/// Per-node customization of a service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceData {
    pub executables: Vec<String>,
    pub dependencies: Vec<String>,
    pub dirs: Vec<String>,
    pub configs: Vec<String>,
    pub startup: Vec<String>,
    pub validate: Vec<String>,
    pub shutdown: Vec<String>,
    pub meta: String,
    pub validation_mode: ValidationMode,
    /// Seconds, kept as text; an integer on the wire
    pub validation_timer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFile {
    pub name: String,
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
    Validate,
}

impl FromStr for ServiceAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(ServiceAction::Start),
            "stop" => Ok(ServiceAction::Stop),
            "restart" => Ok(ServiceAction::Restart),
            "validate" => Ok(ServiceAction::Validate),
            other => Err(format!("unknown service action: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityAction {
    Start,
    Pause,
    Stop,
}

impl FromStr for MobilityAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(MobilityAction::Start),
            "pause" => Ok(MobilityAction::Pause),
            "stop" => Ok(MobilityAction::Stop),
            other => Err(format!("unknown mobility action: {}", other)),
        }
    }
}

/// Service group name to the services it contains
pub type ServiceGroups = BTreeMap<String, Vec<String>>;

/// Node model to the services enabled by default on it
pub type ServiceDefaults = BTreeMap<String, BTreeSet<String>>;
