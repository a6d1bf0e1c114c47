//! Messages and enumerations of the `core` protobuf package.
//!
//! Kept in the shape `prost-build` emits so the schema can be regenerated
//! from `core.proto` without touching callers. Scalars that the client must
//! be able to leave unset are declared proto3 `optional`, which makes
//! absence observable on the wire instead of collapsing into zero.

use std::collections::BTreeMap;

// ═══════════════════════════════════════════════════════════════════════════
// Enumerations
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SessionState {
    None = 0,
    Definition = 1,
    Configuration = 2,
    Instantiation = 3,
    Runtime = 4,
    Datacollect = 5,
    Shutdown = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NodeType {
    Default = 0,
    Physical = 1,
    Tbd = 3,
    Switch = 4,
    Hub = 5,
    WirelessLan = 6,
    Rj45 = 7,
    Tunnel = 8,
    Ktunnel = 9,
    Emane = 10,
    TapBridge = 11,
    PeerToPeer = 12,
    ControlNet = 13,
    EmaneNet = 14,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LinkType {
    Wireless = 0,
    Wired = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MobilityAction {
    Start = 0,
    Pause = 1,
    Stop = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ServiceAction {
    Start = 0,
    Stop = 1,
    Restart = 2,
    Validate = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ServiceValidationMode {
    Blocking = 0,
    NonBlocking = 1,
    Timer = 2,
}

// ═══════════════════════════════════════════════════════════════════════════
// Shared records
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Position {
    #[prost(float, optional, tag = "1")]
    pub x: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "2")]
    pub y: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub z: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub lat: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub lon: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "6")]
    pub alt: ::core::option::Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Node {
    #[prost(int32, optional, tag = "1")]
    pub id: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(enumeration = "NodeType", tag = "3")]
    pub r#type: i32,
    #[prost(string, optional, tag = "4")]
    pub model: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub position: ::core::option::Option<Position>,
    #[prost(string, repeated, tag = "6")]
    pub services: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub emane: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "8")]
    pub icon: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Interface {
    #[prost(int32, optional, tag = "1")]
    pub id: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub mac: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "4")]
    pub ip4: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "5")]
    pub ip4mask: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "6")]
    pub ip6: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "7")]
    pub ip6mask: ::core::option::Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinkOptions {
    #[prost(string, optional, tag = "1")]
    pub opaque: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(float, optional, tag = "2")]
    pub jitter: ::core::option::Option<f32>,
    #[prost(string, optional, tag = "3")]
    pub key: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(float, optional, tag = "4")]
    pub mburst: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub mer: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "6")]
    pub per: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "7")]
    pub bandwidth: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "8")]
    pub burst: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "9")]
    pub delay: ::core::option::Option<f32>,
    #[prost(float, optional, tag = "10")]
    pub dup: ::core::option::Option<f32>,
    #[prost(bool, tag = "11")]
    pub unidirectional: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Link {
    #[prost(int32, optional, tag = "1")]
    pub node_one_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub node_two_id: ::core::option::Option<i32>,
    #[prost(enumeration = "LinkType", tag = "3")]
    pub r#type: i32,
    #[prost(message, optional, tag = "4")]
    pub interface_one: ::core::option::Option<Interface>,
    #[prost(message, optional, tag = "5")]
    pub interface_two: ::core::option::Option<Interface>,
    #[prost(message, optional, tag = "6")]
    pub options: ::core::option::Option<LinkOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Session {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(enumeration = "SessionState", tag = "2")]
    pub state: i32,
    #[prost(message, repeated, tag = "3")]
    pub nodes: ::prost::alloc::vec::Vec<Node>,
    #[prost(message, repeated, tag = "4")]
    pub links: ::prost::alloc::vec::Vec<Link>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SessionSummary {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(enumeration = "SessionState", tag = "2")]
    pub state: i32,
    #[prost(int32, tag = "3")]
    pub nodes: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hook {
    #[prost(enumeration = "SessionState", tag = "1")]
    pub state: i32,
    #[prost(string, tag = "2")]
    pub file: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigOption {
    #[prost(string, tag = "1")]
    pub label: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub value: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub r#type: i32,
    #[prost(string, repeated, tag = "5")]
    pub select: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigGroup {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub options: ::prost::alloc::vec::Vec<ConfigOption>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Service {
    #[prost(string, tag = "1")]
    pub group: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDefaults {
    #[prost(string, tag = "1")]
    pub node_type: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub services: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeServiceData {
    #[prost(string, repeated, tag = "1")]
    pub executables: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "2")]
    pub dependencies: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "3")]
    pub dirs: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "4")]
    pub configs: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub startup: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "6")]
    pub validate: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "ServiceValidationMode", tag = "7")]
    pub validation_mode: i32,
    #[prost(int32, tag = "8")]
    pub validation_timer: i32,
    #[prost(string, repeated, tag = "9")]
    pub shutdown: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "10")]
    pub meta: ::prost::alloc::string::String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Session lifecycle
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSessionRequest {
    #[prost(int32, optional, tag = "1")]
    pub session_id: ::core::option::Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSessionResponse {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(enumeration = "SessionState", tag = "2")]
    pub state: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSessionRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSessionResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetSessionsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub sessions: ::prost::alloc::vec::Vec<SessionSummary>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionResponse {
    #[prost(message, optional, tag = "1")]
    pub session: ::core::option::Option<Session>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionStateRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(enumeration = "SessionState", tag = "2")]
    pub state: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionStateResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionOptionsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionOptionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<ConfigGroup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionOptionsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(btree_map = "string, string", tag = "2")]
    pub config: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionOptionsResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionLocationRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionLocationResponse {
    #[prost(message, optional, tag = "1")]
    pub position: ::core::option::Option<Position>,
    #[prost(float, optional, tag = "2")]
    pub scale: ::core::option::Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionLocationRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(message, optional, tag = "2")]
    pub position: ::core::option::Option<Position>,
    #[prost(float, optional, tag = "3")]
    pub scale: ::core::option::Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSessionLocationResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveXmlRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveXmlResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenXmlRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenXmlResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
    #[prost(int32, tag = "2")]
    pub session_id: i32,
}

// ═══════════════════════════════════════════════════════════════════════════
// Topology
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddNodeRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(message, optional, tag = "2")]
    pub node: ::core::option::Option<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddNodeResponse {
    #[prost(int32, tag = "1")]
    pub node_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EditNodeRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(message, optional, tag = "3")]
    pub position: ::core::option::Option<Position>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EditNodeResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNodeRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNodeResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddLinkRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(message, optional, tag = "2")]
    pub link: ::core::option::Option<Link>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddLinkResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EditLinkRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, optional, tag = "2")]
    pub node_one_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub node_two_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub interface_one_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub interface_two_id: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "6")]
    pub options: ::core::option::Option<LinkOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EditLinkResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetHooksRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetHooksResponse {
    #[prost(message, repeated, tag = "1")]
    pub hooks: ::prost::alloc::vec::Vec<Hook>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHookRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(message, optional, tag = "2")]
    pub hook: ::core::option::Option<Hook>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHookResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Mobility, WLAN and EMANE configuration
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMobilityConfigsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMobilityConfigsResponse {
    #[prost(btree_map = "int32, message", tag = "1")]
    pub configs: BTreeMap<i32, get_mobility_configs_response::MobilityConfig>,
}

/// Nested message and enum types in `GetMobilityConfigsResponse`.
pub mod get_mobility_configs_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MobilityConfig {
        #[prost(message, repeated, tag = "1")]
        pub groups: ::prost::alloc::vec::Vec<super::ConfigGroup>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMobilityConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMobilityConfigResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<ConfigGroup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetMobilityConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(btree_map = "string, string", tag = "3")]
    pub config: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetMobilityConfigResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MobilityActionRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(enumeration = "MobilityAction", tag = "3")]
    pub action: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MobilityActionResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWlanConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWlanConfigResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<ConfigGroup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetWlanConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(btree_map = "string, string", tag = "3")]
    pub config: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetWlanConfigResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneConfigResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<ConfigGroup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEmaneConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(btree_map = "string, string", tag = "2")]
    pub config: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEmaneConfigResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneModelsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneModelsResponse {
    #[prost(string, repeated, tag = "1")]
    pub models: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneModelConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub model: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEmaneModelConfigResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<ConfigGroup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEmaneModelConfigRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub model: ::prost::alloc::string::String,
    #[prost(btree_map = "string, string", tag = "4")]
    pub config: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEmaneModelConfigResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Node services
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetServicesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServicesResponse {
    #[prost(message, repeated, tag = "1")]
    pub services: ::prost::alloc::vec::Vec<Service>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceDefaultsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceDefaultsResponse {
    #[prost(message, repeated, tag = "1")]
    pub defaults: ::prost::alloc::vec::Vec<ServiceDefaults>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetServiceDefaultsRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(message, repeated, tag = "2")]
    pub defaults: ::prost::alloc::vec::Vec<ServiceDefaults>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetServiceDefaultsResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNodeServiceRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNodeServiceResponse {
    #[prost(message, optional, tag = "1")]
    pub service: ::core::option::Option<NodeServiceData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeServiceRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub startup: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub validate: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "6")]
    pub shutdown: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeServiceResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNodeServiceFileRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub file: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNodeServiceFileResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeServiceFileRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub file: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "5")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeServiceFileResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceActionRequest {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub node_id: i32,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(enumeration = "ServiceAction", tag = "4")]
    pub action: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceActionResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}
