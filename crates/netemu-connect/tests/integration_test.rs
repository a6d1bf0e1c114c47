//! Integration tests for netemu-connect
//!
//! These tests drive the SessionClient and TopologyOrchestrator against the
//! in-memory RecordingApi and check the exact call sequence.
//! The live daemon test at the bottom requires a running core-daemon.

use netemu_connect::model::{
    Hook, Interface, Link, LinkOptions, Node, NodeType, Position, SessionContext, SessionState,
};
use netemu_connect::{ConnectError, SessionClient, TopologyOrchestrator};
use netemu_interface::testing::{Method, RecordingApi};
use netemu_proto as proto;

fn definition_ctx() -> SessionContext {
    SessionContext::new(1, SessionState::Definition)
}

fn pc(id: i32) -> Node {
    Node::new(NodeType::Default)
        .with_id(id)
        .with_name(format!("n{}", id))
        .with_model("PC")
        .at(100.0 * id as f64, 100.0)
}

fn hook(file: &str) -> Hook {
    Hook {
        state: SessionState::Runtime,
        file: file.to_string(),
        data: "#!/bin/sh\n".to_string(),
    }
}

fn requested_states(api: &RecordingApi) -> Vec<i32> {
    api.calls_to(Method::SetSessionState)
        .iter()
        .map(|call| call.request::<proto::SetSessionStateRequest>().state)
        .collect()
}

#[tokio::test]
async fn test_two_nodes_one_link_scenario() {
    let api = RecordingApi::new();
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let started = TopologyOrchestrator::new(&client)
        .start(&mut ctx, &[pc(1), pc(2)], &[Link::between(1, 2)], &[])
        .await
        .unwrap();

    assert!(started);
    assert_eq!(
        api.methods(),
        vec![
            Method::SetSessionState,
            Method::SetSessionState,
            Method::AddNode,
            Method::AddNode,
            Method::AddLink,
            Method::SetSessionState,
        ]
    );
    assert_eq!(
        requested_states(&api),
        vec![
            proto::SessionState::Definition as i32,
            proto::SessionState::Configuration as i32,
            proto::SessionState::Instantiation as i32,
        ]
    );
    assert_eq!(ctx.state, SessionState::Instantiation);
}

#[tokio::test]
async fn test_hooks_then_nodes_then_links_then_instantiation() {
    let api = RecordingApi::new();
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let nodes: Vec<Node> = (1..=4).map(pc).collect();
    let links = vec![Link::between(1, 2), Link::between(2, 3), Link::between(3, 4)];
    let hooks = vec![hook("a.sh"), hook("b.sh")];

    assert!(TopologyOrchestrator::new(&client)
        .start(&mut ctx, &nodes, &links, &hooks)
        .await
        .unwrap());

    let methods = api.methods();
    let last = |m: Method| methods.iter().rposition(|x| *x == m).unwrap();
    let first = |m: Method| methods.iter().position(|x| *x == m).unwrap();

    assert!(last(Method::AddHook) < first(Method::AddNode));
    assert!(last(Method::AddNode) < first(Method::AddLink));
    assert_eq!(last(Method::SetSessionState), methods.len() - 1);
    assert!(last(Method::AddLink) < last(Method::SetSessionState));
    assert_eq!(api.count(Method::AddHook), 2);
    assert_eq!(api.count(Method::AddNode), 4);
    assert_eq!(api.count(Method::AddLink), 3);

    // Caller order is preserved
    let hook_files: Vec<String> = api
        .calls_to(Method::AddHook)
        .iter()
        .map(|c| c.request::<proto::AddHookRequest>().hook.unwrap().file)
        .collect();
    assert_eq!(hook_files, vec!["a.sh", "b.sh"]);

    let node_ids: Vec<Option<i32>> = api
        .calls_to(Method::AddNode)
        .iter()
        .map(|c| c.request::<proto::AddNodeRequest>().node.unwrap().id)
        .collect();
    assert_eq!(node_ids, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[tokio::test]
async fn test_third_node_failure_short_circuits() {
    let api = RecordingApi::new();
    api.fail_on(Method::AddNode, 3);
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let nodes: Vec<Node> = (1..=5).map(pc).collect();
    let links = vec![Link::between(1, 2)];

    let err = TopologyOrchestrator::new(&client)
        .start(&mut ctx, &nodes, &links, &[])
        .await
        .unwrap_err();

    assert!(err.is_transport_fault());
    // Two creations went through, the third was attempted and failed
    assert_eq!(api.count(Method::AddNode), 3);
    assert_eq!(api.count(Method::AddLink), 0);
    assert_eq!(requested_states(&api).len(), 2);
    assert_eq!(ctx.state, SessionState::Configuration);
}

#[tokio::test]
async fn test_rejected_link_returns_false_without_instantiation() {
    let api = RecordingApi::new();
    api.reject_on(Method::AddLink, 1);
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let started = TopologyOrchestrator::new(&client)
        .start(
            &mut ctx,
            &[pc(1), pc(2), pc(3)],
            &[Link::between(1, 2), Link::between(2, 3)],
            &[],
        )
        .await
        .unwrap();

    assert!(!started);
    assert_eq!(api.count(Method::AddLink), 1);
    assert_eq!(requested_states(&api).len(), 2);
}

#[tokio::test]
async fn test_rejected_hook_stops_before_nodes() {
    let api = RecordingApi::new();
    api.reject_on(Method::AddHook, 1);
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let started = TopologyOrchestrator::new(&client)
        .start(&mut ctx, &[pc(1)], &[], &[hook("a.sh"), hook("b.sh")])
        .await
        .unwrap();

    assert!(!started);
    assert_eq!(api.count(Method::AddHook), 1);
    assert_eq!(api.count(Method::AddNode), 0);
}

#[tokio::test]
async fn test_wlan_read_then_write_before_creation() {
    let api = RecordingApi::new();
    api.respond_with(
        Method::GetWlanConfig,
        proto::GetWlanConfigResponse {
            groups: vec![proto::ConfigGroup {
                name: "Basic".to_string(),
                options: vec![
                    proto::ConfigOption {
                        name: "range".to_string(),
                        value: "275".to_string(),
                        ..Default::default()
                    },
                    proto::ConfigOption {
                        name: "bandwidth".to_string(),
                        value: "54000000".to_string(),
                        ..Default::default()
                    },
                ],
            }],
        },
    );
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let wlan = Node::new(NodeType::WirelessLan).with_id(3).with_name("wlan3");
    assert!(TopologyOrchestrator::new(&client)
        .start(&mut ctx, &[pc(1), wlan, pc(2)], &[], &[])
        .await
        .unwrap());

    assert_eq!(
        api.methods(),
        vec![
            Method::SetSessionState,
            Method::SetSessionState,
            Method::AddNode,
            Method::GetWlanConfig,
            Method::SetWlanConfig,
            Method::AddNode,
            Method::AddNode,
            Method::SetSessionState,
        ]
    );

    let read: proto::GetWlanConfigRequest = api.calls_to(Method::GetWlanConfig)[0].request();
    let write: proto::SetWlanConfigRequest = api.calls_to(Method::SetWlanConfig)[0].request();
    assert_eq!(read.node_id, 3);
    assert_eq!(write.node_id, 3);
    // Written back unchanged
    assert_eq!(write.config.len(), 2);
    assert_eq!(write.config["range"], "275");
    assert_eq!(write.config["bandwidth"], "54000000");

    let created: proto::AddNodeRequest = api.calls_to(Method::AddNode)[1].request();
    assert_eq!(created.node.unwrap().id, Some(3));
}

#[tokio::test]
async fn test_rejected_wlan_write_aborts() {
    let api = RecordingApi::new();
    api.reject_on(Method::SetWlanConfig, 1);
    let client = SessionClient::new(api.clone());
    let mut ctx = definition_ctx();

    let wlan = Node::new(NodeType::WirelessLan).with_id(1);
    let started = TopologyOrchestrator::new(&client)
        .start(&mut ctx, &[wlan], &[], &[])
        .await
        .unwrap();

    assert!(!started);
    assert_eq!(api.count(Method::AddNode), 0);
}

#[tokio::test]
async fn test_absent_link_fields_never_reach_the_wire() {
    let api = RecordingApi::new();
    let client = SessionClient::new(api.clone());

    let link = Link {
        node_one: Some(1),
        node_two: None,
        interface_one: Some(Interface {
            id: Some(0),
            ip4: Some("10.0.0.1".to_string()),
            ip4_mask: Some(24),
            ..Default::default()
        }),
        interface_two: None,
        options: Some(LinkOptions {
            bandwidth: Some(0.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    client.create_link(&definition_ctx(), &link).await.unwrap();

    let wire = api.calls()[0]
        .request::<proto::AddLinkRequest>()
        .link
        .unwrap();
    let options = wire.options.unwrap();
    let interface = wire.interface_one.unwrap();

    assert_eq!(wire.node_two_id, None);
    assert!(wire.interface_two.is_none());
    assert_eq!(options.bandwidth, Some(0.0));
    assert_eq!(options.delay, None);
    assert_eq!(options.key, None);
    assert_eq!(interface.ip6, None);
    assert_eq!(interface.ip6mask, None);
}

#[tokio::test]
async fn test_get_session_maps_snapshot() {
    let api = RecordingApi::new();
    api.respond_with(
        Method::GetSession,
        proto::GetSessionResponse {
            session: Some(proto::Session {
                id: 4,
                state: proto::SessionState::Runtime as i32,
                nodes: vec![
                    proto::Node {
                        id: Some(1),
                        name: Some("n1".to_string()),
                        r#type: proto::NodeType::Default as i32,
                        position: Some(proto::Position {
                            x: Some(100.0),
                            y: Some(50.0),
                            ..Default::default()
                        }),
                        services: vec!["zebra".to_string(), "IPForward".to_string()],
                        ..Default::default()
                    },
                    proto::Node {
                        id: Some(7),
                        r#type: proto::NodeType::PeerToPeer as i32,
                        ..Default::default()
                    },
                ],
                links: vec![proto::Link {
                    node_one_id: Some(1),
                    node_two_id: Some(2),
                    r#type: proto::LinkType::Wired as i32,
                    options: Some(proto::LinkOptions {
                        key: Some("42".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
            }),
        },
    );
    let client = SessionClient::new(api);

    let session = client.get_session(4).await.unwrap();

    assert_eq!(session.state, SessionState::Runtime);
    assert_eq!(session.nodes.len(), 1);
    assert_eq!(session.nodes[0].position, Some(Position::new(100.0, 50.0)));
    assert!(session.nodes[0].services.contains("zebra"));
    assert_eq!(session.links[0].options.as_ref().unwrap().key, Some(42));
}

#[tokio::test]
async fn test_unknown_state_on_the_wire_is_a_mapping_error() {
    let api = RecordingApi::new();
    api.respond_with(
        Method::GetSessions,
        proto::GetSessionsResponse {
            sessions: vec![proto::SessionSummary {
                id: 1,
                state: 77,
                nodes: 0,
            }],
        },
    );
    let client = SessionClient::new(api);

    let err = client.list_sessions().await.unwrap_err();
    assert!(err.is_mapping_error());
    assert!(matches!(err, ConnectError::Mapping(_)));
}

#[tokio::test]
#[ignore]
async fn test_live_daemon_round_trip() {
    // This test requires core-daemon listening on localhost:50051

    let connection = netemu_connect::CoreConnection::connect("localhost", 50051).unwrap();
    let client = connection.client();

    let mut ctx = client.create_session().await.unwrap();
    let started = TopologyOrchestrator::new(&client)
        .start(&mut ctx, &[pc(1), pc(2)], &[Link::between(1, 2)], &[])
        .await
        .unwrap();
    assert!(started);

    let session = client.get_session(ctx.id).await.unwrap();
    assert_eq!(session.nodes.len(), 2);

    TopologyOrchestrator::new(&client)
        .stop(&mut ctx)
        .await
        .unwrap();
    client.delete_session(ctx.id).await.unwrap();
}
