//! netemu Connect: client-side control of a CORE network emulator daemon
//!
//! This crate turns the raw `CoreApi` into domain-level session control:
//! typed topology records, the mapping to and from the wire schema, the
//! configuration codec and the start/stop protocol.
//!
//! # Architecture
//!
//! - **mapper**: domain records to wire messages and back
//! - **codec**: typed configuration through string-keyed option maps
//! - **CoreConnection**: one lazy gRPC channel to one daemon
//! - **GrpcCoreApi**: implements `CoreApi` over that channel
//! - **SessionClient**: one operation per remote capability
//! - **TopologyOrchestrator**: the ordered session start/stop protocol
//!
//! # Example
//!
//! ```rust,no_run
//! use netemu_connect::model::{Link, Node, NodeType};
//! use netemu_connect::{CoreConnection, TopologyOrchestrator};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let connection = CoreConnection::connect("localhost", 50051)?;
//!     let client = connection.client();
//!     let mut ctx = client.create_session().await?;
//!
//!     let nodes = vec![
//!         Node::new(NodeType::Default).with_id(1).with_model("PC"),
//!         Node::new(NodeType::Default).with_id(2).with_model("PC"),
//!     ];
//!     let links = vec![Link::between(1, 2)];
//!
//!     let started = TopologyOrchestrator::new(&client)
//!         .start(&mut ctx, &nodes, &links, &[])
//!         .await?;
//!     println!("started: {}", started);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod codec;
pub mod connection;
pub mod error;
pub mod mapper;
pub mod model;
pub mod orchestrator;
pub mod remote;

pub use client::SessionClient;
pub use connection::{CoreConnection, DEFAULT_PORT};
pub use error::ConnectError;
pub use mapper::MappingError;
pub use model::SessionContext;
pub use orchestrator::TopologyOrchestrator;
pub use remote::GrpcCoreApi;
