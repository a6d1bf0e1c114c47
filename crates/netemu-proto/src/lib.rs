/// gRPC wire schema for the CORE emulator API.
///
/// This crate provides the protocol buffer messages and the client stub
/// used to talk to the `core.CoreApi` service of a CORE daemon.
pub mod client;
pub mod schema;

// Re-export commonly used types for convenience
pub use client::core_api_client;
pub use schema::*;
