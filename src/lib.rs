/*!
 * netemu - command-line control of CORE network emulation sessions
 *
 * The session protocol itself lives in `netemu-connect`; this crate adds
 * what the binary needs around it:
 * - client configuration files
 * - logging initialization
 * - topology files (TOML or JSON)
 * - the legacy service definition updater
 * - table output
 */

pub mod cli_style;
pub mod config;
pub mod error;
pub mod logging;
pub mod service_update;
pub mod session;
pub mod topology;

// Re-export commonly used types
pub use config::{ClientConfig, LogLevel};
pub use error::{NetemuError, Result};
pub use topology::Topology;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
