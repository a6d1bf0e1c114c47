/*!
 * Configuration types for netemu
 */

use netemu_connect::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Client configuration, usually read from `netemu.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host name or IP address of the CORE daemon
    #[serde(default = "default_address")]
    pub address: String,

    /// gRPC port of the CORE daemon
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Write JSON logs to this file instead of stdout
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Verbose output (forces debug logging)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            log_level: LogLevel::default(),
            log_file: None,
            verbose: false,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    #[default]
    Warn,

    /// Info, warnings, and errors
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn default_address() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides; flags that were not given keep the file value
    pub fn with_overrides(
        mut self,
        address: Option<String>,
        port: Option<u16>,
        verbose: bool,
    ) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self.verbose |= verbose;
        self
    }
}
