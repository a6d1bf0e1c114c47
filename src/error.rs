/*!
 * Error types for netemu
 */

use netemu_connect::ConnectError;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, NetemuError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug)]
pub enum NetemuError {
    /// I/O error
    Io(io::Error),

    /// Configuration error
    Config(String),

    /// Topology or data file could not be parsed
    InvalidFile { path: PathBuf, reason: String },

    /// The daemon could not be reached or answered with an error
    Client(ConnectError),

    /// The daemon refused a request
    Rejected(String),
}

impl NetemuError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NetemuError::Config(_) | NetemuError::InvalidFile { .. } => EXIT_FATAL,
            NetemuError::Client(err) if err.is_transport_fault() => EXIT_FATAL,
            // Mapping errors and refusals leave the session usable
            _ => EXIT_PARTIAL,
        }
    }

    /// True when the daemon itself was never reached or never answered
    pub fn is_connection_error(&self) -> bool {
        match self {
            NetemuError::Client(ConnectError::Transport(_))
            | NetemuError::Client(ConnectError::InvalidEndpoint { .. }) => true,
            NetemuError::Client(err) => err.code() == Some(tonic::Code::Unavailable),
            _ => false,
        }
    }
}

impl fmt::Display for NetemuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetemuError::Io(err) => write!(f, "I/O error: {}", err),
            NetemuError::Config(msg) => write!(f, "Configuration error: {}", msg),
            NetemuError::InvalidFile { path, reason } => {
                write!(f, "Invalid file {}: {}", path.display(), reason)
            }
            NetemuError::Client(err) => write!(f, "CORE daemon error: {}", err),
            NetemuError::Rejected(what) => write!(f, "Request rejected by daemon: {}", what),
        }
    }
}

impl std::error::Error for NetemuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetemuError::Io(err) => Some(err),
            NetemuError::Client(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NetemuError {
    fn from(err: io::Error) -> Self {
        NetemuError::Io(err)
    }
}

impl From<ConnectError> for NetemuError {
    fn from(err: ConnectError) -> Self {
        NetemuError::Client(err)
    }
}
