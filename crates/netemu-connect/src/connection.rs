//! CoreConnection: the single channel to one CORE daemon

use crate::client::SessionClient;
use crate::error::ConnectError;
use crate::remote::GrpcCoreApi;
use std::net::{IpAddr, Ipv6Addr};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

/// Port the CORE daemon serves gRPC on by default
pub const DEFAULT_PORT: u16 = 50051;

/// One plaintext gRPC channel to one daemon
///
/// The channel connects lazily: building a `CoreConnection` never touches
/// the network, and an unreachable daemon shows up as a transport fault on
/// the first call. There are no retries and no pooling.
///
/// # Example
///
/// ```rust,no_run
/// use netemu_connect::CoreConnection;
///
/// # async fn example() -> Result<(), netemu_connect::ConnectError> {
/// let connection = CoreConnection::connect("localhost", 50051)?;
/// let client = connection.client();
///
/// for session in client.list_sessions().await? {
///     println!("{} {}", session.id, session.state);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CoreConnection {
    address: String,
    port: u16,
    channel: Channel,
}

impl CoreConnection {
    /// Build the channel for `address:port`
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEndpoint` if `address:port` does not form a valid URI.
    pub fn connect(address: impl Into<String>, port: u16) -> Result<Self, ConnectError> {
        let address = address.into();
        let uri = endpoint_uri(&address, port);

        debug!("Preparing channel to CORE daemon at {}", uri);

        let endpoint =
            Endpoint::from_shared(uri.clone()).map_err(|e| ConnectError::InvalidEndpoint {
                endpoint: uri.clone(),
                reason: e.to_string(),
            })?;
        let channel = endpoint.connect_lazy();

        info!("Using CORE daemon at {}", uri);

        Ok(Self {
            address,
            port,
            channel,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the daemon runs on this host
    pub fn is_local(&self) -> bool {
        is_loopback(&self.address)
    }

    /// Session client bound to this channel
    pub fn client(&self) -> SessionClient<GrpcCoreApi> {
        SessionClient::new(GrpcCoreApi::new(self.channel.clone()))
    }
}

fn endpoint_uri(address: &str, port: u16) -> String {
    if address.parse::<Ipv6Addr>().is_ok() {
        format!("http://[{}]:{}", address, port)
    } else {
        format!("http://{}:{}", address, port)
    }
}

fn is_loopback(address: &str) -> bool {
    address.eq_ignore_ascii_case("localhost")
        || address
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_names() {
        assert!(is_loopback("localhost"));
        assert!(is_loopback("127.0.0.1"));
        assert!(is_loopback("127.0.1.1"));
        assert!(is_loopback("::1"));
        assert!(!is_loopback("10.0.0.5"));
        assert!(!is_loopback("core.example.net"));
    }

    #[test]
    fn test_ipv6_addresses_are_bracketed() {
        assert_eq!(endpoint_uri("::1", 50051), "http://[::1]:50051");
        assert_eq!(endpoint_uri("localhost", 50051), "http://localhost:50051");
    }

    #[tokio::test]
    async fn test_connect_is_lazy() {
        // Nothing needs to listen for construction to succeed
        let connection = CoreConnection::connect("127.0.0.1", 9).unwrap();
        assert!(connection.is_local());
        assert_eq!(connection.port(), 9);
        assert_eq!(connection.address(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_invalid_address_fails_immediately() {
        let result = CoreConnection::connect("bad host", DEFAULT_PORT);
        assert!(matches!(
            result,
            Err(ConnectError::InvalidEndpoint { .. })
        ));
    }
}
