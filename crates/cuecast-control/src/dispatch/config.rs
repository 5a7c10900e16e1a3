//! Dispatcher configuration

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use super::endpoint::DEFAULT_PORT;

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Port used for endpoints given without one
    #[serde(default = "default_port")]
    pub default_port: u16,
    /// Upper bound for one endpoint's resolve + send, in milliseconds
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
    /// Local address for IPv4 sends
    #[serde(default = "default_bind_v4")]
    pub bind_v4: SocketAddr,
    /// Local address for IPv6 sends
    #[serde(default = "default_bind_v6")]
    pub bind_v6: SocketAddr,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_send_timeout_ms() -> u64 {
    500
}

fn default_bind_v4() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
}

fn default_bind_v6() -> SocketAddr {
    SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            default_port: default_port(),
            send_timeout_ms: default_send_timeout_ms(),
            bind_v4: default_bind_v4(),
            bind_v6: default_bind_v6(),
        }
    }
}

impl DispatcherConfig {
    /// Per-endpoint send timeout
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Set the per-endpoint send timeout
    pub fn with_send_timeout_ms(mut self, millis: u64) -> Self {
        self.send_timeout_ms = millis;
        self
    }

    /// Set the port used for endpoints given without one
    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    /// Local bind address matching the destination's family
    pub fn bind_for(&self, destination: &SocketAddr) -> SocketAddr {
        if destination.is_ipv4() {
            self.bind_v4
        } else {
            self.bind_v6
        }
    }
}
