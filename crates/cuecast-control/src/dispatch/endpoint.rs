//! Remote receivers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{error::ControlError, Result};

/// Port the receivers listen on for OSC
pub const DEFAULT_PORT: u16 = 53000;

/// One remote receiver: host name or IP literal plus UDP port
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Create an endpoint on [`DEFAULT_PORT`]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Parse `host`, `host:port`, `[v6]:port` or a bare IPv6 literal
    ///
    /// Input without a port gets `default_port`.
    pub fn parse_with_default(s: &str, default_port: u16) -> Result<Self> {
        let s = s.trim();
        let (host, port) = if let Some(rest) = s.strip_prefix('[') {
            let (host, tail) = rest.split_once(']').ok_or_else(|| {
                ControlError::InvalidEndpoint(format!("Unclosed '[' in {}", s))
            })?;
            match tail {
                "" => (host, None),
                _ => match tail.strip_prefix(':') {
                    Some(port) => (host, Some(port)),
                    None => {
                        return Err(ControlError::InvalidEndpoint(format!(
                            "Unexpected text after ']' in {}",
                            s
                        )))
                    }
                },
            }
        } else if s.matches(':').count() == 1 {
            let (host, port) = s.split_once(':').unwrap_or((s, ""));
            (host, Some(port))
        } else {
            // No colon, or a bare IPv6 literal
            (s, None)
        };

        if host.is_empty() || host.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ControlError::InvalidEndpoint(format!(
                "Invalid host in {:?}",
                s
            )));
        }

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| ControlError::InvalidEndpoint(format!("Invalid port in {}", s)))?,
            None => default_port,
        };

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl FromStr for Endpoint {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_default(s, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
