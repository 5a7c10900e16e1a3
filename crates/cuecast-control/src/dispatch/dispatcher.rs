//! Fan-out dispatcher

use arc_swap::ArcSwap;
use futures::future::join_all;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, trace, warn};

use super::config::DispatcherConfig;
use super::endpoint::Endpoint;
use super::outcome::{SendFailure, SendOutcome};
use super::resolver::{Resolve, SystemResolver};
use crate::osc::Message;
use crate::Result;

/// Sends each message to every configured endpoint
///
/// The endpoint set lives behind an [`ArcSwap`]: `configure` swaps in a new
/// list while any dispatch already running keeps the list it started with.
pub struct Dispatcher {
    config: DispatcherConfig,
    endpoints: ArcSwap<Vec<Endpoint>>,
    resolver: Arc<dyn Resolve>,
}

impl Dispatcher {
    /// Create a dispatcher with no endpoints
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            config,
            endpoints: ArcSwap::from_pointee(Vec::new()),
            resolver: Arc::new(SystemResolver),
        }
    }

    /// Replace the system resolver
    pub fn with_resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Create a dispatcher and configure its endpoints
    pub fn with_endpoints(
        config: DispatcherConfig,
        endpoints: impl IntoIterator<Item = Endpoint>,
    ) -> Self {
        let dispatcher = Self::new(config);
        dispatcher.configure(endpoints);
        dispatcher
    }

    /// Configuration this dispatcher was built with
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Replace the endpoint set
    ///
    /// Order is kept; repeated endpoints are dropped after their first
    /// occurrence.
    pub fn configure(&self, endpoints: impl IntoIterator<Item = Endpoint>) {
        let mut unique: Vec<Endpoint> = Vec::new();
        for endpoint in endpoints {
            if unique.contains(&endpoint) {
                debug!("Ignoring duplicate endpoint {}", endpoint);
                continue;
            }
            unique.push(endpoint);
        }

        info!(
            "Dispatcher configured with {} endpoint(s): [{}]",
            unique.len(),
            unique
                .iter()
                .map(Endpoint::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.endpoints.store(Arc::new(unique));
    }

    /// Snapshot of the current endpoint set
    pub fn endpoints(&self) -> Arc<Vec<Endpoint>> {
        self.endpoints.load_full()
    }

    /// Parse an endpoint string using the configured default port
    pub fn parse_endpoint(&self, s: &str) -> Result<Endpoint> {
        Endpoint::parse_with_default(s, self.config.default_port)
    }

    /// Send `message` to every endpoint in the current snapshot
    ///
    /// All sends run concurrently and each is attempted regardless of the
    /// others. Outcomes come back in endpoint order. An empty endpoint set
    /// yields an empty list.
    pub async fn dispatch(&self, message: &Message) -> Vec<SendOutcome> {
        let endpoints = self.endpoints.load_full();
        if endpoints.is_empty() {
            debug!("No endpoints configured, dropping {}", message);
            return Vec::new();
        }

        let payload = message.serialize();
        debug!(
            "Dispatching {} ({} bytes) to {} endpoint(s)",
            message,
            payload.len(),
            endpoints.len()
        );

        join_all(
            endpoints
                .iter()
                .map(|endpoint| self.send_to(endpoint, &payload)),
        )
        .await
    }

    async fn send_to(&self, endpoint: &Endpoint, payload: &[u8]) -> SendOutcome {
        let timeout = self.config.send_timeout();
        let result = match tokio::time::timeout(timeout, self.transmit(endpoint, payload)).await {
            Ok(result) => result,
            Err(_) => Err(SendFailure::Timeout(timeout)),
        };

        match result {
            Ok(bytes_sent) => {
                trace!("Sent {} bytes to {}", bytes_sent, endpoint);
                SendOutcome::Success {
                    endpoint: endpoint.clone(),
                    bytes_sent,
                }
            }
            Err(detail) => {
                warn!("Send to {} failed: {}", endpoint, detail);
                SendOutcome::Failure {
                    endpoint: endpoint.clone(),
                    detail,
                }
            }
        }
    }

    async fn transmit(
        &self,
        endpoint: &Endpoint,
        payload: &[u8],
    ) -> std::result::Result<usize, SendFailure> {
        let destination = self.resolver.resolve(endpoint).await?;
        let socket = UdpSocket::bind(self.config.bind_for(&destination))
            .await
            .map_err(|e| SendFailure::Transmit(format!("bind: {}", e)))?;

        socket
            .send_to(payload, destination)
            .await
            .map_err(|e| SendFailure::Transmit(e.to_string()))
    }
}
