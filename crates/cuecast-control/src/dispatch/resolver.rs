//! Endpoint name resolution

use futures::future::BoxFuture;
use std::net::SocketAddr;
use tokio::net::lookup_host;

use super::endpoint::Endpoint;
use super::outcome::SendFailure;

/// Turns an [`Endpoint`] into the socket address a datagram is sent to
///
/// The dispatcher bounds every call with its send timeout, so an
/// implementation may take as long as it likes.
pub trait Resolve: Send + Sync {
    /// Resolve `endpoint` to a single destination address
    fn resolve<'a>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> BoxFuture<'a, std::result::Result<SocketAddr, SendFailure>>;
}

/// System resolver, first address wins
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    fn resolve<'a>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> BoxFuture<'a, std::result::Result<SocketAddr, SendFailure>> {
        Box::pin(async move {
            let mut addrs = lookup_host((endpoint.host.as_str(), endpoint.port))
                .await
                .map_err(|e| SendFailure::Resolution(e.to_string()))?;

            addrs
                .next()
                .ok_or_else(|| SendFailure::Resolution(format!("no address for {}", endpoint.host)))
        })
    }
}
