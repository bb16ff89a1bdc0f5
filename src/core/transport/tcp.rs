//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw sockets. Every accepted connection is an
//! independent MCP session on its own task, all sharing one `McpServer` and
//! therefore one SWAPI client.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listening socket.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let addr = self.address();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))
    }

    /// Run the TCP transport. Only a bind failure ends it.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        Self::serve(listener, server).await;
        Ok(())
    }

    /// Accept sessions forever on an already bound listener.
    pub async fn serve(listener: TcpListener, server: McpServer) {
        match listener.local_addr() {
            Ok(local) => info!(server = server.name(), %local, "Ready - Star Wars API over TCP"),
            Err(_) => info!(server = server.name(), "Ready - Star Wars API over TCP"),
        }

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!(%peer, error = %e, "Failed to set TCP_NODELAY");
            }

            tokio::spawn(Self::session(server.clone(), stream, peer));
        }
    }

    async fn session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
        info!(%peer, "Session opened");

        let running = match server.serve(stream).await {
            Ok(running) => running,
            Err(e) => {
                warn!(%peer, error = %e, "MCP handshake failed");
                return;
            }
        };

        match running.waiting().await {
            Ok(reason) => info!(%peer, ?reason, "Session closed"),
            Err(e) => warn!(%peer, error = %e, "Session ended with error"),
        }
    }
}
