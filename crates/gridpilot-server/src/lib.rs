//! Gridpilot production server.
//!
//! Thin transport shell around [`gridpilot_core`]: bind a TCP listener,
//! accept connections forever, and hand each one to an independent
//! session task. Sessions share nothing, so a failing robot never
//! touches its neighbors; an interrupt stops accepting but leaves
//! in-flight sessions to finish or time out on their own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::net::SocketAddr;

use gridpilot_core::serve_robot;
use thiserror::Error;
use tokio::net::TcpListener;

/// Default endpoint robots connect to.
pub const DEFAULT_BIND: &str = "0.0.0.0:4321";

/// Errors that can occur while standing the server up.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be created.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Configured bind endpoint.
        address: String,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The listening socket failed after binding.
    #[error("listener error: {0}")]
    Listener(#[from] std::io::Error),
}

/// Server runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Endpoint to bind to (e.g. "0.0.0.0:4321").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: DEFAULT_BIND.to_string() }
    }
}

/// Listening gridpilot server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.bind_address).await.map_err(|source| {
            ServerError::Bind { address: config.bind_address.clone(), source }
        })?;

        tracing::info!(address = %config.bind_address, "listener bound");
        Ok(Self { listener })
    }

    /// Local address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept robots until interrupted.
    ///
    /// Each accepted connection runs in its own task; accept errors are
    /// logged and the loop keeps serving. Ctrl-c closes the listening
    /// socket and returns without awaiting in-flight sessions.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((socket, peer)) => {
                        tokio::spawn(serve_robot(socket, peer));
                    },
                    Err(error) => {
                        tracing::error!(%error, "accept failed");
                    },
                },
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupt received, shutting the listener down");
                    break;
                },
            }
        }
        Ok(())
    }
}
