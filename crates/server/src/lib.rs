//! HTTP front end over a shared [`FileStore`].
//!
//! The server runs on its own thread with its own tokio runtime so it can be
//! started from synchronous code (the interactive prompt) without blocking it.

mod config;
mod router;
mod state;
mod ui;

use std::{
    net::{SocketAddr, TcpListener as StdTcpListener},
    sync::Arc,
    thread::{self, JoinHandle},
};

use anyhow::{Context, anyhow};
use filemgr_fs::FileStore;
use log::{error, info};
use tokio::sync::oneshot;

pub use config::{ServerArgs, ServerConfig};
pub use router::build_router;
pub use state::AppState;

/// A running server. Dropping the handle stops it.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Browser-friendly address, `localhost` for loopback and wildcard binds.
    pub fn url(&self) -> String {
        let ip = self.local_addr.ip();
        if ip.is_loopback() || ip.is_unspecified() {
            format!("http://localhost:{}", self.local_addr.port())
        } else {
            format!("http://{}", self.local_addr)
        }
    }

    /// Stop accepting connections, let in-flight requests finish, then join.
    pub fn shutdown(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.join()
    }

    fn join(&mut self) -> anyhow::Result<()> {
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| anyhow!("HTTP server thread panicked")),
            None => Ok(()),
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Bind `config`'s address and start serving `store` in the background.
///
/// Binding happens before this returns, so a port already in use is reported
/// here rather than on the server thread.
pub fn start_server(store: Arc<FileStore>, config: &ServerConfig) -> anyhow::Result<ServerHandle> {
    let addr = config.socket_addr();

    let listener =
        StdTcpListener::bind(addr).with_context(|| format!("Failed to bind HTTP server to {addr}"))?;
    listener
        .set_nonblocking(true)
        .context("Failed to make listener non-blocking")?;
    let local_addr = listener.local_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("filemgr-http")
        .build()
        .context("Failed to build tokio runtime")?;

    let app = build_router(AppState::new(store));
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let thread = thread::Builder::new()
        .name("filemgr-server".into())
        .spawn(move || {
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(l) => l,
                    Err(e) => {
                        error!("Failed to register listener on {local_addr}: {e}");
                        return;
                    }
                };

                info!("HTTP server listening on {local_addr}");

                // Resolves on an explicit shutdown or when the handle is dropped.
                let shutdown = async move {
                    let _ = shutdown_rx.await;
                };

                if let Err(e) = axum::serve(listener, app)
                    .with_graceful_shutdown(shutdown)
                    .await
                {
                    error!("HTTP server on {local_addr} failed: {e}");
                }
            });

            info!("HTTP server on {local_addr} stopped");
        })
        .context("Failed to spawn HTTP server thread")?;

    Ok(ServerHandle {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
        thread: Some(thread),
    })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
