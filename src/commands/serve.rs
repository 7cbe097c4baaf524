//! Serve command: runs the HTTP API until interrupted

use std::sync::Arc;

use netpath_core::config::Config;
use netpath_core::error::{NetpathError, Result};
use netpath_core::store::FileStore;
use tokio::net::TcpListener;

use crate::cli::{Cli, ServeArgs};
use crate::server;

pub fn execute(cli: &Cli, config: &Config, store: FileStore, args: &ServeArgs) -> Result<()> {
    let host = args.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| NetpathError::Other(format!("failed to bind to {}: {}", addr, e)))?;
        let local = listener.local_addr()?;

        tracing::info!(addr = %local, store = %store.root().display(), "api server listening");
        if !cli.quiet {
            println!("Listening on http://{}", local);
        }

        server::serve(listener, Arc::new(store), shutdown_signal()).await
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
