//! Ways of exposing the tools to MCP clients.

use crate::error::{Result, ServerError};
use crate::tools::CyberTools;
use axum::Router;
use axum::routing::get;
use clap::ValueEnum;
use rmcp::ServiceExt as _;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout.
    #[default]
    Stdio,
    /// MCP streamable HTTP at `/mcp`.
    Http,
}

/// Serve one MCP session over stdin/stdout until the client disconnects.
///
/// # Errors
///
/// Returns an error if the MCP handshake fails or the service task aborts.
pub async fn serve_stdio(tools: CyberTools) -> Result<()> {
    info!("serving MCP over stdio");
    let service = tools
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::Startup(format!("stdio transport: {e}")))?;
    let reason = service
        .waiting()
        .await
        .map_err(|e| ServerError::Startup(format!("stdio service task failed: {e}")))?;
    info!(?reason, "stdio session closed");
    Ok(())
}

/// Router with the MCP endpoint at `/mcp` and a liveness probe at `/healthz`.
///
/// Each request gets a fresh handler; no session state is kept between requests.
pub fn http_router(tools: CyberTools) -> Router {
    let config = StreamableHttpServerConfig {
        stateful_mode: false,
        ..Default::default()
    };
    let mcp = StreamableHttpService::new(
        move || Ok(tools.clone()),
        LocalSessionManager::default().into(),
        config,
    );

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/mcp", mcp)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Serve streamable HTTP on `bind` until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve_http(
    tools: CyberTools,
    bind: SocketAddr,
    shutdown: CancellationToken,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| ServerError::Startup(format!("bind {bind}: {e}")))?;
    let addr = listener.local_addr()?;
    info!(%addr, "serving MCP over streamable HTTP at /mcp");

    axum::serve(listener, http_router(tools))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
