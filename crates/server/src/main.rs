use anyhow::Context as _;
use clap::Parser;
use cyber_mcp_server::CyberTools;
use cyber_mcp_http::CyberGateway;
use cyber_mcp_server::config::{ConfigOverrides, load_config};
use cyber_mcp_server::logging::{LogFormat, init_tracing};
use cyber_mcp_server::transport::{Transport, serve_http, serve_stdio};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// MCP server for the Cyber-i user, client and API-path lookups.
#[derive(Debug, Parser)]
#[command(name = "cyber-mcp", version, about)]
struct Cli {
    /// Optional config file (YAML or JSON) with `baseUrl`, `authKey`, `timeoutMs`.
    #[arg(long, env = "CYBER_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// API base URL.
    #[arg(long, env = "CYBER_BASE_URL")]
    base_url: Option<String>,

    /// Value for the `AUTH_KEY` request header; pass an empty string to omit it.
    #[arg(long, env = "CYBER_AUTH_KEY", hide_env_values = true)]
    auth_key: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long, env = "CYBER_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    #[arg(long, value_enum, env = "CYBER_MCP_TRANSPORT", default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Listen address for `--transport http`.
    #[arg(long, env = "CYBER_MCP_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    #[arg(long, env = "CYBER_MCP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[arg(long, value_enum, env = "CYBER_MCP_LOG_FORMAT", default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format).context("init logging")?;

    let overrides = ConfigOverrides {
        base_url: cli.base_url,
        auth_key: cli.auth_key,
        timeout_ms: cli.timeout_ms,
    };
    let config = load_config(cli.config.as_deref(), &overrides).context("load configuration")?;
    info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        auth_header = config.auth_header_value().is_some(),
        "configuration loaded"
    );

    let gateway = CyberGateway::new(config).context("build request gateway")?;
    let tools = CyberTools::new(gateway);

    match cli.transport {
        Transport::Stdio => serve_stdio(tools).await.context("stdio transport")?,
        Transport::Http => {
            let shutdown = CancellationToken::new();
            let on_signal = shutdown.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        info!("shutdown signal received");
                        on_signal.cancel();
                    }
                    Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
                }
            });
            serve_http(tools, cli.bind, shutdown)
                .await
                .context("http transport")?;
        }
    }

    Ok(())
}
