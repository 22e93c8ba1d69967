#![allow(dead_code)]

use anyhow::Context as _;
use cyber_mcp_http::{CyberGateway, GatewayConfig};
use cyber_mcp_server::CyberTools;
use rmcp::model::CallToolResult;
use serde_json::Value;
use std::process::{Child, Command, Stdio};

pub use cyber_mcp_test_support::{
    KillOnDrop, MockApi, MockResponse, pick_unused_port, wait_http_ok,
};

pub const USER_INFO_PATH: &str = "/svc/mcp/getUserInfo";
pub const CLIENT_PATH: &str = "/svc/mcp/getClient";
pub const API_PATH_PATH: &str = "/svc/mcp/apipath";

pub fn tools_for(base_url: &str, auth_key: &str, timeout_ms: u64) -> CyberTools {
    let gateway = CyberGateway::new(GatewayConfig {
        base_url: base_url.to_string(),
        auth_key: auth_key.to_string(),
        timeout_ms,
    })
    .expect("valid gateway config");
    CyberTools::new(gateway)
}

/// The single text block of a tool result plus its error flag.
pub fn single_text(result: &CallToolResult) -> (String, bool) {
    let v = serde_json::to_value(result).expect("CallToolResult serializes");
    let content = v
        .get("content")
        .and_then(Value::as_array)
        .expect("content array");
    assert_eq!(content.len(), 1, "exactly one content block: {v}");
    let text = content[0]
        .get("text")
        .and_then(Value::as_str)
        .expect("content[0].text")
        .to_string();
    (text, result.is_error == Some(true))
}

pub fn spawn_server(args: &[&str]) -> anyhow::Result<Child> {
    let bin = env!("CARGO_BIN_EXE_cyber-mcp");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .spawn()
        .context("spawn cyber-mcp")
}
