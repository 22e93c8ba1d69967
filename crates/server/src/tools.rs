//! The three lookup tools.
//!
//! All of them are the same operation (GET an endpoint, pick `OutBlock_1`, wrap it) described by
//! a `ListQuery`; only the endpoint, forwarded parameters and labels differ.

use crate::envelope::{error_result, list_result};
use cyber_mcp_http::CyberGateway;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool};
use rmcp::{ServerHandler, schemars, tool, tool_handler, tool_router};
use serde::Deserialize;
use tracing::{info, warn};

pub const SERVER_NAME: &str = "cyber-mcp";

const INSTRUCTIONS: &str = "Read-only lookups against the Cyber-i API. \
Tools: getUserInfo (user details for a clientId), getClient (registered clients), \
getApiPath (API paths / menu routes).";

/// One remote list lookup exposed as a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Tool name on the MCP surface.
    pub tool: &'static str,
    pub endpoint: &'static str,
    /// Key wrapping the list in the success payload.
    pub output_key: &'static str,
    /// Noun used in `Error fetching <subject>: ...`.
    pub subject: &'static str,
}

pub const USER_INFO: ListQuery = ListQuery {
    tool: "getUserInfo",
    endpoint: "/svc/mcp/getUserInfo",
    output_key: "users",
    subject: "user info",
};

pub const CLIENTS: ListQuery = ListQuery {
    tool: "getClient",
    endpoint: "/svc/mcp/getClient",
    output_key: "clients",
    subject: "clients",
};

pub const API_PATHS: ListQuery = ListQuery {
    tool: "getApiPath",
    endpoint: "/svc/mcp/apipath",
    output_key: "paths",
    subject: "api paths",
};

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserInfoArgs {
    /// clientId to look up (e.g. `test26`)
    pub client_id: String,
}

#[derive(Clone)]
pub struct CyberTools {
    gateway: CyberGateway,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CyberTools {
    #[must_use]
    pub fn new(gateway: CyberGateway) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "getUserInfo",
        description = "Look up user information by clientId.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn get_user_info(
        &self,
        Parameters(args): Parameters<GetUserInfoArgs>,
    ) -> CallToolResult {
        self.run(&USER_INFO, &[("clientId", args.client_id.as_str())]).await
    }

    #[tool(
        name = "getClient",
        description = "List the registered clients.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn get_client(&self) -> CallToolResult {
        self.run(&CLIENTS, &[]).await
    }

    #[tool(
        name = "getApiPath",
        description = "List API paths (menus/routes).",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn get_api_path(&self) -> CallToolResult {
        self.run(&API_PATHS, &[]).await
    }
}

impl CyberTools {
    /// Tools advertised on the MCP surface.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Execute one lookup. Gateway failures become an error result; they never escape.
    pub async fn run(&self, query: &ListQuery, params: &[(&str, &str)]) -> CallToolResult {
        match self.gateway.get(query.endpoint, params).await {
            Ok(data) => {
                info!(tool = query.tool, "tool call succeeded");
                list_result(query.output_key, &data)
            }
            Err(e) => {
                warn!(tool = query.tool, error = %e, "tool call failed");
                error_result(query.subject, &e)
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for CyberTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}
