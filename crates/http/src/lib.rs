//! Request gateway for the Cyber-i MCP demo API.
//!
//! This crate is used by `cyber-mcp-server` to reach the remote JSON API. It owns:
//! - the connection settings (`GatewayConfig`)
//! - the single GET helper (`CyberGateway::get`) with its deadline and error contract
//!
//! It intentionally contains **no** MCP tool logic.

pub mod config;
pub mod error;
pub mod gateway;
pub mod safety;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use gateway::CyberGateway;
