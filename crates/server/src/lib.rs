//! MCP server exposing Cyber-i user, client and API-path lookups as tools.
//!
//! Tool handlers live in `tools`; the remote HTTP call itself is delegated to
//! `cyber-mcp-http`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod tools;
pub mod transport;

pub use error::{Result, ServerError};
pub use tools::CyberTools;
