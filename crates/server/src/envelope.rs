//! Shaping of remote API responses into tool results.
//!
//! Every tool answers with exactly one text block: either the pretty-printed list or an error
//! message with `is_error` set.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Field under which the remote API nests its primary result list.
pub const OUT_BLOCK_FIELD: &str = "OutBlock_1";

/// The `OutBlock_1` value of a response, or `[]` when it is absent or null.
#[must_use]
pub fn extract_out_block(data: &Value) -> Value {
    match data.get(OUT_BLOCK_FIELD) {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(v) => v.clone(),
    }
}

/// Success result: `{ <output_key>: <OutBlock_1 or []> }` as pretty-printed JSON.
#[must_use]
pub fn list_result(output_key: &str, data: &Value) -> CallToolResult {
    let mut body = Map::new();
    body.insert(output_key.to_string(), extract_out_block(data));
    let body = Value::Object(body);
    let text = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Error result: `Error fetching <subject>: <message>`.
#[must_use]
pub fn error_result(subject: &str, err: impl Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Error fetching {subject}: {err}"
    ))])
}
