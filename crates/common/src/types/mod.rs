use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured failure returned to RPC callers instead of a raw fault.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

/// Inbound message envelope: `{ pattern, data, id }`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcPacket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Outbound reply envelope. Exactly one of `response` / `err` is set.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<ErrorBody>,
    pub is_disposed: bool,
}

impl RpcReply {
    pub fn ok(id: Option<String>, response: Value) -> Self {
        Self { id, response: Some(response), err: None, is_disposed: true }
    }

    pub fn err(id: Option<String>, err: ErrorBody) -> Self {
        Self { id, response: None, err: Some(err), is_disposed: true }
    }
}
