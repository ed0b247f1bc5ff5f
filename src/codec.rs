//! Wire model for layout edits: the client-submitted tree shape and the
//! JSON envelope the edit endpoint answers with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ZonalError;

/// One element of the client-submitted layout tree.
///
/// The client declares identity, type, and nesting only. Metadata for
/// surviving nodes is recovered from the persisted tree during
/// reconciliation, so a payload losing every other attribute is expected,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    // The wire field has always been pluralized this way; kept verbatim
    // for compatibility with deployed editor clients.
    #[serde(rename = "childrens", default)]
    pub children: Vec<ClientNode>,
}

impl ClientNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        ClientNode {
            id: id.into(),
            kind: kind.into(),
            children: Vec::new(),
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::parse(&self.kind)
    }
}

/// Recognized client node types. Matching is case-insensitive; anything
/// else falls through to [NodeKind::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Container,
    Application,
    Other,
}

impl NodeKind {
    pub fn parse(raw: &str) -> NodeKind {
        if raw.eq_ignore_ascii_case("container") {
            NodeKind::Container
        } else if raw.eq_ignore_ascii_case("application") {
            NodeKind::Application
        } else {
            NodeKind::Other
        }
    }
}

/// The POST body of a layout edit: the declared forest under the page
/// root, plus an optional layout template switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_id: Option<String>,
    #[serde(rename = "childrens", default)]
    pub children: Vec<ClientNode>,
}

pub fn parse_request(body: &str) -> Result<EditRequest, ZonalError> {
    serde_json::from_str(body).map_err(|src| ZonalError::Payload(format!("edit request: {src}")))
}

/// JSON envelope returned by the edit endpoint.
///
/// The transport always answers HTTP 200; success or failure is carried
/// in the body's `code` and `status` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditResponse {
    pub code: u16,
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl EditResponse {
    pub fn success(message: impl Into<String>) -> Self {
        EditResponse {
            code: 200,
            status: "success".to_string(),
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        EditResponse {
            code: 400,
            status: "error".to_string(),
            message: message.into(),
            data: Some(Value::Object(serde_json::Map::new())),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}
