use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sessions keyed by id. Iteration order carries no meaning.
pub type SessionMap = HashMap<String, SessionMeta>;

/// Lightweight metadata for a chat session, as pushed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMeta {
    pub id: String,
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Epoch millis of the last message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<i64>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub is_archived: bool,
    /// Present for sub-sessions spawned from another session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_session_id: Option<String>,
}

impl SessionMeta {
    pub fn new(id: impl Into<String>, workspace_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            workspace_id: workspace_id.into(),
            name: None,
            preview: None,
            last_message_at: None,
            hidden: false,
            is_archived: false,
            parent_session_id: None,
        }
    }

    /// Name if set, otherwise the first line of the preview, otherwise "Untitled".
    pub fn display_title(&self) -> &str {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name;
        }
        self.preview
            .as_deref()
            .and_then(|p| p.lines().map(str::trim).find(|l| !l.is_empty()))
            .unwrap_or("Untitled")
    }

    pub fn last_message_time(&self) -> Option<DateTime<Utc>> {
        self.last_message_at.and_then(DateTime::from_timestamp_millis)
    }
}
