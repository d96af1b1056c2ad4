//! Artifacts shown in the contextual side panel.
//!
//! The host describes what the panel should display with a tagged JSON
//! object (`{"type": "content-preview", ...}`). Every per-kind helper
//! matches exhaustively so a new kind cannot slip past any of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ArtifactType {
    Source {
        source_slug: String,
    },
    Skill {
        skill_slug: String,
    },
    SessionMeta {
        session_id: String,
    },
    SettingsPreview {
        setting_key: String,
        #[serde(default)]
        current_value: Value,
        #[serde(default)]
        new_value: Value,
    },
    MultiFieldConfig {
        title: String,
        #[serde(default)]
        fields: Vec<ConfigField>,
    },
    ContentPreview {
        content_type: ContentType,
        title: String,
        #[serde(default)]
        code: String,
    },
}

/// A single editable field of a multi-field config artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigField {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub value: Value,
}

/// Renderer selector for content previews. Unknown strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Html,
    Mermaid,
    Pdf,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Html => "html",
            ContentType::Mermaid => "mermaid",
            ContentType::Pdf => "pdf",
            ContentType::Other(s) => s,
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "html" => ContentType::Html,
            "mermaid" => ContentType::Mermaid,
            "pdf" => ContentType::Pdf,
            _ => ContentType::Other(s),
        }
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        ContentType::from(s.to_string())
    }
}

impl From<ContentType> for String {
    fn from(c: ContentType) -> Self {
        match c {
            ContentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArtifactType {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short tag naming the kind, matching the wire `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            ArtifactType::Source { .. } => "source",
            ArtifactType::Skill { .. } => "skill",
            ArtifactType::SessionMeta { .. } => "session-meta",
            ArtifactType::SettingsPreview { .. } => "settings-preview",
            ArtifactType::MultiFieldConfig { .. } => "multi-field-config",
            ArtifactType::ContentPreview { .. } => "content-preview",
        }
    }

    /// Panel heading
    pub fn title(&self) -> &str {
        match self {
            ArtifactType::Source { .. } => "Source",
            ArtifactType::Skill { .. } => "Skill",
            ArtifactType::SessionMeta { .. } => "Session",
            ArtifactType::SettingsPreview { .. } => "Settings Change",
            ArtifactType::MultiFieldConfig { title, .. } => title,
            ArtifactType::ContentPreview { title, .. } => title,
        }
    }

    /// Badge shown next to the title. Only content previews carry one.
    pub fn type_label(&self) -> Option<&'static str> {
        match self {
            ArtifactType::ContentPreview { content_type, .. } => match content_type {
                ContentType::Html => Some("HTML"),
                ContentType::Mermaid => Some("Diagram"),
                ContentType::Pdf => Some("PDF"),
                ContentType::Other(_) => None,
            },
            ArtifactType::Source { .. }
            | ArtifactType::Skill { .. }
            | ArtifactType::SessionMeta { .. }
            | ArtifactType::SettingsPreview { .. }
            | ArtifactType::MultiFieldConfig { .. } => None,
        }
    }

    /// Whether the panel offers a Preview/Code switch for this artifact
    pub fn shows_code_toggle(&self) -> bool {
        match self {
            ArtifactType::ContentPreview { content_type, .. } => {
                matches!(content_type, ContentType::Html | ContentType::Mermaid)
            }
            ArtifactType::Source { .. }
            | ArtifactType::Skill { .. }
            | ArtifactType::SessionMeta { .. }
            | ArtifactType::SettingsPreview { .. }
            | ArtifactType::MultiFieldConfig { .. } => false,
        }
    }
}
