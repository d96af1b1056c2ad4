use serde::{Deserialize, Serialize};

/// A connected data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(default)]
    pub enabled: bool,
    /// Builtin sources never show up in the palette
    #[serde(default)]
    pub is_builtin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Mcp,
    Api,
    Local,
    Gmail,
    #[serde(other)]
    Other,
}

impl SourceType {
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Mcp => "MCP",
            SourceType::Api => "API",
            SourceType::Local => "Local",
            SourceType::Gmail => "Gmail",
            SourceType::Other => "Source",
        }
    }
}
