use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub slug: String,
    pub metadata: SkillMetadata,
    pub source: SkillSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// File patterns that trigger the skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globs: Option<Vec<String>>,
    /// Tools the skill may use without asking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_allow: Option<Vec<String>>,
    /// Source slugs that must be connected for the skill to work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_sources: Option<Vec<String>>,
}

/// Where a skill was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    Global,
    Workspace,
    Project,
}

impl SkillSource {
    pub fn label(&self) -> &'static str {
        match self {
            SkillSource::Global => "Global",
            SkillSource::Workspace => "Workspace",
            SkillSource::Project => "Project",
        }
    }
}
