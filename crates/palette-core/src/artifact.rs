//! Identity keys for panel artifacts.
//!
//! Two artifacts with the same key are the same logical artifact; any other
//! payload difference (code text of equal length, setting values, field
//! lists) is a live update of that artifact, not a new one.

use std::fmt;

use palette_types::artifact::{ArtifactType, ContentType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ArtifactKey {
    None,
    Source {
        slug: String,
    },
    Skill {
        slug: String,
    },
    SessionMeta {
        session_id: String,
    },
    SettingsPreview {
        setting_key: String,
    },
    MultiFieldConfig {
        title: String,
    },
    /// Code length is part of the key so replaced content reads as a new artifact.
    ContentPreview {
        content_type: ContentType,
        title: String,
        code_len: usize,
    },
}

pub fn identity_of(artifact: Option<&ArtifactType>) -> ArtifactKey {
    let Some(artifact) = artifact else {
        return ArtifactKey::None;
    };
    match artifact {
        ArtifactType::Source { source_slug } => ArtifactKey::Source {
            slug: source_slug.clone(),
        },
        ArtifactType::Skill { skill_slug } => ArtifactKey::Skill {
            slug: skill_slug.clone(),
        },
        ArtifactType::SessionMeta { session_id } => ArtifactKey::SessionMeta {
            session_id: session_id.clone(),
        },
        ArtifactType::SettingsPreview { setting_key, .. } => ArtifactKey::SettingsPreview {
            setting_key: setting_key.clone(),
        },
        ArtifactType::MultiFieldConfig { title, .. } => ArtifactKey::MultiFieldConfig {
            title: title.clone(),
        },
        ArtifactType::ContentPreview {
            content_type,
            title,
            code,
        } => ArtifactKey::ContentPreview {
            content_type: content_type.clone(),
            title: title.clone(),
            code_len: code.len(),
        },
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKey::None => write!(f, "none"),
            ArtifactKey::Source { slug } => write!(f, "source:{}", slug),
            ArtifactKey::Skill { slug } => write!(f, "skill:{}", slug),
            ArtifactKey::SessionMeta { session_id } => write!(f, "session-meta:{}", session_id),
            ArtifactKey::SettingsPreview { setting_key } => {
                write!(f, "settings-preview:{}", setting_key)
            }
            ArtifactKey::MultiFieldConfig { title } => write!(f, "multi-field-config:{}", title),
            ArtifactKey::ContentPreview {
                content_type,
                title,
                code_len,
            } => write!(f, "content-preview:{}:{}:{}", content_type, title, code_len),
        }
    }
}
