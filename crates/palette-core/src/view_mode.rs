//! Preview/code switch for the artifact panel.
//!
//! The mode survives updates to the same artifact and resets to preview
//! whenever the identity changes.

use palette_types::artifact::ArtifactType;
use serde::{Deserialize, Serialize};

use crate::artifact::identity_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Preview => "Preview",
            ViewMode::Code => "Code",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Preview => ViewMode::Code,
            ViewMode::Code => ViewMode::Preview,
        }
    }
}

pub fn next_mode(
    previous: Option<&ArtifactType>,
    next: Option<&ArtifactType>,
    current: ViewMode,
) -> ViewMode {
    if identity_of(previous) == identity_of(next) {
        current
    } else {
        ViewMode::Preview
    }
}

pub fn title(artifact: &ArtifactType) -> &str {
    artifact.title()
}

pub fn type_label(artifact: &ArtifactType) -> Option<&'static str> {
    artifact.type_label()
}

pub fn show_code_toggle(artifact: &ArtifactType) -> bool {
    artifact.shows_code_toggle()
}
