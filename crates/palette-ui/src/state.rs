//! State the host keeps between frames.
//!
//! The palette model itself is recomputed every frame from fresh snapshots;
//! only the open flag, the status line, and the panel's artifact/view mode
//! persist here.

use chrono::{DateTime, Utc};
use palette_core::artifact::identity_of;
use palette_core::model::PaletteSelection;
use palette_core::view_mode::{next_mode, ViewMode};
use palette_types::artifact::ArtifactType;

/// Current artifact of the side panel and its Preview/Code choice
#[derive(Debug, Clone, Default)]
pub struct ArtifactPanelState {
    artifact: Option<ArtifactType>,
    mode: ViewMode,
}

impl ArtifactPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifact(&self) -> Option<&ArtifactType> {
        self.artifact.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Mode the renderer should use. Artifacts without a code view always preview.
    pub fn effective_mode(&self) -> ViewMode {
        if self.can_toggle() {
            self.mode
        } else {
            ViewMode::Preview
        }
    }

    pub fn can_toggle(&self) -> bool {
        self.artifact
            .as_ref()
            .is_some_and(ArtifactType::shows_code_toggle)
    }

    /// Swap in the next artifact, resetting the mode if its identity changed.
    pub fn set_artifact(&mut self, next: Option<ArtifactType>) -> ViewMode {
        let previous_key = identity_of(self.artifact.as_ref());
        let next_key = identity_of(next.as_ref());
        if previous_key == next_key {
            log::trace!("panel artifact {} updated in place", next_key);
        } else {
            log::debug!(
                "panel artifact changed {} -> {}, view mode reset",
                previous_key,
                next_key
            );
        }

        self.mode = next_mode(self.artifact.as_ref(), next.as_ref(), self.mode);
        self.artifact = next;
        self.mode
    }

    /// Flip Preview/Code. Returns false when the artifact has no code view.
    pub fn toggle_mode(&mut self) -> bool {
        if !self.can_toggle() {
            return false;
        }
        self.mode = self.mode.toggled();
        true
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.toggle_mode()
    }
}

/// Palette dialog state
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub open: bool,
    /// Shown under the list, e.g. when a picked row went stale
    pub status_text: String,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.status_text.clear();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Record the outcome of a selection after it went through the guards.
    pub fn record_selection(&mut self, selection: &PaletteSelection, accepted: bool) {
        if accepted {
            self.close();
            self.status_text.clear();
        } else {
            self.status_text = format!("{} is no longer available", selection_kind(selection));
        }
    }
}

pub fn selection_kind(selection: &PaletteSelection) -> &'static str {
    match selection {
        PaletteSelection::Session(_) => "Session",
        PaletteSelection::Source(_) => "Source",
        PaletteSelection::Skill(_) => "Skill",
        PaletteSelection::Workspace(_) => "Workspace",
        PaletteSelection::Settings(_) => "Setting",
    }
}

/// Compact age for a session row: "just now", "5m", "3h", "2d".
///
/// Empty when the session has no timestamp.
pub fn relative_age_label(last_message_at: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(then) = last_message_at.and_then(DateTime::from_timestamp_millis) else {
        return String::new();
    };
    let age = now.signed_duration_since(then);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else {
        format!("{}d", age.num_days())
    }
}
