//! The palette read-model and the guards that re-check a selection
//! against fresh snapshots before the caller acts on it.

use palette_types::config::DEFAULT_MAX_RESULTS_PER_GROUP;
use palette_types::session::{SessionMap, SessionMeta};
use palette_types::skill::Skill;
use palette_types::source::SourceConfig;
use palette_types::workspace::WorkspaceOption;
use serde::{Deserialize, Serialize};

use crate::ranking::{rank_skills, rank_sources, rank_workspaces};
use crate::visibility::{get_visible_root_sessions, is_visible_root_session};

/// One computed palette, borrowing from the snapshots it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteModel<'a> {
    pub sessions: Vec<&'a SessionMeta>,
    pub sources: Vec<&'a SourceConfig>,
    pub skills: Vec<&'a Skill>,
    pub workspaces: Vec<&'a WorkspaceOption>,
    pub has_any_results: bool,
}

/// Build the palette model. One cap applies to every group.
///
/// `active_workspace_id` does not filter workspaces; marking the active one
/// is left to rendering.
pub fn build_model<'a>(
    sessions: &'a SessionMap,
    sources: &'a [SourceConfig],
    skills: &'a [Skill],
    workspaces: &'a [WorkspaceOption],
    active_workspace_id: Option<&str>,
    max_results_per_group: Option<usize>,
) -> PaletteModel<'a> {
    let cap = max_results_per_group.unwrap_or(DEFAULT_MAX_RESULTS_PER_GROUP);

    let sessions = get_visible_root_sessions(sessions, Some(cap));
    let sources = rank_sources(sources, cap);
    let skills = rank_skills(skills, cap);
    let workspaces = rank_workspaces(workspaces, cap);

    let has_any_results =
        !sessions.is_empty() || !sources.is_empty() || !skills.is_empty() || !workspaces.is_empty();

    log::debug!(
        "palette model: {} sessions, {} sources, {} skills, {} workspaces (cap {}, active workspace {:?})",
        sessions.len(),
        sources.len(),
        skills.len(),
        workspaces.len(),
        cap,
        active_workspace_id,
    );

    PaletteModel {
        sessions,
        sources,
        skills,
        workspaces,
        has_any_results,
    }
}

/// True only if `id` names a session that is a visible root session right now.
pub fn can_select_visible_root_session(sessions: &SessionMap, id: &str) -> bool {
    sessions.get(id).is_some_and(is_visible_root_session)
}

pub fn can_select_workspace(workspaces: &[WorkspaceOption], id: &str) -> bool {
    workspaces.iter().any(|w| w.id == id)
}

/// A row the user picked in the palette
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum PaletteSelection {
    Session(String),
    Source(String),
    Skill(String),
    Workspace(String),
    Settings(String),
}

impl PaletteSelection {
    pub fn id(&self) -> &str {
        match self {
            PaletteSelection::Session(id)
            | PaletteSelection::Source(id)
            | PaletteSelection::Skill(id)
            | PaletteSelection::Workspace(id)
            | PaletteSelection::Settings(id) => id,
        }
    }
}

/// Borrowed view of the current snapshots
#[derive(Debug, Clone, Copy)]
pub struct PaletteSnapshot<'a> {
    pub sessions: &'a SessionMap,
    pub sources: &'a [SourceConfig],
    pub skills: &'a [Skill],
    pub workspaces: &'a [WorkspaceOption],
    pub active_workspace_id: Option<&'a str>,
}

impl<'a> PaletteSnapshot<'a> {
    pub fn build_model(&self, max_results_per_group: Option<usize>) -> PaletteModel<'a> {
        build_model(
            self.sessions,
            self.sources,
            self.skills,
            self.workspaces,
            self.active_workspace_id,
            max_results_per_group,
        )
    }
}

/// Re-check a selection against the current snapshot.
///
/// The row may come from a model computed before the latest data refresh,
/// so nothing from that model is trusted here.
pub fn validate_selection(snapshot: &PaletteSnapshot<'_>, selection: &PaletteSelection) -> bool {
    let accepted = match selection {
        PaletteSelection::Session(id) => can_select_visible_root_session(snapshot.sessions, id),
        PaletteSelection::Workspace(id) => can_select_workspace(snapshot.workspaces, id),
        PaletteSelection::Source(slug) => snapshot
            .sources
            .iter()
            .any(|s| s.slug == *slug && !s.is_builtin),
        PaletteSelection::Skill(slug) => snapshot.skills.iter().any(|s| s.slug == *slug),
        // Any id resolves to a prompt.
        PaletteSelection::Settings(_) => true,
    };

    if !accepted {
        log::debug!("rejected stale palette selection: {:?}", selection);
    }
    accepted
}

