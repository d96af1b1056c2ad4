#[cfg(test)]
mod tests {
    use crate::panels::artifact_header::artifact_header;
    use crate::panels::palette::palette_panel;
    use crate::state::*;
    use chrono::{DateTime, Duration, Utc};
    use palette_core::model::{build_model, PaletteSelection};
    use palette_core::view_mode::ViewMode;
    use palette_types::artifact::{ArtifactType, ContentType};
    use palette_types::session::{SessionMap, SessionMeta};
    use palette_types::workspace::WorkspaceOption;

    fn html(title: &str, code: &str) -> ArtifactType {
        ArtifactType::ContentPreview {
            content_type: ContentType::Html,
            title: title.to_string(),
            code: code.to_string(),
        }
    }

    fn pdf(title: &str) -> ArtifactType {
        ArtifactType::ContentPreview {
            content_type: ContentType::Pdf,
            title: title.to_string(),
            code: String::new(),
        }
    }

    // ─── ArtifactPanelState Tests ────────────────────────────

    #[test]
    fn test_panel_state_initial() {
        let state = ArtifactPanelState::new();
        assert!(state.artifact().is_none());
        assert_eq!(state.mode(), ViewMode::Preview);
        assert!(!state.can_toggle());
    }

    #[test]
    fn test_panel_state_toggle_requires_code_view() {
        let mut state = ArtifactPanelState::new();
        assert!(!state.toggle_mode());

        state.set_artifact(Some(pdf("Report")));
        assert!(!state.toggle_mode());
        assert_eq!(state.mode(), ViewMode::Preview);

        state.set_artifact(Some(html("Page", "<p/>")));
        assert!(state.toggle_mode());
        assert_eq!(state.mode(), ViewMode::Code);
    }

    #[test]
    fn test_panel_state_live_update_keeps_mode() {
        let mut state = ArtifactPanelState::new();
        state.set_artifact(Some(html("Page", "<p>a</p>")));
        state.toggle_mode();

        // Same title, type and length: a live refresh of the same artifact
        let mode = state.set_artifact(Some(html("Page", "<p>b</p>")));
        assert_eq!(mode, ViewMode::Code);
        assert_eq!(state.mode(), ViewMode::Code);
    }

    #[test]
    fn test_panel_state_new_artifact_resets_mode() {
        let mut state = ArtifactPanelState::new();
        state.set_artifact(Some(html("Page", "<p/>")));
        state.toggle_mode();

        assert_eq!(state.set_artifact(Some(html("Other", "<p/>"))), ViewMode::Preview);

        state.toggle_mode();
        assert_eq!(state.set_artifact(Some(html("Other", "<p>longer</p>"))), ViewMode::Preview);

        state.toggle_mode();
        assert_eq!(state.set_artifact(None), ViewMode::Preview);
        assert!(state.artifact().is_none());
    }

    #[test]
    fn test_panel_state_effective_mode() {
        let mut state = ArtifactPanelState::new();
        state.set_artifact(Some(html("Page", "<p/>")));
        state.toggle_mode();
        assert_eq!(state.effective_mode(), ViewMode::Code);

        state.set_artifact(Some(pdf("Report")));
        assert_eq!(state.effective_mode(), ViewMode::Preview);
    }

    #[test]
    fn test_panel_state_set_mode() {
        let mut state = ArtifactPanelState::new();
        state.set_artifact(Some(html("Page", "<p/>")));
        assert!(!state.set_mode(ViewMode::Preview));
        assert!(state.set_mode(ViewMode::Code));
        assert_eq!(state.mode(), ViewMode::Code);
    }

    // ─── PaletteState Tests ──────────────────────────────────

    #[test]
    fn test_palette_state_toggle() {
        let mut state = PaletteState::new();
        assert!(!state.open);
        state.toggle();
        assert!(state.open);
        state.toggle();
        assert!(!state.open);
    }

    #[test]
    fn test_palette_state_record_rejected_selection() {
        let mut state = PaletteState::new();
        state.open();
        state.record_selection(&PaletteSelection::Session("s1".to_string()), false);
        assert!(state.open);
        assert_eq!(state.status_text, "Session is no longer available");

        state.record_selection(&PaletteSelection::Session("s2".to_string()), true);
        assert!(!state.open);
        assert!(state.status_text.is_empty());
    }

    #[test]
    fn test_palette_state_open_clears_status() {
        let mut state = PaletteState::new();
        state.record_selection(&PaletteSelection::Workspace("w".to_string()), false);
        assert!(!state.status_text.is_empty());
        state.open();
        assert!(state.status_text.is_empty());
    }

    // ─── Relative Age Tests ──────────────────────────────────

    #[test]
    fn test_relative_age_label() {
        let now = DateTime::from_timestamp_millis(10 * 86_400_000).unwrap();
        let ago = |d: Duration| Some((now - d).timestamp_millis());

        assert_eq!(relative_age_label(None, now), "");
        assert_eq!(relative_age_label(ago(Duration::seconds(20)), now), "just now");
        assert_eq!(relative_age_label(ago(Duration::minutes(5)), now), "5m");
        assert_eq!(relative_age_label(ago(Duration::hours(3)), now), "3h");
        assert_eq!(relative_age_label(ago(Duration::days(2)), now), "2d");
        // Clock skew: future timestamps read as fresh
        assert_eq!(relative_age_label(ago(Duration::minutes(-5)), now), "just now");
    }

    // ─── Panel Smoke Tests ───────────────────────────────────

    #[test]
    fn test_palette_panel_renders_without_selection() {
        let mut session = SessionMeta::new("s1", "w1");
        session.name = Some("One".to_string());
        session.last_message_at = Some(0);
        let sessions: SessionMap = [("s1".to_string(), session)].into_iter().collect();
        let workspaces = vec![WorkspaceOption::new("w1", "Alpha")];
        let model = build_model(&sessions, &[], &[], &workspaces, Some("w1"), None);

        let ctx = egui::Context::default();
        let mut picked = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                picked = palette_panel(ui, &model, Some("w1"), Utc::now());
            });
        });
        assert!(picked.is_none());
    }

    #[test]
    fn test_artifact_header_no_click_keeps_mode() {
        let mut state = ArtifactPanelState::new();
        state.set_artifact(Some(html("Page", "<p/>")));

        let ctx = egui::Context::default();
        let mut changed = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = artifact_header(ui, &mut state);
            });
        });
        assert!(!changed);
        assert_eq!(state.mode(), ViewMode::Preview);
    }
}
