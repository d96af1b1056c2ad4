//! Header strip of the artifact side panel: title, type badge, and the
//! Preview/Code switch for artifacts that have a code view.

use egui::{self, Align, Layout, RichText, Vec2};
use palette_core::view_mode::ViewMode;

use crate::state::ArtifactPanelState;
use crate::theme::*;

/// Render the header. Returns true if the view mode changed this frame.
pub fn artifact_header(ui: &mut egui::Ui, state: &mut ArtifactPanelState) -> bool {
    let Some(artifact) = state.artifact() else {
        ui.label(
            RichText::new("Nothing selected")
                .color(TEXT_SECONDARY)
                .italics(),
        );
        return false;
    };

    let title = artifact.title().to_string();
    let badge = artifact.type_label();
    let show_toggle = state.can_toggle();
    let current = state.mode();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.heading(RichText::new(title).color(TEXT_PRIMARY).strong());
        if let Some(badge) = badge {
            ui.label(RichText::new(badge).color(WARNING).small());
        }

        if show_toggle {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // right_to_left: last drawn is leftmost
                for mode in [ViewMode::Code, ViewMode::Preview] {
                    let fill = if mode == current { ACCENT } else { BG_SURFACE };
                    let clicked = ui
                        .add(
                            egui::Button::new(RichText::new(mode.label()).color(TEXT_PRIMARY))
                                .fill(fill)
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(64.0, ROW_HEIGHT)),
                        )
                        .clicked();
                    if clicked && mode != current {
                        changed = state.set_mode(mode);
                    }
                }
            });
        }
    });

    changed
}
