//! Palette list: renders one computed `PaletteModel` group by group.
//!
//! Rendering never acts on a click. It returns the picked row so the caller
//! can run it through `validate_selection` against fresh snapshots first.

use chrono::{DateTime, Utc};
use egui::{self, RichText, ScrollArea, Vec2};
use palette_core::model::{PaletteModel, PaletteSelection};
use palette_core::settings::SettingPage;

use crate::state::relative_age_label;
use crate::theme::*;

/// Render the palette. Returns the row the user clicked this frame, if any.
pub fn palette_panel(
    ui: &mut egui::Ui,
    model: &PaletteModel<'_>,
    active_workspace_id: Option<&str>,
    now: DateTime<Utc>,
) -> Option<PaletteSelection> {
    let mut selected = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height(PALETTE_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if !model.has_any_results {
                        ui.label(
                            RichText::new("No results")
                                .color(TEXT_SECONDARY)
                                .italics(),
                        );
                    }

                    if !model.sessions.is_empty() {
                        group_heading(ui, "Sessions");
                        for session in &model.sessions {
                            let age = relative_age_label(session.last_message_at, now);
                            if result_row(ui, session.display_title(), &age) {
                                selected = Some(PaletteSelection::Session(session.id.clone()));
                            }
                        }
                    }

                    if !model.sources.is_empty() {
                        group_heading(ui, "Sources");
                        for source in &model.sources {
                            let detail = if source.enabled {
                                source.source_type.label().to_string()
                            } else {
                                format!("{} · disabled", source.source_type.label())
                            };
                            if result_row(ui, &source.name, &detail) {
                                selected = Some(PaletteSelection::Source(source.slug.clone()));
                            }
                        }
                    }

                    if !model.skills.is_empty() {
                        group_heading(ui, "Skills");
                        for skill in &model.skills {
                            if result_row(ui, &skill.metadata.name, skill.source.label()) {
                                selected = Some(PaletteSelection::Skill(skill.slug.clone()));
                            }
                        }
                    }

                    if !model.workspaces.is_empty() {
                        group_heading(ui, "Workspaces");
                        for workspace in &model.workspaces {
                            let marker = if active_workspace_id == Some(workspace.id.as_str()) {
                                "current"
                            } else {
                                ""
                            };
                            if result_row(ui, &workspace.name, marker) {
                                selected =
                                    Some(PaletteSelection::Workspace(workspace.id.clone()));
                            }
                        }
                    }

                    // Setting pages are static and always listed.
                    group_heading(ui, "Settings");
                    for page in SettingPage::all() {
                        if result_row(ui, page.label(), "") {
                            selected = Some(PaletteSelection::Settings(page.id().to_string()));
                        }
                    }
                });
        });

    selected
}

fn group_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).color(ACCENT).strong());
    ui.add_space(2.0);
}

/// One clickable row with an optional dimmed detail on the right.
fn result_row(ui: &mut egui::Ui, label: &str, detail: &str) -> bool {
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 80.0).max(120.0);
        let clicked = ui
            .add(
                egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(width, ROW_HEIGHT)),
            )
            .clicked();
        if !detail.is_empty() {
            ui.label(RichText::new(detail).color(TEXT_SECONDARY).small());
        }
        clicked
    })
    .inner
}
