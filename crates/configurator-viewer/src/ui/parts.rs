//! Scene panel: part visibility, selection, color swatches and the group draft.

use bevy_egui::egui;
use configurator::{Action, Error};

use crate::store::Configurator;

/// Render the part list and the group being built.
pub(super) fn render_parts_panel(
    ui: &mut egui::Ui,
    configurator: &Configurator,
    actions: &mut Vec<Action>,
) {
    let state = &configurator.state;

    ui.heading("Scene");
    ui.separator();

    if !state.parts.is_initialized() {
        if configurator.status.as_ref().is_some_and(Error::is_load) {
            ui.label("Model failed to load.");
        } else {
            ui.label("Loading model…");
        }
        return;
    }
    if state.parts.is_empty() {
        ui.label("The model has no named parts.");
        return;
    }

    ui.horizontal(|ui| {
        if ui.button("Show all").clicked() {
            actions.push(Action::ShowAll);
        }
        if ui.button("Hide all").clicked() {
            actions.push(Action::HideAll);
        }
    });
    ui.add_space(4.0);

    for part in state.parts.iter() {
        let name = part.name.as_str();
        ui.horizontal(|ui| {
            super::part_checkbox(ui, name, part.visible, "", actions);

            let selected = state.selection.is_selected(name);
            let label = egui::RichText::new(part.name.display_label());
            let label = if selected { label.strong() } else { label };
            if ui.selectable_label(selected, label).clicked() {
                actions.push(Action::SelectPart(name.to_string()));
            }

            let in_draft = state.draft.contains(name);
            if ui.small_button(if in_draft { "remove" } else { "add" }).clicked() {
                actions.push(Action::ToggleDraftMembership(name.to_string()));
            }
        });

        let history = state.color_history.get(name);
        if !history.is_empty() {
            ui.horizontal_wrapped(|ui| {
                ui.add_space(24.0);
                for (index, &color) in history.iter().enumerate() {
                    if super::swatch(ui, color).clicked() {
                        actions.push(Action::ApplyColorVariant {
                            part: name.to_string(),
                            index,
                        });
                    }
                }
            });
        }
    }

    render_group_draft(ui, configurator, actions);
}

/// The draft group, shown once it has at least one part.
fn render_group_draft(ui: &mut egui::Ui, configurator: &Configurator, actions: &mut Vec<Action>) {
    let draft = &configurator.state.draft;
    if draft.parts().is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new("New variant group").strong());
    for part in draft.parts() {
        ui.label(format!("• {}", part.display_label()));
    }

    let mut name = draft.name.clone();
    let (edited, submitted) = super::submit_field(ui, &mut name, "Create", "Group name");
    if edited {
        actions.push(Action::SetDraftName(name));
    }
    if submitted {
        actions.push(Action::CommitGroup);
    }
}
