//! Groups panel: member visibility, saving variants and applying them.

use std::collections::HashMap;

use bevy_egui::egui;
use configurator::Action;

use crate::store::Configurator;

/// Render every committed group.
pub(super) fn render_groups_panel(
    ui: &mut egui::Ui,
    configurator: &Configurator,
    variant_inputs: &mut HashMap<String, String>,
    actions: &mut Vec<Action>,
) {
    let state = &configurator.state;

    ui.heading("Groups");
    ui.separator();

    if state.groups.is_empty() {
        ui.weak("Add parts from the scene list and name them to create a group.");
        return;
    }

    for group in state.groups.iter() {
        let group_name = group.name().as_str();

        egui::CollapsingHeader::new(egui::RichText::new(group_name).strong())
            .id_salt(("group", group_name))
            .default_open(true)
            .show(ui, |ui| {
                for part in group.parts() {
                    let visible = state.parts.is_visible(part.as_str()).unwrap_or(false);
                    super::part_checkbox(
                        ui,
                        part.as_str(),
                        visible,
                        &part.display_label(),
                        actions,
                    );
                }

                let input = variant_inputs.entry(group_name.to_string()).or_default();
                let (_, submitted) = super::submit_field(ui, input, "save state", "Variant name");
                if submitted {
                    actions.push(Action::SaveVariant {
                        group: group_name.to_string(),
                        name: std::mem::take(input),
                    });
                }

                let variants = state.variants.variants(group_name);
                if !variants.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for (index, variant) in variants.iter().enumerate() {
                            if ui.button(variant.name.as_str()).clicked() {
                                actions.push(Action::ApplyVariant {
                                    group: group_name.to_string(),
                                    index,
                                });
                            }
                        }
                    });
                }
            });
    }
}
