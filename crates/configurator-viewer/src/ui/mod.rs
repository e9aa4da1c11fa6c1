//! Side panels for configuring the model.
//!
//! The left panel lists scene parts and the group being built, the right
//! panel lists committed groups and their variants, and a floating window
//! holds the color editor for the selected part.

mod color;
mod groups;
mod parts;

use std::collections::HashMap;

use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::SystemParam,
    prelude::*,
};
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use configurator::{Action, PartColor};
use leafwing_input_manager::prelude::*;

use crate::{
    input::ViewerAction,
    model::ModelRequests,
    store::{Configurator, PendingActions},
};

/// Resource controlling whether the panels are visible.
#[derive(Resource)]
pub struct UiVisible(pub bool);

impl Default for UiVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// Text typed into the panels' input fields.
#[derive(Default)]
struct TextInputs {
    /// Variant name field per group.
    variant_names: HashMap<String, String>,
    hex: color::HexInput,
}

/// Plugin for the configurator UI.
pub struct ConfiguratorUiPlugin;

impl Plugin for ConfiguratorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .init_resource::<UiVisible>()
            .add_systems(Update, toggle_ui_visible)
            .add_systems(
                EguiPrimaryContextPass,
                configurator_ui_system.run_if(|visible: Res<UiVisible>| visible.0),
            );
    }
}

/// Resources shared by every panel.
#[derive(SystemParam)]
struct UiParams<'w, 's> {
    configurator: Res<'w, Configurator>,
    pending: ResMut<'w, PendingActions>,
    model_requests: ResMut<'w, ModelRequests>,
    inputs: Local<'s, TextInputs>,
    diagnostics: Res<'w, DiagnosticsStore>,
}

/// Toggle UI visibility with H.
fn toggle_ui_visible(
    action_query: Query<&ActionState<ViewerAction>>,
    mut visible: ResMut<UiVisible>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    if action_state.just_pressed(&ViewerAction::ToggleUi) {
        visible.0 = !visible.0;
    }
}

/// Render all configurator panels.
fn configurator_ui_system(mut contexts: EguiContexts, mut params: UiParams) -> Result {
    let ctx = contexts.ctx_mut()?;
    let mut actions = Vec::new();

    egui::SidePanel::left("scene")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                parts::render_parts_panel(ui, &params.configurator, &mut actions);
            });
        });

    egui::SidePanel::right("groups")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                groups::render_groups_panel(
                    ui,
                    &params.configurator,
                    &mut params.inputs.variant_names,
                    &mut actions,
                );
            });
        });

    color::render_color_window(
        ctx,
        &params.configurator,
        &mut params.inputs.hex,
        &mut actions,
    );

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        render_status_bar(ui, &mut params);
    });

    for action in actions {
        params.pending.push(action);
    }

    Ok(())
}

/// Last rejection (with a retry button for load failures) and frame rate.
fn render_status_bar(ui: &mut egui::Ui, params: &mut UiParams) {
    ui.horizontal(|ui| {
        let fps = params
            .diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(bevy::diagnostic::Diagnostic::smoothed)
            .unwrap_or(0.0);
        ui.label(format!("{fps:.0} FPS"));
        ui.separator();

        match &params.configurator.status {
            Some(error) => {
                ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
                if error.is_load() && ui.button("Retry").clicked() {
                    params.model_requests.request_retry();
                }
            }
            None => {
                ui.weak("H hides the panels, drag to orbit, scroll to zoom");
            }
        }
    });
}

/// A clickable color swatch.
fn swatch(ui: &mut egui::Ui, color: PartColor) -> egui::Response {
    let [r, g, b] = color.to_array();
    ui.add(
        egui::Button::new("")
            .fill(egui::Color32::from_rgb(r, g, b))
            .min_size(egui::vec2(18.0, 18.0)),
    )
    .on_hover_text(color.to_string())
}

/// A single-line text field with a submit button.
///
/// Returns `(edited, submitted)`; Enter in the field also submits.
fn submit_field(
    ui: &mut egui::Ui,
    text: &mut String,
    button: &str,
    hint: &str,
) -> (bool, bool) {
    let mut submitted = false;
    let mut edited = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .desired_width(140.0),
        );
        edited = response.changed();
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
        if ui.button(button).clicked() {
            submitted = true;
        }
    });
    (edited, submitted)
}

/// Convenience for pushing a visibility toggle from a checkbox.
fn part_checkbox(
    ui: &mut egui::Ui,
    name: &str,
    visible: bool,
    label: &str,
    actions: &mut Vec<Action>,
) {
    let mut checked = visible;
    if ui.checkbox(&mut checked, label).changed() {
        actions.push(Action::TogglePart(name.to_string()));
    }
}
