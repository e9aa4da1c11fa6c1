//! Color editor for the selected part.

use bevy_egui::egui::{self, Color32, color_picker};
use configurator::{Action, PartColor};

use crate::store::Configurator;

/// Text state of the hex input field.
#[derive(Default)]
pub(super) struct HexInput {
    /// Part the text belongs to.
    part: String,
    /// Color the text was last filled from.
    shown: Option<PartColor>,
    text: String,
    error: Option<String>,
}

impl HexInput {
    /// Refill the field when the selection or the part's color changed since
    /// the last frame. Text being typed is kept otherwise.
    fn sync(&mut self, part: &str, current: Option<PartColor>) {
        if self.part == part && self.shown == current {
            return;
        }
        *self = Self {
            part: part.to_string(),
            shown: current,
            text: current.map(|c| c.to_string()).unwrap_or_default(),
            error: None,
        };
    }
}

fn to_color32(color: PartColor) -> Color32 {
    let [r, g, b] = color.to_array();
    Color32::from_rgb(r, g, b)
}

/// Render the floating color window, if a part is selected.
pub(super) fn render_color_window(
    ctx: &egui::Context,
    configurator: &Configurator,
    hex: &mut HexInput,
    actions: &mut Vec<Action>,
) {
    let state = &configurator.state;
    let Some(selected) = state.selection.selected() else {
        return;
    };
    let part = selected.as_str();
    let current = state.parts.color(part);

    hex.sync(part, current);

    egui::Window::new(format!("Color: {}", selected.display_label()))
        .id(egui::Id::new("color_editor"))
        .default_pos([320.0, 16.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let mut picked = current.map_or(Color32::WHITE, to_color32);
            if color_picker::color_picker_color32(ui, &mut picked, color_picker::Alpha::Opaque) {
                let color = PartColor::rgb(picked.r(), picked.g(), picked.b());
                hex.text = color.to_string();
                hex.error = None;
                actions.push(Action::SetColor {
                    part: part.to_string(),
                    color,
                });
            }

            let (_, submitted) = super::submit_field(ui, &mut hex.text, "apply", "#rrggbb");
            if submitted {
                match PartColor::parse_hex(&hex.text) {
                    Ok(color) => {
                        hex.error = None;
                        actions.push(Action::SetColor {
                            part: part.to_string(),
                            color,
                        });
                    }
                    Err(e) => hex.error = Some(e.to_string()),
                }
            }
            if let Some(error) = &hex.error {
                ui.colored_label(Color32::LIGHT_RED, error);
            }

            ui.horizontal(|ui| {
                let has_color = current.is_some();
                if ui.add_enabled(has_color, egui::Button::new("save")).clicked() {
                    actions.push(Action::SaveColorVariant(part.to_string()));
                }
                if ui.add_enabled(has_color, egui::Button::new("reset")).clicked() {
                    actions.push(Action::ClearColor(part.to_string()));
                }
                // Selecting the selected part again clears the selection.
                if ui.button("close").clicked() {
                    actions.push(Action::SelectPart(part.to_string()));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_input_follows_color_changes() {
        let red = PartColor::rgb(255, 0, 0);
        let blue = PartColor::rgb(0, 0, 255);
        let mut hex = HexInput::default();

        hex.sync("Cab", Some(red));
        assert_eq!(hex.text, "#ff0000");

        // Typing is kept while the color stays the same.
        hex.text = "#00".to_string();
        hex.sync("Cab", Some(red));
        assert_eq!(hex.text, "#00");

        // A swatch click changes the color without changing the selection.
        hex.sync("Cab", Some(blue));
        assert_eq!(hex.text, "#0000ff");

        hex.sync("Cab", None);
        assert!(hex.text.is_empty());

        hex.sync("Bucket", Some(red));
        assert_eq!(hex.text, "#ff0000");
    }
}
