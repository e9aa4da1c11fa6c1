//! Input action definitions and focus management.
//!
//! Defines viewer actions using `leafwing-input-manager` and disables the
//! viewport actions while egui is using the pointer or keyboard.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use leafwing_input_manager::{plugin::InputManagerSystem, prelude::*};

/// Actions for the orbit camera and UI.
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum ViewerAction {
    /// Mouse movement (used while dragging).
    #[actionlike(DualAxis)]
    Orbit,
    /// Hold to orbit (left mouse button).
    Drag,
    /// Zoom in/out with the scroll wheel.
    #[actionlike(Axis)]
    Zoom,
    /// Toggle UI visibility (H).
    ToggleUi,
}

/// Create the default input map for viewer actions.
pub fn default_input_map() -> InputMap<ViewerAction> {
    InputMap::default()
        .with_dual_axis(ViewerAction::Orbit, MouseMove::default())
        .with(ViewerAction::Drag, MouseButton::Left)
        .with_axis(ViewerAction::Zoom, MouseScrollAxis::Y)
        .with(ViewerAction::ToggleUi, KeyCode::KeyH)
}

/// Pointer-bound actions, disabled while egui wants the pointer.
const POINTER_ACTIONS: &[ViewerAction] =
    &[ViewerAction::Orbit, ViewerAction::Drag, ViewerAction::Zoom];

/// Plugin that registers viewer actions and input focus management.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<ViewerAction>::default())
            .add_systems(
                PreUpdate,
                manage_input_focus.after(InputManagerSystem::Update),
            );
    }
}

/// Keep the viewport from reacting to clicks, scrolls and keys meant for the UI.
fn manage_input_focus(
    mut query: Query<&mut ActionState<ViewerAction>>,
    mut contexts: EguiContexts,
) {
    let (egui_wants_pointer, egui_wants_kb) = contexts.ctx_mut().ok().map_or(
        (false, false),
        |ctx| {
            (
                ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
                ctx.wants_keyboard_input(),
            )
        },
    );

    for mut action_state in &mut query {
        // Keep an in-progress drag alive when the pointer crosses a panel.
        let dragging = action_state.pressed(&ViewerAction::Drag);
        for action in POINTER_ACTIONS {
            if egui_wants_pointer && !dragging {
                action_state.disable_action(action);
            } else {
                action_state.enable_action(action);
            }
        }

        if egui_wants_kb {
            action_state.disable_action(&ViewerAction::ToggleUi);
        } else {
            action_state.enable_action(&ViewerAction::ToggleUi);
        }
    }
}
