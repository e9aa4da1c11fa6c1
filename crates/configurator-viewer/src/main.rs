//! 3D part configurator for glTF models using Bevy.
//!
//! Loads a vehicle model, lists its top-level parts, and lets the user toggle
//! visibility, assign colors, build groups of parts and save per-group
//! visibility variants. All state is kept in memory.

mod appearance;
mod camera;
mod input;
mod launch_params;
mod model;
mod stage;
mod store;
mod ui;

use appearance::AppearancePlugin;
use bevy::prelude::*;
use camera::OrbitCameraPlugin;
use input::InputPlugin;
use model::ModelPlugin;
use stage::StagePlugin;
use store::StorePlugin;
use ui::ConfiguratorUiPlugin;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            StorePlugin,
            InputPlugin,
            OrbitCameraPlugin,
            StagePlugin,
            ModelPlugin,
            AppearancePlugin,
            ConfiguratorUiPlugin,
        ));
    }
}

fn main() {
    // Initialize tracing for native platforms.
    #[cfg(not(target_family = "wasm"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    // Initialize tracing for WASM (logs to browser console).
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let params = launch_params::parse();
    tracing::info!("Starting configurator with {params:?}");

    let mut app = App::new();

    #[allow(unused_mut)]
    let mut window = Window {
        title: "configurator".to_string(),
        resolution: (params.width, params.height).into(),
        position: WindowPosition::Centered(MonitorSelection::Primary),
        ..Default::default()
    };

    // WASM: Fit canvas to parent element and prevent browser event handling.
    #[cfg(target_family = "wasm")]
    {
        window.fit_canvas_to_parent = true;
        window.prevent_default_event_handling = true;
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    app.insert_resource(params).add_plugins(AppPlugin).run();
}
