//! Launch parameter parsing for the viewer.
//!
//! On native, parameters are parsed from command-line arguments using clap.
//! On WASM, defaults are used (CLI argument parsing is not available).

use bevy::prelude::*;

/// Default model asset path, relative to the asset directory.
const DEFAULT_MODEL: &str = "models/vehicle.gltf";
/// Default window width in logical pixels.
const DEFAULT_WIDTH: u32 = 1600;
/// Default window height in logical pixels.
const DEFAULT_HEIGHT: u32 = 900;

/// Launch parameters for the viewer.
#[derive(Resource, Debug, Clone)]
pub struct LaunchParams {
    /// glTF asset to configure.
    pub model: String,
    /// Index of the glTF scene to spawn.
    pub scene: usize,
    /// Window width.
    pub width: u32,
    /// Window height.
    pub height: u32,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            scene: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(not(target_family = "wasm"))]
mod native {
    use clap::Parser;

    use super::*;

    /// Parse a window dimension, rejecting zero.
    pub(super) fn parse_dimension(s: &str) -> Result<u32, String> {
        let value = s
            .parse::<u32>()
            .map_err(|e| format!("invalid size '{s}': {e}"))?;
        if value == 0 {
            return Err("size must be greater than zero".to_string());
        }
        Ok(value)
    }

    #[derive(Parser)]
    #[command(about = "Toggle, color and snapshot the parts of a glTF model")]
    struct CliArgs {
        /// Model asset path, relative to the asset directory.
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// glTF scene index to spawn.
        #[arg(long, default_value_t = 0)]
        scene: usize,

        /// Window width in pixels.
        #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
        width: u32,

        /// Window height in pixels.
        #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
        height: u32,
    }

    pub fn parse() -> LaunchParams {
        let args = CliArgs::parse();
        LaunchParams {
            model: args.model,
            scene: args.scene,
            width: args.width,
            height: args.height,
        }
    }
}

/// Parse launch parameters from CLI args (native) or use defaults (WASM).
pub fn parse() -> LaunchParams {
    #[cfg(not(target_family = "wasm"))]
    {
        native::parse()
    }
    #[cfg(target_family = "wasm")]
    {
        LaunchParams::default()
    }
}
