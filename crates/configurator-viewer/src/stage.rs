//! Lighting, background and ground grid around the model.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Sky color used as the clear color.
const SKY_COLOR: Color = Color::srgb(0.62, 0.78, 0.93);
/// Height of the ground grid, just below the model's wheels.
const GRID_HEIGHT: f32 = -0.045;
/// Grid lines per side.
const GRID_CELLS: u32 = 60;
/// Grid cell size in meters.
const GRID_SPACING: f32 = 0.5;

/// Plugin for the static stage the model sits on.
pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR))
            .add_systems(Startup, spawn_lights)
            .add_systems(Update, draw_grid);
    }
}

/// Key light from above, fill light from the opposite side.
fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            ..default()
        },
        Transform::from_xyz(-4.0, 3.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn draw_grid(mut gizmos: Gizmos) {
    gizmos.grid(
        Isometry3d::new(
            Vec3::new(0.0, GRID_HEIGHT, 0.0),
            Quat::from_rotation_x(FRAC_PI_2),
        ),
        UVec2::splat(GRID_CELLS),
        Vec2::splat(GRID_SPACING),
        Color::BLACK.with_alpha(0.35),
    );
}
