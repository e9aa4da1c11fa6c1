//! Orbit camera around the model.
//!
//! Left-drag rotates around the target, the scroll wheel zooms.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::input::{ViewerAction, default_input_map};

/// Point the camera orbits around.
const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Initial camera position.
const START_POSITION: Vec3 = Vec3::new(-3.0, 2.0, 3.0);
/// Vertical field of view in degrees.
const FOV_DEGREES: f32 = 60.0;
/// Radians of rotation per pixel of mouse movement.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fractional zoom per scroll step.
const ZOOM_STEP: f32 = 0.1;
const MIN_RADIUS: f32 = 0.5;
const MAX_RADIUS: f32 = 50.0;
/// Keeps the camera from flipping over the poles.
const MAX_PITCH: f32 = 1.5;

/// Plugin for the orbit camera.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, orbit_camera);
    }
}

/// Spherical camera placement around a target.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Rotation around the vertical axis, in radians.
    pub yaw: f32,
    /// Elevation above the horizontal plane, in radians.
    pub pitch: f32,
}

impl OrbitCamera {
    /// Orbit parameters that place the camera at `position`.
    #[must_use]
    pub fn looking_at(target: Vec3, position: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    /// World-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Rotate by a mouse delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Zoom by scroll steps; positive values move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.radius = (self.radius * (1.0 - ZOOM_STEP).powf(steps)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::looking_at(ORBIT_TARGET, START_POSITION);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..Default::default()
        }),
        orbit.transform(),
        orbit,
        default_input_map(),
        ActionState::<ViewerAction>::default(),
    ));
}

/// Apply drag and scroll input to the orbit camera.
fn orbit_camera(mut query: Query<(&ActionState<ViewerAction>, &mut OrbitCamera, &mut Transform)>) {
    for (action_state, mut orbit, mut transform) in &mut query {
        let mut changed = false;

        if action_state.pressed(&ViewerAction::Drag) {
            let delta = action_state.axis_pair(&ViewerAction::Orbit);
            if delta != Vec2::ZERO {
                orbit.rotate(delta);
                changed = true;
            }
        }

        let scroll = action_state.value(&ViewerAction::Zoom);
        if scroll != 0.0 {
            orbit.zoom(scroll);
            changed = true;
        }

        if changed {
            *transform = orbit.transform();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looking_at_round_trip() {
        let orbit = OrbitCamera::looking_at(ORBIT_TARGET, START_POSITION);
        assert!((orbit.position() - START_POSITION).length() < 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::looking_at(ORBIT_TARGET, START_POSITION);
        orbit.rotate(Vec2::new(0.0, 1.0e6));
        assert!((orbit.pitch - MAX_PITCH).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::looking_at(ORBIT_TARGET, START_POSITION);
        let before = orbit.radius;
        orbit.zoom(1.0);
        assert!(orbit.radius < before);
        orbit.zoom(1.0e4);
        assert!((orbit.radius - MIN_RADIUS).abs() < f32::EPSILON);
        orbit.zoom(-1.0e4);
        assert!((orbit.radius - MAX_RADIUS).abs() < f32::EPSILON);
    }
}
