//! Orbit camera around the built footprint.

use bevy::prelude::*;

/// Orbit speed in radians per second.
const ORBIT_SPEED: f32 = 1.2;
/// Zoom rate as a fraction of the distance per second.
const ZOOM_RATE: f32 = 1.5;
/// Pitch is kept away from the poles to avoid flipping.
const MAX_PITCH: f32 = 1.5;

/// Plugin for keyboard orbit controls.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orbit_camera);
    }
}

/// Camera orbiting a focus point.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Orbit `focus` from `distance`, looking down at it diagonally.
    #[must_use]
    pub fn new(focus: Vec3, distance: f32) -> Self {
        Self {
            focus,
            distance,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.6,
        }
    }

    /// Camera transform for the current orbit state.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }
}

/// Arrow keys orbit, PageUp/PageDown zoom.
#[allow(clippy::needless_pass_by_value)]
fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let dt = time.delta_secs();

    let axis = |negative: KeyCode, positive: KeyCode| -> f32 {
        f32::from(u8::from(keys.pressed(positive))) - f32::from(u8::from(keys.pressed(negative)))
    };
    let yaw = axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
    let pitch = axis(KeyCode::ArrowDown, KeyCode::ArrowUp);
    let zoom = axis(KeyCode::PageUp, KeyCode::PageDown);

    if yaw == 0.0 && pitch == 0.0 && zoom == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        orbit.yaw += yaw * ORBIT_SPEED * dt;
        orbit.pitch = (orbit.pitch + pitch * ORBIT_SPEED * dt).clamp(-MAX_PITCH, MAX_PITCH);
        orbit.distance = (orbit.distance * (1.0 + zoom * ZOOM_RATE * dt)).max(1.0);
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_keeps_distance() {
        let orbit = OrbitCamera::new(Vec3::new(10.0, 0.0, -5.0), 20.0);
        let transform = orbit.transform();
        let distance = transform.translation.distance(orbit.focus);
        assert!((distance - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_transform_looks_at_focus() {
        let orbit = OrbitCamera::new(Vec3::ZERO, 10.0);
        let transform = orbit.transform();
        let to_focus = (orbit.focus - transform.translation).normalize();
        assert!(transform.forward().dot(to_focus) > 0.999);
    }
}
