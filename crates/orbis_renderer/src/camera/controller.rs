//! Orbit camera controller: drag to rotate around the target, scroll to
//! zoom.  Driven by raw mouse deltas from the window shell.

use glam::{Mat3, Vec3};

use super::Camera;

#[derive(Debug, Clone)]
pub struct OrbitController {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    /// Radians of orbit per pixel of drag.
    pub sensitivity: f32,
    /// Distance change per scroll step.
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 4.0,
            sensitivity: 0.005,
            zoom_step: 0.25,
            min_distance: 1.2,
            max_distance: 30.0,
        }
    }
}

impl OrbitController {
    /// Applies a drag delta in pixels and repositions the camera eye.
    pub fn rotate(&mut self, dx: f32, dy: f32, camera: &mut Camera) {
        self.yaw -= dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;

        // Stop just short of the poles so look_at keeps a usable up vector.
        const LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-LIMIT, LIMIT);

        self.apply(camera);
    }

    /// Applies `steps` scroll ticks (positive = zoom in).
    pub fn zoom(&mut self, steps: f32, camera: &mut Camera) {
        self.distance =
            (self.distance - steps * self.zoom_step).clamp(self.min_distance, self.max_distance);
        self.apply(camera);
    }

    /// Recomputes the eye position from yaw/pitch/distance.
    pub fn apply(&self, camera: &mut Camera) {
        let rot = Mat3::from_euler(glam::EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        camera.eye = camera.target + rot * Vec3::new(0.0, 0.0, self.distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_respects_distance_limits() {
        let mut camera = Camera::default();
        let mut orbit = OrbitController::default();

        orbit.zoom(1000.0, &mut camera);
        assert_eq!(orbit.distance, orbit.min_distance);

        orbit.zoom(-1000.0, &mut camera);
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut camera = Camera::default();
        let mut orbit = OrbitController::default();

        orbit.rotate(0.0, -1e6, &mut camera);
        assert!(orbit.pitch < std::f32::consts::FRAC_PI_2);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn orbit_preserves_distance_to_target() {
        let mut camera = Camera::default();
        let mut orbit = OrbitController::default();

        orbit.rotate(123.0, -45.0, &mut camera);
        let d = (camera.eye - camera.target).length();
        assert!((d - orbit.distance).abs() < 1e-4);
    }
}
