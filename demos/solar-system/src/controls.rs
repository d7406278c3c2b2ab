/// Drag-to-orbit and step zoom for the scene camera.
///
/// A drag across the full viewport height swings the eye a full turn around
/// the camera target; each zoom step scales the eye distance by
/// `ZOOM_STEP_SCALE`.

use std::f32::consts::TAU;

use glam::Vec2;
use orrery_engine::PerspectiveCamera;

pub const MIN_CAMERA_DISTANCE: f32 = 30.0;
pub const MAX_CAMERA_DISTANCE: f32 = 800.0;
/// Distance factor for one zoom-in step (one wheel notch).
pub const ZOOM_STEP_SCALE: f32 = 0.95;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitControls {
    /// Last pointer position while a drag is active.
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_from = Some(pointer);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Orbit by the pointer travel since the previous drag position.
    /// Returns true when the camera moved.
    pub fn drag_to(&mut self, camera: &mut PerspectiveCamera, pointer: Vec2, viewport_height: f32) -> bool {
        let Some(from) = self.drag_from.replace(pointer) else {
            return false;
        };
        if !(viewport_height > 0.0) {
            return false;
        }
        let delta = pointer - from;
        if delta == Vec2::ZERO {
            return false;
        }
        camera.orbit(-TAU * delta.x / viewport_height, -TAU * delta.y / viewport_height);
        true
    }

    /// Positive steps move the eye toward the target.
    pub fn zoom(&self, camera: &mut PerspectiveCamera, steps: f32) {
        if !steps.is_finite() {
            log::warn!("ignoring non-finite zoom {}", steps);
            return;
        }
        camera.dolly(ZOOM_STEP_SCALE.powf(steps), MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(45.0, 1.0, 0.1, 1000.0);
        cam.set_position(Vec3::new(0.0, 0.0, 200.0));
        cam
    }

    #[test]
    fn moves_only_while_dragging() {
        let mut controls = OrbitControls::new();
        let mut cam = camera();
        assert!(!controls.drag_to(&mut cam, Vec2::new(50.0, 0.0), 600.0));
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 200.0));

        controls.begin_drag(Vec2::ZERO);
        assert!(controls.drag_to(&mut cam, Vec2::new(150.0, 0.0), 600.0));
        assert_ne!(cam.position, Vec3::new(0.0, 0.0, 200.0));

        controls.end_drag();
        let parked = cam.position;
        assert!(!controls.drag_to(&mut cam, Vec2::new(300.0, 0.0), 600.0));
        assert_eq!(cam.position, parked);
    }

    #[test]
    fn quarter_height_drag_is_a_quarter_turn() {
        let mut controls = OrbitControls::new();
        let mut cam = camera();
        controls.begin_drag(Vec2::new(100.0, 100.0));
        // Dragging left turns the eye toward +X.
        controls.drag_to(&mut cam, Vec2::new(-50.0, 100.0), 600.0);
        assert!((cam.position - Vec3::new(200.0, 0.0, 0.0)).length() < 1e-2, "{}", cam.position);
    }

    #[test]
    fn zoom_steps_scale_distance_within_limits() {
        let controls = OrbitControls::new();
        let mut cam = camera();
        controls.zoom(&mut cam, 2.0);
        assert!((cam.distance() - 200.0 * 0.95 * 0.95).abs() < 1e-2);
        controls.zoom(&mut cam, 500.0);
        assert!((cam.distance() - MIN_CAMERA_DISTANCE).abs() < 1e-3);
        controls.zoom(&mut cam, -500.0);
        assert!((cam.distance() - MAX_CAMERA_DISTANCE).abs() < 1e-2);
        controls.zoom(&mut cam, f32::NAN);
        assert!((cam.distance() - MAX_CAMERA_DISTANCE).abs() < 1e-2);
    }
}
