use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::systems::picking::Ray;

/// Keeps orbiting clear of the poles, where the look-at basis degenerates.
const POLAR_EPSILON: f32 = 1e-3;

/// Perspective camera looking at a target point.
/// Mirrors the parameters the browser renderer uses, so rays built here
/// line up with what the user sees.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(45.0, 1.0, 0.1, 1000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_deg,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    /// Move the eye, keeping the current target.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Swing the eye around the target on its current sphere.
    ///
    /// `delta_azimuth` turns about +Y (azimuth measured from +Z toward +X);
    /// `delta_polar` tilts away from +Y. The polar angle is clamped short of
    /// both poles.
    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let azimuth = offset.x.atan2(offset.z) + delta_azimuth;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() + delta_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.position = self.target
            + radius
                * Vec3::new(
                    polar.sin() * azimuth.sin(),
                    polar.cos(),
                    polar.sin() * azimuth.cos(),
                );
    }

    /// Scale the eye's distance to the target, clamped to `[min, max]`.
    pub fn dolly(&mut self, scale: f32, min_distance: f32, max_distance: f32) {
        let offset = self.position - self.target;
        let radius = self.distance();
        if radius <= f32::EPSILON || !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let target_radius = (radius * scale).clamp(min_distance, max_distance);
        self.position = self.target + offset * (target_radius / radius);
    }

    /// Recompute aspect from a viewport size.
    /// Returns false (and leaves the camera untouched) for degenerate sizes.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) -> bool {
        if !(viewport_width > 0.0 && viewport_height > 0.0) {
            return false;
        }
        self.aspect = viewport_width / viewport_height;
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// OpenGL-style projection (NDC z in [-1, 1]), matching WebGL renderers.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Build a world-space ray from the eye through a normalized device coordinate.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let through = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.position, through - self.position)
    }

    /// Project a world-space point to NDC. Points behind the eye return None.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// Convert client-space pixels to normalized device coordinates.
/// Y is flipped: the top of the viewport maps to +1.
pub fn pixels_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return None;
    }
    Some(Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(45.0, 16.0 / 9.0, 0.1, 1000.0);
        cam.set_position(Vec3::new(-90.0, 140.0, 140.0));
        cam.look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.position).normalize();
        assert!((ray.direction - expected).length() < 1e-4);
        assert!((ray.origin - cam.position).length() < 1e-6);
    }

    #[test]
    fn projected_point_round_trips_through_ray() {
        let cam = camera();
        let point = Vec3::new(62.0, 0.0, 0.0);
        let ndc = cam.project(point).unwrap();
        let ray = cam.ray_from_ndc(ndc.truncate());
        let to_point = (point - ray.origin).normalize();
        assert!((ray.direction - to_point).length() < 1e-3);
    }

    #[test]
    fn resize_rejects_zero_sizes() {
        let mut cam = camera();
        let before = cam.aspect;
        assert!(!cam.resize(0.0, 600.0));
        assert!(!cam.resize(800.0, 0.0));
        assert_eq!(cam.aspect, before);
        assert!(cam.resize(800.0, 400.0));
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn orbit_keeps_distance_and_target() {
        let mut cam = camera();
        let distance = cam.distance();
        cam.orbit(0.7, -0.2);
        assert!((cam.distance() - distance).abs() < 1e-2);
        assert_ne!(cam.position, Vec3::new(-90.0, 140.0, 140.0));

        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert!((ray.direction - (cam.target - cam.position).normalize()).length() < 1e-4);
    }

    #[test]
    fn orbit_azimuth_turns_about_y() {
        let mut cam = camera();
        cam.set_position(Vec3::new(0.0, 0.0, 100.0));
        cam.orbit(std::f32::consts::FRAC_PI_2, 0.0);
        assert!((cam.position - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3, "{}", cam.position);
    }

    #[test]
    fn orbit_stops_short_of_the_poles() {
        let mut cam = camera();
        cam.orbit(0.0, -10.0);
        let offset = cam.position - cam.target;
        assert!(offset.y > 0.0);
        assert!(Vec2::new(offset.x, offset.z).length() > 0.1);

        cam.orbit(0.0, 20.0);
        let offset = cam.position - cam.target;
        assert!(offset.y < 0.0);
        assert!(Vec2::new(offset.x, offset.z).length() > 0.1);
    }

    #[test]
    fn dolly_scales_and_clamps_distance() {
        let mut cam = camera();
        cam.set_position(Vec3::new(0.0, 0.0, 100.0));
        cam.dolly(0.5, 10.0, 500.0);
        assert!((cam.distance() - 50.0).abs() < 1e-3);
        cam.dolly(0.01, 10.0, 500.0);
        assert!((cam.distance() - 10.0).abs() < 1e-3);
        cam.dolly(1000.0, 10.0, 500.0);
        assert!((cam.distance() - 500.0).abs() < 1e-2);
        cam.dolly(f32::NAN, 10.0, 500.0);
        assert!((cam.distance() - 500.0).abs() < 1e-2);
    }

    #[test]
    fn pixels_to_ndc_flips_y() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pixels_to_ndc(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(pixels_to_ndc(Vec2::new(0.0, 0.0), viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pixels_to_ndc(Vec2::new(800.0, 600.0), viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(pixels_to_ndc(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }
}
