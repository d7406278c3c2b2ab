//! Ray picking against bounding spheres.

use glam::Vec3;

/// Half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized; a zero direction stays zero and never hits.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

/// Bounding sphere used as a pick target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance along the ray to the first surface hit in front of the origin.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Closest hit of a pick query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Position of the target in the iterator passed to `pick_nearest`.
    pub index: usize,
    pub distance: f32,
}

/// Test every target and return the nearest intersection, if any.
pub fn pick_nearest(ray: &Ray, targets: impl IntoIterator<Item = Sphere>) -> Option<PickHit> {
    targets
        .into_iter()
        .enumerate()
        .filter_map(|(index, sphere)| sphere.intersect(ray).map(|distance| PickHit { index, distance }))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
