/// Celestial body table and the per-body orbit state the updater mutates.
///
/// Distances and radii are scene units, not astronomical ones; the layout is
/// tuned so all nine planets fit the default camera.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use orrery_engine::Sphere;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLUTO: usize = 8;
pub const PLANET_COUNT: usize = 9;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 16.0;
pub const SUN_TEXTURE: &str = "sun";
/// Sun spin per tick (radians).
pub const SUN_ROTATION_RATE: f32 = 0.004;

// ── Orbital-rate slider bounds ───────────────────────────────────────

pub const MIN_ORBITAL_RATE: f32 = 0.0;
pub const MAX_ORBITAL_RATE: f32 = 0.05;
pub const ORBITAL_RATE_STEP: f32 = 0.0001;

// ── Planets ──────────────────────────────────────────────────────────

/// Flat ring around a planet, in the planet's equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner: f32,
    pub outer: f32,
    pub texture: &'static str,
}

/// Static description of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub texture: &'static str,
    pub radius: f32,
    /// Distance from the sun to the planet center.
    pub distance: f32,
    /// Initial orbital increment per tick (radians).
    pub orbital_rate: f32,
    pub ring: Option<RingSpec>,
}

/// Planet table (indexed by planet constant).
pub const BODIES: [BodySpec; PLANET_COUNT] = [
    BodySpec { name: "Mercury", texture: "mercury", radius: 3.2,  distance: 28.0,  orbital_rate: 0.04,    ring: None },
    BodySpec { name: "Venus",   texture: "venus",   radius: 5.8,  distance: 44.0,  orbital_rate: 0.015,   ring: None },
    BodySpec { name: "Earth",   texture: "earth",   radius: 6.0,  distance: 62.0,  orbital_rate: 0.01,    ring: None },
    BodySpec { name: "Mars",    texture: "mars",    radius: 4.0,  distance: 78.0,  orbital_rate: 0.008,   ring: None },
    BodySpec { name: "Jupiter", texture: "jupiter", radius: 12.0, distance: 100.0, orbital_rate: 0.002,   ring: None },
    BodySpec {
        name: "Saturn", texture: "saturn", radius: 10.0, distance: 138.0, orbital_rate: 0.00029,
        ring: Some(RingSpec { inner: 10.0, outer: 20.0, texture: "saturn_ring" }),
    },
    BodySpec {
        name: "Uranus", texture: "uranus", radius: 7.0, distance: 176.0, orbital_rate: 0.00034,
        ring: Some(RingSpec { inner: 7.0, outer: 12.0, texture: "uranus_ring" }),
    },
    BodySpec { name: "Neptune", texture: "neptune", radius: 7.0,  distance: 200.0, orbital_rate: 0.00051, ring: None },
    BodySpec { name: "Pluto",   texture: "pluto",   radius: 2.8,  distance: 216.0, orbital_rate: 0.00067, ring: None },
];

/// Every texture name the scene binds, sun first.
pub fn required_textures() -> Vec<&'static str> {
    let mut names = vec![SUN_TEXTURE];
    for spec in &BODIES {
        names.push(spec.texture);
        if let Some(ring) = spec.ring {
            names.push(ring.texture);
        }
    }
    names
}

/// Wrap an angle into [0, 2π).
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// A planet and its live orbit state.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    pub self_rotation_rate: f32,
    pub orbital_rate: f32,
    pub self_angle: f32,
    pub orbital_angle: f32,
    pub ring: Option<RingSpec>,
}

impl CelestialBody {
    pub fn from_spec(spec: &BodySpec, self_rotation_rate: f32) -> Self {
        Self {
            name: spec.name,
            radius: spec.radius,
            distance: spec.distance,
            self_rotation_rate,
            orbital_rate: spec.orbital_rate,
            self_angle: 0.0,
            orbital_angle: 0.0,
            ring: spec.ring,
        }
    }

    /// Orbit pivot rotation about +Y.
    pub fn orbit_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orbital_angle)
    }

    /// Center of the planet: `(d·cos θ, 0, −d·sin θ)`.
    pub fn world_position(&self) -> Vec3 {
        self.orbit_rotation() * Vec3::new(self.distance, 0.0, 0.0)
    }

    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.world_position(), self.radius)
    }
}

/// Owns the nine planets plus the sun's spin angle.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    pub sun_angle: f32,
}

impl BodyRegistry {
    /// Build the registry with one self-rotation rate per planet.
    pub fn new(self_rotation_rates: [f32; PLANET_COUNT]) -> Self {
        let bodies = BODIES
            .iter()
            .zip(self_rotation_rates)
            .map(|(spec, rate)| CelestialBody::from_spec(spec, rate))
            .collect();
        Self { bodies, sun_angle: 0.0 }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [CelestialBody] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Set a planet's orbital rate, clamped to the slider range.
    /// Returns the applied rate, or None when the input was rejected.
    pub fn set_orbital_rate(&mut self, index: usize, rate: f32) -> Option<f32> {
        if !rate.is_finite() {
            log::warn!("ignoring non-finite orbital rate for body {}", index);
            return None;
        }
        let Some(body) = self.bodies.get_mut(index) else {
            log::warn!("ignoring orbital rate for unknown body {}", index);
            return None;
        };
        let applied = rate.clamp(MIN_ORBITAL_RATE, MAX_ORBITAL_RATE);
        if applied != rate {
            log::debug!("{}: orbital rate {} clamped to {}", body.name, rate, applied);
        }
        body.orbital_rate = applied;
        Some(applied)
    }

    /// Bounding spheres of every planet, in registry order.
    pub fn bounding_spheres(&self) -> impl Iterator<Item = Sphere> + '_ {
        self.bodies.iter().map(CelestialBody::bounding_sphere)
    }
}
