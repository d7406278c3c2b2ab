/// Orbit/rotation updater: fixed angular increments per tick, no dynamics.

use crate::bodies::{wrap_angle, BodyRegistry, SUN_ROTATION_RATE};

/// Advance every spin and orbit angle by one tick. No-op while paused.
pub fn advance(registry: &mut BodyRegistry, paused: bool) {
    if paused {
        return;
    }
    for body in registry.bodies_mut() {
        body.self_angle = wrap_angle(body.self_angle + body.self_rotation_rate);
        body.orbital_angle = wrap_angle(body.orbital_angle + body.orbital_rate);
    }
    registry.sun_angle = wrap_angle(registry.sun_angle + SUN_ROTATION_RATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, MERCURY, PLANET_COUNT, SATURN};
    use std::f32::consts::TAU;

    fn registry() -> BodyRegistry {
        BodyRegistry::new([0.01; PLANET_COUNT])
    }

    #[test]
    fn angles_accumulate_rate_per_tick() {
        let mut reg = registry();
        for _ in 0..50 {
            advance(&mut reg, false);
        }
        let earth = &reg.bodies()[EARTH];
        assert!((earth.orbital_angle - 0.5).abs() < 1e-4, "earth = {}", earth.orbital_angle);
        assert!((earth.self_angle - 0.5).abs() < 1e-4);
        assert!((reg.sun_angle - 0.2).abs() < 1e-4);
    }

    #[test]
    fn angles_wrap_past_full_turn() {
        let mut reg = registry();
        // Mercury: 0.04 per tick, 200 ticks = 8 rad = one turn + 1.7168.
        for _ in 0..200 {
            advance(&mut reg, false);
        }
        let mercury = &reg.bodies()[MERCURY];
        assert!((0.0..TAU).contains(&mercury.orbital_angle));
        assert!((mercury.orbital_angle - (8.0 - TAU)).abs() < 1e-3);
    }

    #[test]
    fn paused_is_a_no_op() {
        let mut reg = registry();
        advance(&mut reg, false);
        let before = reg.clone();
        for _ in 0..10 {
            advance(&mut reg, true);
        }
        assert_eq!(reg, before);
    }

    #[test]
    fn resume_continues_without_catch_up() {
        let mut reg = registry();
        advance(&mut reg, false);
        for _ in 0..30 {
            advance(&mut reg, true);
        }
        advance(&mut reg, false);
        assert!((reg.bodies()[EARTH].orbital_angle - 0.02).abs() < 1e-6);
    }

    #[test]
    fn rate_change_applies_on_the_next_advance() {
        let mut reg = registry();
        advance(&mut reg, false);
        reg.set_orbital_rate(SATURN, 0.05);
        advance(&mut reg, false);
        let saturn = &reg.bodies()[SATURN];
        assert!((saturn.orbital_angle - (0.00029 + 0.05)).abs() < 1e-6);
    }
}
