//! Actor physics: gravity, jump impulse and the ceiling clamp

use super::state::Actor;
use crate::tuning::Tuning;

/// Amplitude (degrees) of the hover wobble during grace
const HOVER_WOBBLE_DEG: f32 = 5.0;
/// Period divisor (ms) of the hover wobble
const HOVER_WOBBLE_MS: f64 = 100.0;

/// Advance the actor by one tick
///
/// While `grace_ticks > 0` gravity is suppressed and the rotation hovers
/// around level; afterwards velocity accumulates gravity and the nose tips
/// down one degree per tick up to `max_rotation`.
pub fn advance(actor: &mut Actor, grace_ticks: &mut u32, tuning: &Tuning, now_ms: f64) {
    if *grace_ticks > 0 {
        *grace_ticks -= 1;
        actor.rotation = ((now_ms / HOVER_WOBBLE_MS).sin() as f32) * HOVER_WOBBLE_DEG;
    } else {
        actor.velocity += tuning.gravity;
        actor.rotation = (actor.rotation + 1.0).min(tuning.max_rotation);
    }

    actor.pos.y += actor.velocity;

    // Ceiling is a clamp, not a collision
    let half_height = actor.size.y / 2.0;
    if actor.pos.y - half_height < 0.0 {
        actor.pos.y = half_height;
        actor.velocity = 0.0;
    }
}

/// Apply a jump: velocity is overridden, not accumulated
pub fn jump(actor: &mut Actor, grace_ticks: &mut u32, tuning: &Tuning) {
    actor.velocity = tuning.jump_impulse;
    actor.rotation = tuning.jump_rotation;
    *grace_ticks = tuning.jump_grace_ticks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::World;

    fn actor() -> (Actor, Tuning) {
        let tuning = Tuning::default();
        (Actor::new(&tuning, &World::default()), tuning)
    }

    #[test]
    fn test_grace_suppresses_gravity() {
        let (mut actor, tuning) = actor();
        let mut grace = 2;
        let y0 = actor.pos.y;

        advance(&mut actor, &mut grace, &tuning, 0.0);
        advance(&mut actor, &mut grace, &tuning, 16.0);
        assert_eq!(grace, 0);
        assert_eq!(actor.velocity, 0.0);
        assert_eq!(actor.pos.y, y0);
        assert!(actor.rotation.abs() <= HOVER_WOBBLE_DEG);

        advance(&mut actor, &mut grace, &tuning, 32.0);
        assert!((actor.velocity - tuning.gravity).abs() < 1e-6);
        assert!(actor.pos.y > y0);
    }

    #[test]
    fn test_rotation_clamped_nose_down() {
        let (mut actor, tuning) = actor();
        let mut grace = 0;
        actor.rotation = tuning.max_rotation - 0.5;
        advance(&mut actor, &mut grace, &tuning, 0.0);
        assert_eq!(actor.rotation, tuning.max_rotation);
        advance(&mut actor, &mut grace, &tuning, 0.0);
        assert_eq!(actor.rotation, tuning.max_rotation);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let (mut actor, tuning) = actor();
        let mut grace = 0;
        actor.pos.y = 20.0;
        actor.velocity = -10.0;

        advance(&mut actor, &mut grace, &tuning, 0.0);
        assert_eq!(actor.pos.y, actor.size.y / 2.0);
        assert_eq!(actor.velocity, 0.0);
        assert!(actor.top() >= 0.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let (mut actor, tuning) = actor();
        let mut grace = 0;
        for prior in [12.0, 0.0, -3.0, -40.0] {
            actor.velocity = prior;
            jump(&mut actor, &mut grace, &tuning);
            assert_eq!(actor.velocity, tuning.jump_impulse);
            assert_eq!(actor.rotation, tuning.jump_rotation);
            assert_eq!(grace, tuning.jump_grace_ticks);
        }
    }
}
