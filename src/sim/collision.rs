//! Collision detection between the actor, the gates and the ground
//!
//! Pure functions of their inputs; the ceiling is not a collision (physics
//! clamps it instead), the ground band and the gates are.

use glam::Vec2;

use super::state::{Actor, Obstacle, World};

/// What the actor ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Ground,
    Obstacle { id: u32 },
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_size: Vec2) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Open-interval horizontal overlap with `[left, right]`
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }
}

impl From<&Actor> for Aabb {
    fn from(actor: &Actor) -> Self {
        Aabb::from_center(actor.pos, actor.half_size())
    }
}

/// Check the actor against the ground line and every obstacle
///
/// Ground is tested first; obstacles short-circuit on the first hit.
pub fn check_collision(
    actor: &Actor,
    obstacles: &[Obstacle],
    world: &World,
    obstacle_width: f32,
) -> Option<CollisionKind> {
    let bounds = Aabb::from(actor);

    if bounds.max.y >= world.ground_y() {
        return Some(CollisionKind::Ground);
    }

    obstacles
        .iter()
        .find(|o| {
            bounds.overlaps_x(o.x, o.x + obstacle_width)
                && (bounds.min.y < o.top_height || bounds.max.y > o.bottom_y)
        })
        .map(|o| CollisionKind::Obstacle { id: o.id })
}

/// True if the actor touches the ground or any gate
pub fn collides(actor: &Actor, obstacles: &[Obstacle], world: &World, obstacle_width: f32) -> bool {
    check_collision(actor, obstacles, world, obstacle_width).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    const WIDTH: f32 = 70.0;

    fn world() -> World {
        World::new(400.0, 600.0, 60.0)
    }

    fn actor_at(y: f32) -> Actor {
        let mut actor = Actor::new(&Tuning::default(), &world());
        actor.pos.y = y;
        actor
    }

    #[test]
    fn test_inside_gap_is_clear() {
        let obstacle = Obstacle::new(1, 80.0, 100.0, 220.0);
        assert_eq!(obstacle.bottom_y, 320.0);

        // Box spans 185..215, fully inside 100..320
        let actor = actor_at(200.0);
        assert!(!collides(&actor, &[obstacle], &world(), WIDTH));
    }

    #[test]
    fn test_above_gap_hits_top_gate() {
        let obstacle = Obstacle::new(3, 80.0, 100.0, 220.0);
        let actor = actor_at(90.0);
        assert_eq!(
            check_collision(&actor, &[obstacle], &world(), WIDTH),
            Some(CollisionKind::Obstacle { id: 3 })
        );
    }

    #[test]
    fn test_below_gap_hits_bottom_gate() {
        let obstacle = Obstacle::new(1, 80.0, 100.0, 220.0);
        // Bottom edge 321 > 320
        let actor = actor_at(306.0);
        assert!(collides(&actor, &[obstacle], &world(), WIDTH));
    }

    #[test]
    fn test_no_horizontal_overlap_is_clear() {
        // Actor spans x 80..120; obstacle spans 120..190
        let obstacle = Obstacle::new(1, 120.0, 100.0, 220.0);
        let actor = actor_at(50.0);
        assert!(!collides(&actor, &[obstacle], &world(), WIDTH));

        // Trailing edge exactly at the actor's left edge
        let obstacle = Obstacle::new(2, 10.0, 100.0, 220.0);
        assert!(!collides(&actor, &[obstacle], &world(), WIDTH));
    }

    #[test]
    fn test_ground_line() {
        // Half height is 15; ground line at 540
        assert!(collides(&actor_at(526.0), &[], &world(), WIDTH));
        assert_eq!(
            check_collision(&actor_at(525.0), &[], &world(), WIDTH),
            Some(CollisionKind::Ground)
        );
        assert!(!collides(&actor_at(524.0), &[], &world(), WIDTH));
    }

    #[test]
    fn test_ceiling_is_not_a_collision() {
        let actor = actor_at(0.0);
        assert!(!collides(&actor, &[], &world(), WIDTH));
    }

    #[test]
    fn test_first_overlapping_obstacle_reported() {
        let obstacles = [
            Obstacle::new(1, 300.0, 100.0, 220.0),
            Obstacle::new(2, 90.0, 300.0, 220.0),
            Obstacle::new(3, 95.0, 350.0, 220.0),
        ];
        let actor = actor_at(200.0);
        assert_eq!(
            check_collision(&actor, &obstacles, &world(), WIDTH),
            Some(CollisionKind::Obstacle { id: 2 })
        );
    }
}
