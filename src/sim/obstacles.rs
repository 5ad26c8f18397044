//! Obstacle spawning, scrolling, scoring and retirement

use rand::Rng;

use super::state::{Obstacle, RunState, World};
use crate::tuning::Tuning;

/// Valid `[min, max)` range for a new obstacle's top gate height
///
/// Collapses to `(min, min)` when the viewport is too short for a full gap.
pub fn spawn_height_range(world: &World, tuning: &Tuning) -> (f32, f32) {
    let min = tuning.min_gate_height;
    let max = world.height - tuning.gap - tuning.min_gate_height - world.ground_height;
    if max.is_finite() && max > min {
        (min, max)
    } else {
        (min, min)
    }
}

/// Pick a top gate height for a new obstacle
pub fn random_top_height<R: Rng>(world: &World, tuning: &Tuning, rng: &mut R) -> f32 {
    let (min, max) = spawn_height_range(world, tuning);
    if max > min {
        rng.random_range(min..max).floor().max(min)
    } else {
        min
    }
}

/// Advance the obstacle set by one tick
///
/// Spawns when more than `spawn_interval_ms` has passed since the last spawn,
/// scrolls every obstacle left by `run.speed`, flags obstacles whose trailing
/// edge has passed `actor_x` and retires those fully off the left edge.
/// Returns how many obstacles were scored this tick.
pub fn tick<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    run: &mut RunState,
    now_ms: f64,
    world: &World,
    actor_x: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> u32 {
    if now_ms - run.last_spawn_ms > tuning.spawn_interval_ms {
        let top_height = random_top_height(world, tuning, rng);
        let id = run.next_obstacle_id();
        obstacles.push(Obstacle::new(id, world.width, top_height, tuning.gap));
        run.last_spawn_ms = now_ms;
        log::debug!("Spawned obstacle {} (top {:.0})", id, top_height);
    }

    let width = tuning.obstacle_width;
    let mut scored = 0;
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= run.speed;

        if !obstacle.scored && obstacle.trailing_edge(width) < actor_x {
            obstacle.scored = true;
            scored += 1;
        }
    }

    obstacles.retain(|o| o.trailing_edge(width) >= 0.0);

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Vec<Obstacle>, RunState, World, Tuning, Pcg32) {
        let tuning = Tuning::default();
        (
            Vec::new(),
            RunState::new(&tuning),
            World::new(400.0, 600.0, 60.0),
            tuning,
            Pcg32::seed_from_u64(7),
        )
    }

    #[test]
    fn test_spawn_after_interval() {
        let (mut obs, mut run, world, tuning, mut rng) = setup();

        tick(&mut obs, &mut run, 1900.0, &world, 100.0, &tuning, &mut rng);
        assert!(obs.is_empty(), "interval must be strictly exceeded");

        tick(&mut obs, &mut run, 1901.0, &world, 100.0, &tuning, &mut rng);
        assert_eq!(obs.len(), 1);
        assert_eq!(run.last_spawn_ms, 1901.0);
        assert!((obs[0].x - (world.width - run.speed)).abs() < 1e-4);

        tick(&mut obs, &mut run, 1920.0, &world, 100.0, &tuning, &mut rng);
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn test_spawn_heights_in_range_with_constant_gap() {
        let (mut obs, mut run, world, tuning, mut rng) = setup();
        let (min, max) = spawn_height_range(&world, &tuning);
        assert_eq!((min, max), (50.0, 270.0));

        for i in 1..=50 {
            tick(&mut obs, &mut run, i as f64 * 2000.0, &world, -1000.0, &tuning, &mut rng);
        }
        assert!(!obs.is_empty());
        for o in &obs {
            assert!(o.top_height >= min && o.top_height < max);
            assert_eq!(o.gap(), tuning.gap);
        }
    }

    #[test]
    fn test_tiny_viewport_clamps_spawn_range() {
        let (mut obs, mut run, _, tuning, mut rng) = setup();
        let world = World::new(120.0, 150.0, 60.0);
        assert_eq!(spawn_height_range(&world, &tuning), (50.0, 50.0));

        tick(&mut obs, &mut run, 5000.0, &world, 0.0, &tuning, &mut rng);
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].top_height, 50.0);
        assert!(obs[0].bottom_y.is_finite());
        assert_eq!(obs[0].bottom_gate_height(&world), 0.0);
    }

    #[test]
    fn test_scored_exactly_once() {
        let (_, mut run, world, tuning, mut rng) = setup();
        // Trailing edge at 100.5; crosses the actor at x=100 on the first tick
        let mut obs = vec![Obstacle::new(1, 30.5, 100.0, tuning.gap)];

        let scored = tick(&mut obs, &mut run, 0.0, &world, 100.0, &tuning, &mut rng);
        assert_eq!(scored, 1);
        assert!(obs[0].scored);

        let scored = tick(&mut obs, &mut run, 0.0, &world, 100.0, &tuning, &mut rng);
        assert_eq!(scored, 0);
        assert!(obs[0].scored);
    }

    #[test]
    fn test_retire_offscreen_after_scoring() {
        let (_, mut run, world, tuning, mut rng) = setup();
        // Both pass the actor this tick; the first also leaves the screen
        let mut obs = vec![
            Obstacle::new(1, -69.0, 100.0, tuning.gap),
            Obstacle::new(2, 20.0, 100.0, tuning.gap),
        ];

        let scored = tick(&mut obs, &mut run, 0.0, &world, 100.0, &tuning, &mut rng);
        assert_eq!(scored, 2);
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].id, 2);
    }
}
