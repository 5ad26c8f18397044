//! Simulation controller
//!
//! Owns the actor, the obstacle set and the per-run state, and sequences one
//! tick: difficulty, obstacles, physics, collision, game over.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{self, CollisionKind};
use super::obstacles;
use super::physics;
use super::state::{Actor, GameEvent, GamePhase, Obstacle, RunState, SoundCue, World};
use crate::hooks::Hooks;
use crate::medal::Medal;
use crate::tuning::{Tuning, TuningError};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickResult {
    /// Obstacles passed this tick
    pub scored: u32,
    /// Set on the tick that ended the run
    pub collision: Option<CollisionKind>,
}

/// One independent game instance
pub struct Simulation {
    phase: GamePhase,
    actor: Actor,
    obstacles: Vec<Obstacle>,
    run: RunState,
    best_score: u32,
    world: World,
    tuning: Tuning,
    rng: Pcg32,
    hooks: Hooks,
    /// Completed runs, for interstitial cadence
    runs_finished: u32,
}

impl Simulation {
    /// Create an idle simulation; the best score is loaded once here
    pub fn new(tuning: Tuning, world: World, seed: u64, mut hooks: Hooks) -> Result<Self, TuningError> {
        tuning.validate()?;

        let best_score = hooks
            .scores
            .as_mut()
            .map(|s| s.load_best_score())
            .unwrap_or(0);
        log::info!("Simulation created (seed {}, best {})", seed, best_score);

        Ok(Self {
            phase: GamePhase::Idle,
            actor: Actor::new(&tuning, &world),
            obstacles: Vec::new(),
            run: RunState::new(&tuning),
            best_score,
            world,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            hooks,
            runs_finished: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn speed(&self) -> f32 {
        self.run.speed
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Update viewport geometry between ticks
    ///
    /// Outside a run the actor is re-centred in the new viewport.
    pub fn resize(&mut self, world: World) {
        self.world = world;
        if self.phase != GamePhase::Running {
            self.actor.reset(&self.tuning, &self.world);
        }
    }

    /// Begin a new run, fully resetting all per-run state
    pub fn start(&mut self) {
        self.actor.reset(&self.tuning, &self.world);
        self.obstacles.clear();
        self.run = RunState::new(&self.tuning);
        self.phase = GamePhase::Running;

        if let Some(ads) = self.hooks.ads.as_mut() {
            ads.show_banner();
        }
        log::info!(
            "Run started ({}x{}, ground {})",
            self.world.width,
            self.world.height,
            self.world.ground_height
        );
        self.hooks.emit(GameEvent::Started);

        self.hooks.cancel();
        self.hooks.schedule();
    }

    /// Abandon the current run without scoring it
    ///
    /// Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.phase == GamePhase::Running {
            log::info!("Run stopped at score {}", self.run.score);
            self.phase = GamePhase::Idle;
        }
        self.hooks.cancel();
    }

    /// Handle a jump input (click, tap, key)
    ///
    /// Outside a run the first signal starts a new run and jumps at once,
    /// from `GameOver` as well as from `Idle`.
    pub fn on_jump_signal(&mut self) {
        if self.phase != GamePhase::Running {
            self.start();
        }
        physics::jump(&mut self.actor, &mut self.run.grace_ticks, &self.tuning);
        self.hooks.play(SoundCue::Jumped);
        self.hooks.emit(GameEvent::Jumped);
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self, now_ms: f64) -> TickResult {
        if self.phase != GamePhase::Running {
            return TickResult::default();
        }
        self.hooks.schedule();
        self.run.ticks += 1;

        // Difficulty
        let prev_speed = self.run.speed;
        if self.run.speed < self.tuning.max_speed {
            self.run.speed = (self.run.speed + self.tuning.speed_increase).min(self.tuning.max_speed);
        }
        debug_assert!(self.run.speed >= prev_speed && self.run.speed <= self.tuning.max_speed);
        self.run.scroll += self.run.speed;

        // Obstacles
        let scored = obstacles::tick(
            &mut self.obstacles,
            &mut self.run,
            now_ms,
            &self.world,
            self.actor.pos.x,
            &self.tuning,
            &mut self.rng,
        );
        for _ in 0..scored {
            self.run.score += 1;
            log::debug!("Score {}", self.run.score);
            self.hooks.play(SoundCue::Scored);
            self.hooks.emit(GameEvent::ScoreChanged {
                score: self.run.score,
            });
        }
        debug_assert!(
            self.obstacles
                .iter()
                .all(|o| (o.gap() - self.tuning.gap).abs() < 1e-3)
        );

        // Actor
        physics::advance(&mut self.actor, &mut self.run.grace_ticks, &self.tuning, now_ms);

        // Collision
        let collision = collision::check_collision(
            &self.actor,
            &self.obstacles,
            &self.world,
            self.tuning.obstacle_width,
        );
        if let Some(kind) = collision {
            self.hooks.play(SoundCue::HitObstacleOrGround);
            self.game_over(kind);
        }

        TickResult { scored, collision }
    }

    fn game_over(&mut self, kind: CollisionKind) {
        debug_assert_eq!(self.phase, GamePhase::Running);
        self.phase = GamePhase::GameOver;
        self.hooks.cancel();

        let final_score = self.run.score;
        let new_best = final_score > self.best_score;
        if new_best {
            self.best_score = final_score;
            if let Some(scores) = self.hooks.scores.as_mut() {
                scores.save_best_score(final_score);
            }
        }
        let medal = Medal::for_score(final_score, &self.tuning.medals);
        log::info!(
            "Game over after {} ticks: {:?}, score {}, best {}{}",
            self.run.ticks,
            kind,
            final_score,
            self.best_score,
            if new_best { " (new best)" } else { "" }
        );

        self.hooks.play(SoundCue::Died);

        if let Some(ads) = self.hooks.ads.as_mut() {
            if self.runs_finished % 2 == 0 {
                ads.show_interstitial();
            }
            ads.show_banner();
        }
        self.runs_finished += 1;

        self.hooks.emit(GameEvent::GameOver {
            final_score,
            best_score: self.best_score,
            new_best,
            medal,
        });
    }
}
