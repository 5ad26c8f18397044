//! Game state and core simulation types
//!
//! Plain data only; the rules that mutate it live in `physics`, `obstacles`
//! and `controller`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::medal::Medal;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Viewport geometry supplied by the environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Height of the ground band at the bottom of the viewport
    pub ground_height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl World {
    pub fn new(width: f32, height: f32, ground_height: f32) -> Self {
        Self {
            width,
            height,
            ground_height,
        }
    }

    /// Y coordinate of the top of the ground band
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }
}

/// The player-controlled object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Centre of the bounding box; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    /// Visual rotation in degrees, not used by physics
    pub rotation: f32,
    pub size: Vec2,
}

impl Actor {
    pub fn new(tuning: &Tuning, world: &World) -> Self {
        let mut actor = Self {
            pos: Vec2::ZERO,
            velocity: 0.0,
            rotation: 0.0,
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
        };
        actor.reset(tuning, world);
        actor
    }

    /// Back to the vertical centre, at rest
    pub fn reset(&mut self, tuning: &Tuning, world: &World) {
        self.pos = Vec2::new(tuning.actor_x, world.height / 2.0);
        self.velocity = 0.0;
        self.rotation = 0.0;
        self.size = Vec2::new(tuning.actor_width, tuning.actor_height);
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// A pair of gates with a fixed opening between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Bottom of the top gate
    pub top_height: f32,
    /// Top of the bottom gate (`top_height + gap`)
    pub bottom_y: f32,
    /// Set once when the actor passes the trailing edge
    pub scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            id,
            x,
            top_height,
            bottom_y: top_height + gap,
            scored: false,
        }
    }

    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }

    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Visible height of the bottom gate, never negative
    pub fn bottom_gate_height(&self, world: &World) -> f32 {
        (world.ground_y() - self.bottom_y).max(0.0)
    }
}

/// Per-run mutable state, recreated by every `start()`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    /// Scroll distance per tick
    pub speed: f32,
    /// Timestamp (ms) of the most recent spawn
    pub last_spawn_ms: f64,
    /// Ticks left before gravity applies again
    pub grace_ticks: u32,
    pub ticks: u64,
    /// Total distance scrolled, for ground animation
    pub scroll: f32,
    next_id: u32,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            speed: tuning.base_speed,
            last_spawn_ms: 0.0,
            grace_ticks: tuning.start_grace_ticks,
            ticks: 0,
            scroll: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Discrete sounds the simulation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jumped,
    Scored,
    HitObstacleOrGround,
    Died,
}

/// Events for UI and other observers
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new run began
    Started,
    Jumped,
    ScoreChanged { score: u32 },
    GameOver {
        final_score: u32,
        best_score: u32,
        new_best: bool,
        medal: Option<Medal>,
    },
}
