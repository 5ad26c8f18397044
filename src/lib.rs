//! SkyFlap - a side-scrolling gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `hooks`: Collaborator interfaces the simulation calls into
//! - `tuning`: Data-driven game balance
//! - `persistence`: Key/value storage backends
//! - `highscores`: Best-score persistence
//! - `platform`: Browser/native input mapping
//! - `renderer`, `audio`: Browser front-end (wasm only)

pub mod highscores;
pub mod hooks;
pub mod medal;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use highscores::BestScoreStore;
pub use hooks::{AdHooks, AudioSink, Driver, GameObserver, Hooks, ScoreStore};
pub use medal::Medal;
pub use settings::Settings;
pub use sim::{GameEvent, GamePhase, Simulation, SoundCue, World};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame interval of the driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 30.0;

    /// Velocity change per tick while falling
    pub const GRAVITY: f32 = 0.18;
    /// Velocity override on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -5.0;
    pub const JUMP_ROTATION_DEG: f32 = -20.0;
    pub const MAX_ROTATION_DEG: f32 = 30.0;
    /// Gravity is suppressed this many ticks after start
    pub const START_GRACE_TICKS: u32 = 30;
    /// ...and this many ticks after each jump
    pub const JUMP_GRACE_TICKS: u32 = 6;

    /// Obstacle defaults
    pub const GATE_GAP: f32 = 220.0;
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const MIN_GATE_HEIGHT: f32 = 50.0;
    pub const SPAWN_INTERVAL_MS: f64 = 1900.0;

    /// Scroll speed (distance per tick)
    pub const BASE_SPEED: f32 = 1.5;
    pub const MAX_SPEED: f32 = 3.5;
    pub const SPEED_INCREASE: f32 = 0.002;
}
