//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds are per-tick deltas
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod controller;
pub mod obstacles;
pub mod physics;
pub mod state;

pub use collision::{Aabb, CollisionKind, check_collision, collides};
pub use controller::{Simulation, TickResult};
pub use state::{Actor, GameEvent, GamePhase, Obstacle, RunState, SoundCue, World};
