//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the feel of
//! the classic browser version; a JSON document can override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Score thresholds for the end-of-run medal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedalThresholds {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

impl Default for MedalThresholds {
    fn default() -> Self {
        Self {
            bronze: 20,
            silver: 30,
            gold: 50,
        }
    }
}

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    /// Rotation applied on jump, degrees (negative = nose up)
    pub jump_rotation: f32,
    /// Maximum nose-down rotation, degrees
    pub max_rotation: f32,
    /// Gravity-free ticks at the start of a run
    pub start_grace_ticks: u32,
    /// Gravity-free ticks after each jump
    pub jump_grace_ticks: u32,
    /// Fixed horizontal position of the actor centre
    pub actor_x: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    // === Obstacles ===
    /// Vertical opening between the two gates
    pub gap: f32,
    pub obstacle_width: f32,
    /// Minimum height of either gate
    pub min_gate_height: f32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,

    // === Difficulty ===
    /// Scroll distance per tick at the start of a run
    pub base_speed: f32,
    /// Hard cap on scroll distance per tick
    pub max_speed: f32,
    /// Added to the speed every tick until the cap
    pub speed_increase: f32,

    // === Presentation ===
    pub medals: MedalThresholds,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            jump_rotation: JUMP_ROTATION_DEG,
            max_rotation: MAX_ROTATION_DEG,
            start_grace_ticks: START_GRACE_TICKS,
            jump_grace_ticks: JUMP_GRACE_TICKS,
            actor_x: ACTOR_X,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,

            gap: GATE_GAP,
            obstacle_width: OBSTACLE_WIDTH,
            min_gate_height: MIN_GATE_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_increase: SPEED_INCREASE,

            medals: MedalThresholds::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("jump_rotation", self.jump_rotation),
            ("max_rotation", self.max_rotation),
            ("actor_x", self.actor_x),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("gap", self.gap),
            ("obstacle_width", self.obstacle_width),
            ("min_gate_height", self.min_gate_height),
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("speed_increase", self.speed_increase),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be positive",
            });
        }
        if self.jump_impulse >= 0.0 {
            return Err(TuningError::Invalid {
                field: "jump_impulse",
                reason: "must point upward (negative)",
            });
        }
        if self.actor_width <= 0.0 || self.actor_height <= 0.0 || self.obstacle_width <= 0.0 {
            return Err(TuningError::Invalid {
                field: "actor_width/actor_height/obstacle_width",
                reason: "sizes must be positive",
            });
        }
        if self.gap <= 0.0 || self.min_gate_height < 0.0 {
            return Err(TuningError::Invalid {
                field: "gap",
                reason: "gap must be positive and gates non-negative",
            });
        }
        if self.base_speed < 0.0 || self.speed_increase < 0.0 {
            return Err(TuningError::Invalid {
                field: "base_speed",
                reason: "speeds must be non-negative",
            });
        }
        if self.max_speed < self.base_speed {
            return Err(TuningError::Invalid {
                field: "max_speed",
                reason: "must not be below base_speed",
            });
        }
        let m = &self.medals;
        if !(m.bronze <= m.silver && m.silver <= m.gold) {
            return Err(TuningError::Invalid {
                field: "medals",
                reason: "thresholds must be ordered bronze <= silver <= gold",
            });
        }
        Ok(())
    }
}
