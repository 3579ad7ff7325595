//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a host can
//! ship a different balance as JSON without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a balance table was refused
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value the simulation cannot run with, e.g. a decay that never
    /// lets particles expire
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_radius: f32,
    /// Pixels per tick on each held axis (diagonals are not normalized)
    pub player_speed: f32,

    pub entity_radius: f32,
    pub spawn_interval_ms: f64,
    pub spawn_margin: f32,
    pub reward: u64,
    pub label_offset: f32,

    pub burst_size: usize,
    pub particle_decay: f32,
    pub particle_max_speed: f32,
    pub particle_min_size: f32,
    pub particle_max_size: f32,

    /// Optional round length; the session ends once this much simulated
    /// time has passed. `None` means the round runs until the host stops it.
    pub round_time_ms: Option<f64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            entity_radius: ENTITY_RADIUS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_margin: SPAWN_MARGIN,
            reward: COLLECT_REWARD,
            label_offset: LABEL_OFFSET,

            burst_size: BURST_SIZE,
            particle_decay: PARTICLE_DECAY,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,

            round_time_ms: None,
        }
    }
}

impl Tuning {
    /// Parse and validate a balance table; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a balance table, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Particles must expire and the spawn timer must advance, otherwise
    /// the world grows by a burst or an entity without bound.
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks = [
            ("particle_decay", self.particle_decay as f64),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        for (field, value) in checks {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
