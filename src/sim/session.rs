//! Session state machine
//!
//! Idle -> Playing on start, Playing -> GameOver on an external stop (or the
//! optional round limit), GameOver -> Idle on reset. Reset is ignored in any
//! other phase. Start is accepted from any phase and always begins from a
//! clean world.

use glam::Vec2;

use super::input::InputTracker;
use super::state::{SessionPhase, World};
use super::tick::tick;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    world: World,
}

impl Session {
    pub fn new(seed: u64, surface: Vec2, tuning: Tuning) -> Self {
        Self {
            phase: SessionPhase::Idle,
            world: World::new(seed, surface, tuning),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for host scripting. The tick cycle remains the
    /// only mutator while playing.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    /// Begin a fresh run: player centered, score zero, no entities or particles
    pub fn start(&mut self) {
        self.world.reset();
        self.phase = SessionPhase::Playing;
        log::info!("Session started (seed {})", self.world.seed);
    }

    /// Begin a fresh run with a new RNG seed
    pub fn start_with_seed(&mut self, seed: u64) {
        self.world.reseed(seed);
        self.start();
    }

    /// External stop condition. Only a running session can end.
    pub fn end(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::GameOver;
        log::info!(
            "Session over: score {} ({} collected)",
            self.world.score,
            self.world.collected
        );
        true
    }

    /// Back to the start overlay. Only a finished session can be reset;
    /// a running one has to end first.
    pub fn reset(&mut self) -> bool {
        if self.phase != SessionPhase::GameOver {
            return false;
        }
        self.world.reset();
        self.phase = SessionPhase::Idle;
        log::info!("Session reset");
        true
    }

    pub fn resize(&mut self, surface: Vec2) {
        self.world.resize(surface);
    }

    /// Run one tick if playing. Returns whether a tick ran.
    pub fn advance(&mut self, input: &InputTracker, dt_ms: f64) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        tick(&mut self.world, input, dt_ms);

        if let Some(limit) = self.world.tuning.round_time_ms {
            if self.world.elapsed_ms >= limit {
                self.end();
            }
        }
        true
    }
}
