//! Frame scheduler
//!
//! The host calls `FrameLoop::frame` once per animation frame with the token
//! it got from `start`. A cancelled token turns the call into a no-op, so a
//! callback that was already queued when the session stopped does nothing.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::SurfaceError;
use crate::render::{Surface, build_frame};
use crate::settings::Settings;
use crate::sim::{InputTracker, Session, SessionPhase};
use crate::tuning::Tuning;

/// Shared stop flag for one frame chain
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is already cancelled
    pub fn cancelled() -> Self {
        let token = Self::new();
        token.cancel();
        token
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// What the host page shows around the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub phase: SessionPhase,
    pub fps: u32,
    pub entities: usize,
    pub particles: usize,
}

impl Hud {
    pub fn shows_start_overlay(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    pub fn shows_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Score stays up from the first run on, final score included
    pub fn shows_score(&self) -> bool {
        self.phase != SessionPhase::Idle
    }
}

/// Rolling frames-per-second over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    filled: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            filled: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, time_ms: f64) {
        let len = self.frame_times.len();
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % len;
        self.filled = (self.filled + 1).min(len);

        // Oldest sample is at frame_index once the ring is full
        if self.filled == len {
            let elapsed = time_ms - self.frame_times[self.frame_index];
            if elapsed > 0.0 {
                self.fps = ((len - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Session, input tracker and surface driven one frame at a time
pub struct FrameLoop<S: Surface> {
    session: Session,
    input: InputTracker,
    surface: S,
    settings: Settings,
    token: CancelToken,
    last_time_ms: Option<f64>,
    fps: FpsCounter,
}

impl<S: Surface> FrameLoop<S> {
    /// Fails if the surface has no drawable area
    pub fn new(surface: S, seed: u64, tuning: Tuning, settings: Settings) -> Result<Self, SurfaceError> {
        let size = surface.size();
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(SurfaceError::Empty {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            session: Session::new(seed, size, tuning),
            input: InputTracker::new(),
            surface,
            settings,
            token: CancelToken::cancelled(),
            last_time_ms: None,
            fps: FpsCounter::default(),
        })
    }

    /// Start (or restart) a session. Any previous frame chain is cancelled;
    /// the returned token belongs to the new chain.
    pub fn start(&mut self, seed: Option<u64>) -> CancelToken {
        self.token.cancel();
        self.input.release_all();
        self.sync_surface_size();
        match seed {
            Some(seed) => self.session.start_with_seed(seed),
            None => self.session.start(),
        }
        self.last_time_ms = None;
        self.fps.clear();
        self.token = CancelToken::new();
        self.token.clone()
    }

    /// External stop: the running session ends and its chain is cancelled
    pub fn stop(&mut self) -> bool {
        self.token.cancel();
        self.input.release_all();
        self.session.end()
    }

    /// Back to idle from game over
    pub fn reset(&mut self) -> bool {
        self.session.reset()
    }

    /// One tick plus one render pass, if `token` is still live and the session is playing
    pub fn frame(&mut self, token: &CancelToken, time_ms: f64) -> FrameOutcome {
        if token.is_cancelled() || !self.session.is_playing() {
            return FrameOutcome::Stop;
        }

        let dt_ms = match self.last_time_ms {
            Some(last) => (time_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        self.session.advance(&self.input, dt_ms);
        self.fps.record(time_ms);

        let commands = build_frame(self.session.world(), &self.settings);
        self.surface.execute(&commands);

        if !self.session.is_playing() {
            // Round limit reached inside the tick
            self.token.cancel();
            self.input.release_all();
        }
        if token.is_cancelled() {
            FrameOutcome::Stop
        } else {
            FrameOutcome::Continue
        }
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.set_pressed(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.set_released(key)
    }

    /// Focus lost: nothing stays held
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    /// Pick up a changed surface size
    pub fn sync_surface_size(&mut self) {
        let size = self.surface.size();
        if size.x > 0.0 && size.y > 0.0 && size != self.session.world().surface {
            log::info!("Surface resized to {}x{}", size.x, size.y);
            self.session.resize(size);
        }
    }

    pub fn hud(&self) -> Hud {
        let world = self.session.world();
        Hud {
            score: world.score,
            phase: self.session.phase(),
            fps: self.fps.fps(),
            entities: world.entities.len(),
            particles: world.particles.len(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn surface_size(&self) -> Vec2 {
        self.session.world().surface
    }
}
