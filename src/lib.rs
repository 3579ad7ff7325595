//! Skill Collector - a canvas mini-game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (input, movement, spawning, collisions, particles)
//! - `render`: Render pass producing 2D draw commands, plus the canvas backend
//! - `platform`: Frame scheduling, cancellation and browser glue
//! - `tuning`: Data-driven game balance
//! - `settings`: Cosmetic player preferences

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use platform::{CancelToken, FrameLoop, FrameOutcome, Hud, SurfaceError};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Surface size used when the host cannot measure one
    pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Pixels per tick on each held axis
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Collectible defaults
    pub const ENTITY_RADIUS: f32 = 15.0;
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Inset from every surface edge that spawned entities stay inside
    pub const SPAWN_MARGIN: f32 = 50.0;
    pub const COLLECT_REWARD: u64 = 10;
    /// Label baseline below the entity center
    pub const LABEL_OFFSET: f32 = 25.0;

    /// Particle burst on collection
    pub const BURST_SIZE: usize = 10;
    /// Lifetime lost per tick (lifetime starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 0.05;
    /// Velocity components are drawn from [-max, max)
    pub const PARTICLE_MAX_SPEED: f32 = 2.5;
    pub const PARTICLE_MIN_SIZE: f32 = 1.0;
    pub const PARTICLE_MAX_SIZE: f32 = 4.0;
}
