//! Frame-driven simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One tick per scheduled frame
//! - Seeded RNG only
//! - The world is mutated only from `tick`

pub mod collision;
pub mod input;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, clamp_to_surface};
pub use input::{Direction, InputTracker, TrackedKey};
pub use session::Session;
pub use state::{Collectible, NeonColor, Particle, Player, SessionPhase, SkillLabel, World};
pub use tick::tick;
