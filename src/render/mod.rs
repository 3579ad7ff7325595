//! Render pass
//!
//! `build_frame` turns the world into a flat list of draw commands; a
//! `Surface` backend executes them. Building never touches simulation state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{DrawCommand, TextAlign, build_frame};

use glam::Vec2;

/// Something the render pass can draw into
pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;

    /// Execute one frame's commands in order
    fn execute(&mut self, commands: &[DrawCommand]);
}

/// Surface that keeps the last frame's commands instead of drawing them.
/// Used by the headless native build and in tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    pub last_frame: Vec<DrawCommand>,
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            last_frame: Vec::new(),
            frames: 0,
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn execute(&mut self, commands: &[DrawCommand]) {
        self.last_frame = commands.to_vec();
        self.frames += 1;
    }
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 0.941, 1.0, 1.0]; // #00F0FF
    pub const LABEL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE: [f32; 4] = [0.690, 0.149, 1.0, 1.0]; // #B026FF

    /// Shadow blur radii
    pub const PLAYER_GLOW: f32 = 20.0;
    pub const ENTITY_GLOW: f32 = 10.0;
}
