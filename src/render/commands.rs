//! Draw command generation

use glam::Vec2;

use super::colors;
use crate::settings::Settings;
use crate::sim::World;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One primitive operation on a 2D surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { size: Vec2 },
    /// Filled circle. `glow` is a shadow blur radius in the fill color (0 = none).
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
        glow: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        color: [f32; 4],
        font_px: f32,
        align: TextAlign,
    },
}

/// Label font size under each entity
const LABEL_FONT_PX: f32 = 12.0;
/// Score overlay font size and position
const SCORE_FONT_PX: f32 = 20.0;
const SCORE_POS: Vec2 = Vec2::new(16.0, 32.0);

/// Build the commands for the current frame.
///
/// Order: clear, player, entities with labels, particles, score.
pub fn build_frame(world: &World, settings: &Settings) -> Vec<DrawCommand> {
    let glow = settings.effective_glow();
    let mut cmds = Vec::with_capacity(
        3 + world.entities.len() * 2 + world.particles.len(),
    );

    cmds.push(DrawCommand::Clear {
        size: world.surface,
    });

    cmds.push(DrawCommand::Circle {
        center: world.player.pos,
        radius: world.player.radius,
        color: colors::PLAYER,
        glow: if glow { colors::PLAYER_GLOW } else { 0.0 },
    });

    for entity in &world.entities {
        cmds.push(DrawCommand::Circle {
            center: entity.pos,
            radius: entity.radius,
            color: entity.color.rgba(1.0),
            glow: if glow { colors::ENTITY_GLOW } else { 0.0 },
        });
        if settings.labels {
            cmds.push(DrawCommand::Text {
                text: entity.label.as_str().to_string(),
                pos: entity.pos + Vec2::new(0.0, world.tuning.label_offset),
                color: colors::LABEL,
                font_px: LABEL_FONT_PX,
                align: TextAlign::Center,
            });
        }
    }

    // Opacity follows remaining life
    for particle in &world.particles {
        cmds.push(DrawCommand::Circle {
            center: particle.pos,
            radius: particle.size,
            color: particle.color.rgba(particle.life.clamp(0.0, 1.0)),
            glow: 0.0,
        });
    }

    cmds.push(DrawCommand::Text {
        text: format!("SCORE: {}", world.score),
        pos: SCORE_POS,
        color: colors::SCORE,
        font_px: SCORE_FONT_PX,
        align: TextAlign::Left,
    });

    cmds
}
