//! Collectible spawning and collection bursts

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, NeonColor, Particle, SkillLabel, World};

/// Sample one coordinate so that `[c - radius, c + radius]` stays inside
/// `[margin, size - margin]`. Degrades to the middle of the axis when the
/// surface is too small for that.
fn sample_axis<R: Rng>(rng: &mut R, size: f32, margin: f32, radius: f32) -> f32 {
    let lo = margin + radius;
    let hi = size - margin - radius;
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        size / 2.0
    }
}

/// Uniform spawn position inside the margin-inset rectangle
pub fn spawn_position<R: Rng>(rng: &mut R, surface: Vec2, margin: f32, radius: f32) -> Vec2 {
    let x = sample_axis(rng, surface.x, margin, radius);
    let y = sample_axis(rng, surface.y, margin, radius);
    Vec2::new(x, y)
}

/// Create one collectible with a random position, label and color
pub fn spawn_collectible(world: &mut World) -> Collectible {
    let surface = world.surface;
    let margin = world.tuning.spawn_margin;
    let radius = world.tuning.entity_radius;

    let rng = world.rng();
    let pos = spawn_position(rng, surface, margin, radius);
    let label = SkillLabel::ALL[rng.random_range(0..SkillLabel::ALL.len())];
    let color = NeonColor::ALL[rng.random_range(0..NeonColor::ALL.len())];

    Collectible {
        id: world.next_entity_id(),
        pos,
        radius,
        label,
        color,
    }
}

/// Particles thrown out when a collectible is taken
pub fn collection_burst(world: &mut World, at: Vec2, color: NeonColor) -> Vec<Particle> {
    let count = world.tuning.burst_size;
    let max_speed = world.tuning.particle_max_speed;
    let min_size = world.tuning.particle_min_size;
    let max_size = world.tuning.particle_max_size;
    let rng = world.rng();

    (0..count)
        .map(|_| {
            let size = if max_size > min_size {
                rng.random_range(min_size..max_size)
            } else {
                min_size
            };
            let vel = if max_speed > 0.0 {
                Vec2::new(
                    rng.random_range(-max_speed..max_speed),
                    rng.random_range(-max_speed..max_speed),
                )
            } else {
                Vec2::ZERO
            };
            Particle {
                pos: at,
                vel,
                size,
                color,
                life: 1.0,
            }
        })
        .collect()
}
