//! One simulation step per animation frame
//!
//! Step order is fixed: movement, clamp, spawn check, collection, particles.

use glam::Vec2;

use super::collision::{circles_overlap, clamp_to_surface};
use super::input::{Direction, InputTracker};
use super::spawn::{collection_burst, spawn_collectible};
use super::state::World;

/// Advance the world by exactly one tick.
///
/// `dt_ms` is the wall-clock time since the previous frame; it only feeds
/// the spawn timer. Movement and particle decay are per tick.
pub fn tick(world: &mut World, input: &InputTracker, dt_ms: f64) {
    world.time_ticks += 1;
    world.elapsed_ms += dt_ms.max(0.0);

    move_player(world, input);
    spawn_due(world);
    collect_overlapping(world);
    update_particles(world);
}

/// Steps 1-2. Each held axis moves the full speed; diagonals are not
/// normalized, so they travel sqrt(2) times faster.
fn move_player(world: &mut World, input: &InputTracker) {
    let speed = world.player.speed;
    let mut delta = Vec2::ZERO;
    if input.is_held(Direction::Up) {
        delta.y -= speed;
    }
    if input.is_held(Direction::Down) {
        delta.y += speed;
    }
    if input.is_held(Direction::Left) {
        delta.x -= speed;
    }
    if input.is_held(Direction::Right) {
        delta.x += speed;
    }

    let player = &mut world.player;
    player.pos = clamp_to_surface(player.pos + delta, player.radius, world.surface);
}

/// Step 3. At most one spawn per tick.
fn spawn_due(world: &mut World) {
    let due = match world.last_spawn_ms {
        None => true,
        Some(last) => world.elapsed_ms - last > world.tuning.spawn_interval_ms,
    };
    if due {
        let entity = spawn_collectible(world);
        log::trace!("Spawned {} at {:?}", entity.label.as_str(), entity.pos);
        world.entities.push(entity);
        world.last_spawn_ms = Some(world.elapsed_ms);
    }
}

/// Step 4. Every overlapping entity is taken in the same tick.
fn collect_overlapping(world: &mut World) {
    let player = world.player;
    let (taken, kept): (Vec<_>, Vec<_>) = world
        .entities
        .drain(..)
        .partition(|e| circles_overlap(player.pos, player.radius, e.pos, e.radius));
    world.entities = kept;

    for entity in taken {
        world.score += world.tuning.reward;
        world.collected += 1;
        let burst = collection_burst(world, entity.pos, entity.color);
        world.particles.extend(burst);
        log::debug!(
            "Collected {} (score {})",
            entity.label.as_str(),
            world.score
        );
    }
}

/// Step 5. Integrate, decay, then drop anything at or below zero life.
fn update_particles(world: &mut World) {
    let decay = world.tuning.particle_decay.max(0.0);
    for particle in world.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= decay;
    }
    world.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{NeonColor, SkillLabel};
    use crate::tuning::Tuning;

    fn world() -> World {
        let mut w = World::new(12345, Vec2::new(800.0, 600.0), Tuning::default());
        // Suppress the first automatic spawn
        w.last_spawn_ms = Some(0.0);
        w
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut w = World::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        tick(&mut w, &InputTracker::new(), 16.0);
        assert_eq!(w.entities.len(), 1);
        assert_eq!(w.last_spawn_ms, Some(16.0));
    }

    #[test]
    fn test_spawn_interval_is_strict() {
        let mut w = world();
        let input = InputTracker::new();
        tick(&mut w, &input, 1000.0);
        // Exactly the interval has passed: not yet
        assert!(w.entities.is_empty());
        tick(&mut w, &input, 1.0);
        assert_eq!(w.entities.len(), 1);
        // Timer restarted
        tick(&mut w, &input, 500.0);
        assert_eq!(w.entities.len(), 1);
    }

    #[test]
    fn test_long_frame_spawns_once() {
        let mut w = world();
        tick(&mut w, &InputTracker::new(), 10_000.0);
        assert_eq!(w.entities.len(), 1);
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let mut w = world();
        let mut input = InputTracker::new();
        input.set_pressed("ArrowUp");
        input.set_pressed("a");
        tick(&mut w, &input, 16.0);
        assert_eq!(w.player.pos, Vec2::new(395.0, 295.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut w = world();
        let mut input = InputTracker::new();
        input.set_pressed("w");
        input.set_pressed("s");
        tick(&mut w, &input, 16.0);
        assert_eq!(w.player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_player_stops_at_wall() {
        let mut w = world();
        let mut input = InputTracker::new();
        input.set_pressed("d");
        for _ in 0..200 {
            tick(&mut w, &input, 0.0);
        }
        assert_eq!(w.player.pos.x, 780.0);
    }

    #[test]
    fn test_collect_scores_and_bursts() {
        let mut w = world();
        w.place_entity(Vec2::new(400.0, 300.0), SkillLabel::React, NeonColor::Purple);
        tick(&mut w, &InputTracker::new(), 16.0);
        assert_eq!(w.score, 10);
        assert!(w.entities.is_empty());
        assert_eq!(w.particles.len(), 10);
        assert!(w.particles.iter().all(|p| p.color == NeonColor::Purple));
        // Burst particles already aged one tick
        assert!(w.particles.iter().all(|p| (p.life - 0.95).abs() < 1e-6));
    }

    #[test]
    fn test_simultaneous_collections() {
        let mut w = world();
        w.place_entity(Vec2::new(390.0, 300.0), SkillLabel::Git, NeonColor::Green);
        w.place_entity(Vec2::new(410.0, 300.0), SkillLabel::Sql, NeonColor::Pink);
        w.place_entity(Vec2::new(100.0, 100.0), SkillLabel::Ai, NeonColor::Cyan);
        tick(&mut w, &InputTracker::new(), 16.0);
        assert_eq!(w.score, 20);
        assert_eq!(w.collected, 2);
        assert_eq!(w.entities.len(), 1);
        assert_eq!(w.entities[0].label, SkillLabel::Ai);
        assert_eq!(w.particles.len(), 20);
    }

    #[test]
    fn test_touching_is_not_collected() {
        let mut w = world();
        w.place_entity(Vec2::new(435.0, 300.0), SkillLabel::Unity, NeonColor::Orange);
        tick(&mut w, &InputTracker::new(), 16.0);
        assert_eq!(w.score, 0);
        assert_eq!(w.entities.len(), 1);

        w.entities[0].pos.x = 434.99;
        tick(&mut w, &InputTracker::new(), 16.0);
        assert_eq!(w.score, 10);
    }

    #[test]
    fn test_particles_move_and_expire() {
        let mut w = world();
        w.place_entity(Vec2::new(400.0, 300.0), SkillLabel::Python, NeonColor::Cyan);
        let input = InputTracker::new();
        tick(&mut w, &input, 0.0);

        let first = w.particles[0];
        tick(&mut w, &input, 0.0);
        assert_eq!(w.particles[0].pos, first.pos + first.vel);
        assert!(w.particles[0].life < first.life);

        // Mirror the decay arithmetic to find the removal tick
        let mut life = 1.0f32;
        let mut ticks_alive = 0;
        while life > 0.0 {
            life -= 0.05;
            ticks_alive += 1;
        }
        // Two ticks already ran
        for _ in 2..ticks_alive {
            assert_eq!(w.particles.len(), 10);
            tick(&mut w, &input, 0.0);
        }
        assert!(w.particles.is_empty());
    }
}
