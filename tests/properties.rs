use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skill_collector::sim::spawn::spawn_position;
use skill_collector::sim::{
    InputTracker, NeonColor, Session, SkillLabel, World, circles_overlap, tick,
};
use skill_collector::Tuning;

const KEYS: [&str; 8] = ["w", "a", "s", "d", "ArrowUp", "ArrowLeft", "ArrowDown", "ArrowRight"];

/// A frame: which keys are held, and how long it lasted
fn frame_strategy() -> impl Strategy<Value = ([bool; 8], f64)> {
    (any::<[bool; 8]>(), 0.0f64..400.0)
}

fn input_for(held: &[bool; 8]) -> InputTracker {
    let mut input = InputTracker::new();
    for (key, &down) in KEYS.iter().zip(held) {
        if down {
            input.set_pressed(key);
        }
    }
    input
}

proptest! {
    #[test]
    fn player_stays_inside_surface(
        seed in any::<u64>(),
        w in 40.0f32..1600.0,
        h in 40.0f32..1200.0,
        frames in prop::collection::vec(frame_strategy(), 1..200),
    ) {
        let mut session = Session::new(seed, Vec2::new(w, h), Tuning::default());
        session.start();
        for (held, dt) in &frames {
            session.advance(&input_for(held), *dt);
            let p = session.world().player;
            prop_assert!(p.pos.x >= p.radius && p.pos.x <= w - p.radius, "x = {}", p.pos.x);
            prop_assert!(p.pos.y >= p.radius && p.pos.y <= h - p.radius, "y = {}", p.pos.y);
        }
    }

    #[test]
    fn spawned_entities_fit_inside_margin(
        seed in any::<u64>(),
        w in 200.0f32..1600.0,
        h in 200.0f32..1200.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (margin, radius) = (50.0, 15.0);
        for _ in 0..64 {
            let c = spawn_position(&mut rng, Vec2::new(w, h), margin, radius);
            prop_assert!(c.x - radius >= margin && c.x + radius <= w - margin);
            prop_assert!(c.y - radius >= margin && c.y + radius <= h - margin);
        }
    }

    #[test]
    fn score_never_decreases_and_life_never_grows(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_strategy(), 1..300),
    ) {
        let mut session = Session::new(seed, Vec2::new(800.0, 600.0), Tuning::default());
        session.start();
        prop_assert_eq!(session.score(), 0);

        let mut last_score = 0;
        for (held, dt) in &frames {
            let before: Vec<f32> = session.world().particles.iter().map(|p| p.life).collect();
            let collected_before = session.world().collected;
            session.advance(&input_for(held), *dt);
            let world = session.world();

            prop_assert!(world.score >= last_score);
            prop_assert_eq!(world.score, world.collected as u64 * world.tuning.reward);
            last_score = world.score;

            // Older particles lost exactly one decay step; new bursts go at the end
            let decay = world.tuning.particle_decay;
            let expected: Vec<f32> = before.iter().map(|l| l - decay).filter(|l| *l > 0.0).collect();
            let fresh = (world.collected - collected_before) as usize * world.tuning.burst_size;
            prop_assert_eq!(world.particles.len(), expected.len() + fresh);
            for (p, life) in world.particles.iter().zip(&expected) {
                prop_assert_eq!(p.life, *life);
            }
            prop_assert!(world.particles.iter().all(|p| p.life > 0.0 && p.life < 1.0));

            // Nothing left overlapping the player after the tick
            let player = world.player;
            prop_assert!(!world.entities.iter().any(
                |e| circles_overlap(player.pos, player.radius, e.pos, e.radius)
            ));
        }
    }

    #[test]
    fn collection_threshold_is_strict(
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let mut world = World::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        world.last_spawn_ms = Some(0.0);
        let reach = world.player.radius + world.tuning.entity_radius;
        let dir = Vec2::new(angle.cos(), angle.sin());
        // Well outside and well inside, away from rounding at the boundary
        let center = world.player.pos;
        world.place_entity(center + dir * (reach + 0.5), SkillLabel::Git, NeonColor::Green);
        world.place_entity(center + dir * (reach - 0.5), SkillLabel::Ai, NeonColor::Pink);
        tick(&mut world, &InputTracker::new(), 0.0);
        prop_assert_eq!(world.score, 10);
        prop_assert_eq!(world.entities.len(), 1);
    }
}
