use glam::Vec2;

use skill_collector::render::RecordingSurface;
use skill_collector::sim::{InputTracker, NeonColor, Session, SessionPhase, SkillLabel, tick};
use skill_collector::{FrameLoop, FrameOutcome, Settings, Tuning};

fn playing_session() -> Session {
    let mut s = Session::new(2024, Vec2::new(800.0, 600.0), Tuning::default());
    s.start();
    // Hold off the automatic first spawn
    s.world_mut().last_spawn_ms = Some(0.0);
    s
}

#[test]
fn entity_on_player_is_collected_next_tick() {
    let mut s = playing_session();
    assert_eq!(s.world().player.pos, Vec2::new(400.0, 300.0));
    s.world_mut()
        .place_entity(Vec2::new(400.0, 300.0), SkillLabel::TypeScript, NeonColor::Cyan);
    let before = s.world().particles.len();

    s.advance(&InputTracker::new(), 16.0);

    assert_eq!(s.score(), 10);
    assert!(s.world().entities.is_empty());
    assert_eq!(s.world().particles.len(), before + 10);
}

#[test]
fn up_left_moves_full_speed_on_both_axes() {
    let mut s = playing_session();
    let mut input = InputTracker::new();
    input.set_pressed("w");
    input.set_pressed("ArrowLeft");
    let start = s.world().player.pos;

    s.advance(&input, 16.0);

    let speed = s.world().player.speed;
    assert_eq!(s.world().player.pos - start, Vec2::new(-speed, -speed));
}

#[test]
fn start_twice_resets_both_times() {
    let mut s = playing_session();
    s.world_mut()
        .place_entity(Vec2::new(400.0, 300.0), SkillLabel::Ai, NeonColor::Green);
    s.world_mut()
        .place_entity(Vec2::new(100.0, 100.0), SkillLabel::Git, NeonColor::Pink);
    s.advance(&InputTracker::new(), 16.0);
    assert!(s.score() > 0);
    assert!(!s.world().particles.is_empty());

    s.start();
    assert_eq!(s.score(), 0);
    assert!(s.world().entities.is_empty());
    assert!(s.world().particles.is_empty());

    s.start();
    assert_eq!(s.phase(), SessionPhase::Playing);
    assert_eq!(s.score(), 0);
    assert!(s.world().entities.is_empty());
    assert!(s.world().particles.is_empty());
}

#[test]
fn particle_removed_on_the_tick_life_reaches_zero() {
    let mut s = playing_session();
    s.world_mut()
        .place_entity(Vec2::new(400.0, 300.0), SkillLabel::Unity, NeonColor::Orange);
    let input = InputTracker::new();

    let decay = s.world().tuning.particle_decay;
    let mut expected_life = 1.0f32;
    loop {
        s.advance(&input, 0.0);
        expected_life -= decay;
        if expected_life <= 0.0 {
            assert!(s.world().particles.is_empty());
            break;
        }
        assert_eq!(s.world().particles.len(), 10);
        assert!(s.world().particles.iter().all(|p| p.life == expected_life));
    }
}

#[test]
fn frame_loop_runs_whole_round() {
    let tuning = Tuning {
        round_time_ms: Some(5000.0),
        ..Default::default()
    };
    let mut game = FrameLoop::new(
        RecordingSurface::new(800.0, 600.0),
        11,
        tuning,
        Settings::default(),
    )
    .unwrap();
    let token = game.start(None);

    let mut frames = 0;
    while game.frame(&token, frames as f64 * 16.0) == FrameOutcome::Continue {
        frames += 1;
        assert!(frames < 1000, "round never ended");
    }

    let hud = game.hud();
    assert_eq!(hud.phase, SessionPhase::GameOver);
    // One spawn on the first tick, then one per full interval
    let collected = game.session().world().collected as usize;
    assert_eq!(hud.entities + collected, 5);
    assert!(token.is_cancelled());
}

#[test]
fn tick_works_on_a_bare_world() {
    let mut world = skill_collector::sim::World::new(1, Vec2::new(320.0, 240.0), Tuning::default());
    let mut input = InputTracker::new();
    input.set_pressed("s");
    for _ in 0..100 {
        tick(&mut world, &input, 16.0);
    }
    assert_eq!(world.player.pos.y, 220.0);
}

#[test]
fn zero_decay_tuning_falls_back_and_particles_expire() {
    let tuning = Tuning::from_json_or_default(r#"{ "particle_decay": 0.0 }"#);
    let mut s = Session::new(5, Vec2::new(800.0, 600.0), tuning);
    s.start();
    s.world_mut().last_spawn_ms = Some(0.0);
    s.world_mut()
        .place_entity(Vec2::new(400.0, 300.0), SkillLabel::React, NeonColor::Purple);

    let input = InputTracker::new();
    for _ in 0..10_000 {
        s.advance(&input, 0.0);
    }
    assert_eq!(s.score(), 10);
    assert!(s.world().particles.is_empty());
}
