//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::clamp_to_surface;
use crate::tuning::Tuning;

/// Lifecycle of one play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Start overlay showing, nothing simulates
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, final score showing
    GameOver,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Playing => "playing",
            SessionPhase::GameOver => "game-over",
        }
    }
}

/// Skill names a collectible can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLabel {
    React,
    TypeScript,
    NodeJs,
    Python,
    Unity,
    CSharp,
    Sql,
    Git,
    UiUx,
    Ai,
}

impl SkillLabel {
    pub const ALL: [SkillLabel; 10] = [
        SkillLabel::React,
        SkillLabel::TypeScript,
        SkillLabel::NodeJs,
        SkillLabel::Python,
        SkillLabel::Unity,
        SkillLabel::CSharp,
        SkillLabel::Sql,
        SkillLabel::Git,
        SkillLabel::UiUx,
        SkillLabel::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLabel::React => "React",
            SkillLabel::TypeScript => "TypeScript",
            SkillLabel::NodeJs => "Node.js",
            SkillLabel::Python => "Python",
            SkillLabel::Unity => "Unity",
            SkillLabel::CSharp => "C#",
            SkillLabel::Sql => "SQL",
            SkillLabel::Git => "Git",
            SkillLabel::UiUx => "UI/UX",
            SkillLabel::Ai => "AI",
        }
    }
}

/// Collectible palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeonColor {
    Purple,
    Cyan,
    Green,
    Orange,
    Pink,
}

impl NeonColor {
    pub const ALL: [NeonColor; 5] = [
        NeonColor::Purple,
        NeonColor::Cyan,
        NeonColor::Green,
        NeonColor::Orange,
        NeonColor::Pink,
    ];

    /// 8-bit RGB channels
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            NeonColor::Purple => [0xB0, 0x26, 0xFF],
            NeonColor::Cyan => [0x00, 0xF0, 0xFF],
            NeonColor::Green => [0x00, 0xFF, 0x41],
            NeonColor::Orange => [0xFF, 0x5F, 0x00],
            NeonColor::Pink => [0xFF, 0x00, 0xCC],
        }
    }

    /// Normalized RGBA with the given alpha
    pub fn rgba(&self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha]
    }
}

/// The player's orb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick on each held axis
    pub speed: f32,
}

impl Player {
    /// Player at the center of the surface
    pub fn centered(surface: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: surface / 2.0,
            radius: tuning.player_radius,
            speed: tuning.player_speed,
        }
    }
}

/// A floating skill waiting to be collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub label: SkillLabel,
    pub color: NeonColor,
}

/// A cosmetic spark from a collection burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: NeonColor,
    pub life: f32, // 0-1, decreases every tick
}

/// Everything one session simulates
///
/// Owned by the session; only `tick` mutates it while playing.
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Drawing surface size in pixels
    pub surface: Vec2,
    pub tuning: Tuning,
    pub player: Player,
    /// Live collectibles in spawn order
    pub entities: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub score: u64,
    /// Entities collected this session
    pub collected: u32,
    /// Simulated wall-clock time since session start
    pub elapsed_ms: f64,
    /// When the last entity spawned; `None` until the first spawn
    pub last_spawn_ms: Option<f64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl World {
    pub fn new(seed: u64, surface: Vec2, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            surface,
            player: Player::centered(surface, &tuning),
            tuning,
            entities: Vec::new(),
            particles: Vec::new(),
            score: 0,
            collected: 0,
            elapsed_ms: 0.0,
            last_spawn_ms: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Fresh session state. The RNG keeps its stream so consecutive
    /// sessions do not replay the same spawns.
    pub fn reset(&mut self) {
        self.player = Player::centered(self.surface, &self.tuning);
        self.entities.clear();
        self.particles.clear();
        self.score = 0;
        self.collected = 0;
        self.elapsed_ms = 0.0;
        self.last_spawn_ms = None;
        self.time_ticks = 0;
        self.next_id = 1;
    }

    /// Restart the RNG from a new seed
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Track a resized surface. The player and every live entity are
    /// pulled back inside it so nothing is stranded out of reach.
    pub fn resize(&mut self, surface: Vec2) {
        self.surface = surface;
        self.player.pos = clamp_to_surface(self.player.pos, self.player.radius, surface);
        for entity in &mut self.entities {
            entity.pos = clamp_to_surface(entity.pos, entity.radius, surface);
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert a collectible at a fixed position (host scripting and tests)
    pub fn place_entity(&mut self, pos: Vec2, label: SkillLabel, color: NeonColor) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Collectible {
            id,
            pos,
            radius: self.tuning.entity_radius,
            label,
            color,
        });
        id
    }
}
