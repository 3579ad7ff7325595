//! Keyboard state for the movement keys
//!
//! Written by the host's key handlers, read once per tick.

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A key the tracker listens to. Each direction has a letter and an arrow binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedKey {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
}

impl TrackedKey {
    const COUNT: usize = 8;

    /// Map a `KeyboardEvent.key` value; letters match either case
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(TrackedKey::W),
            "a" | "A" => Some(TrackedKey::A),
            "s" | "S" => Some(TrackedKey::S),
            "d" | "D" => Some(TrackedKey::D),
            "ArrowUp" => Some(TrackedKey::ArrowUp),
            "ArrowLeft" => Some(TrackedKey::ArrowLeft),
            "ArrowDown" => Some(TrackedKey::ArrowDown),
            "ArrowRight" => Some(TrackedKey::ArrowRight),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            TrackedKey::W | TrackedKey::ArrowUp => Direction::Up,
            TrackedKey::S | TrackedKey::ArrowDown => Direction::Down,
            TrackedKey::A | TrackedKey::ArrowLeft => Direction::Left,
            TrackedKey::D | TrackedKey::ArrowRight => Direction::Right,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Live pressed/released state of the tracked keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: [bool; TrackedKey::COUNT],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns false if the key is not tracked.
    pub fn set_pressed(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Record a key release. Returns false if the key is not tracked.
    pub fn set_released(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match TrackedKey::from_key(key) {
            Some(k) => {
                self.held[k.index()] = held;
                true
            }
            None => false,
        }
    }

    /// Either binding of the direction is down
    pub fn is_held(&self, direction: Direction) -> bool {
        self.held
            .iter()
            .zip(ALL_KEYS)
            .any(|(&down, key)| down && key.direction() == direction)
    }

    /// Forget every held key (focus loss, session stop)
    pub fn release_all(&mut self) {
        self.held = [false; TrackedKey::COUNT];
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }
}

/// Keys in discriminant order
const ALL_KEYS: [TrackedKey; TrackedKey::COUNT] = [
    TrackedKey::W,
    TrackedKey::A,
    TrackedKey::S,
    TrackedKey::D,
    TrackedKey::ArrowUp,
    TrackedKey::ArrowLeft,
    TrackedKey::ArrowDown,
    TrackedKey::ArrowRight,
];
