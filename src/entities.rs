/// All game entity types. Pure data, no logic.
///
/// World space: x runs across the stage, y runs up it, z is depth and is
/// ignored by gameplay. The stage is viewed from behind (camera on the −z
/// side looking toward +z), so screen-left is world +x.

use glam::Vec3;

use crate::config::Tuning;
use crate::schedule::Scheduler;

// ── Colours ───────────────────────────────────────────────────────────────────

/// RGBA, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const BLUE: Color = Color([0.0, 0.0, 1.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0, 1.0]);
}

pub const SHIP_COLOR: Color = Color::GREEN;
pub const PLAYER_SHOT_COLOR: Color = Color::YELLOW;
pub const ALIEN_SHOT_COLOR: Color = Color::RED;

// ── Entity kinds ──────────────────────────────────────────────────────────────

/// Tag carried by everything that can be drawn or hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ship,
    Alien,
    PlayerShot,
    AlienShot,
}

impl EntityKind {
    /// Edge length of the unscaled model.
    pub fn base_size(self) -> f32 {
        match self {
            EntityKind::Ship | EntityKind::Alien => 0.2,
            EntityKind::PlayerShot | EntityKind::AlienShot => 0.1,
        }
    }

    /// Uniform scale applied when the model is placed in the world.
    pub fn scale(self) -> f32 {
        match self {
            EntityKind::Ship => 2.5,
            EntityKind::Alien => 2.0,
            EntityKind::PlayerShot | EntityKind::AlienShot => 1.5,
        }
    }

    /// Half the drawn edge length.
    pub fn render_half_size(self) -> f32 {
        self.base_size() * self.scale() / 2.0
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Hard,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Normal => Mode::Hard,
            Mode::Hard => Mode::Normal,
        }
    }

    pub fn background(self) -> Background {
        match self {
            Mode::Normal => Background::Sky,
            Mode::Hard => Background::Space,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Sky,
    Space,
}

impl Background {
    pub fn asset(self) -> &'static str {
        match self {
            Background::Sky => "sky.png",
            Background::Space => "space.png",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
    Won,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One tick's worth of player intent. `left`/`right` are held keys,
/// `fire`/`toggle_mode` are edges that happened since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub toggle_mode: bool,
}

// ── Ship & aliens ─────────────────────────────────────────────────────────────

pub const SHIP_START: Vec3 = Vec3::new(0.0, -2.4, -0.8);

#[derive(Clone, Debug)]
pub struct Ship {
    pub position: Vec3,
    pub color: Color,
}

/// Grid slot an alien was created in. Stable for the alien's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlienId(pub usize);

/// Bookkeeping for one dive, from peel-off until the alien is home again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Descent {
    pub started_at: u64,
    /// Scales the sideways wobble; drawn from `[0.5, 1.0)`.
    pub amplitude: f32,
    pub has_started_shooting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlienState {
    Patrolling,
    Descending(Descent),
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub id: AlienId,
    pub position: Vec3,
    /// Formation slot; the alien returns here after a dive.
    pub home: Vec3,
    pub color: Color,
    pub state: AlienState,
}

impl Alien {
    pub fn is_descending(&self) -> bool {
        matches!(self.state, AlienState::Descending(_))
    }

    pub fn descent(&self) -> Option<&Descent> {
        match &self.state {
            AlienState::Descending(descent) => Some(descent),
            AlienState::Patrolling => None,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Alien,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub position: Vec3,
    pub owner: ProjectileOwner,
    /// Sideways travel per unit of downward travel. Always 0 for player shots.
    pub slope: f32,
}

impl Projectile {
    pub fn kind(&self) -> EntityKind {
        match self.owner {
            ProjectileOwner::Player => EntityKind::PlayerShot,
            ProjectileOwner::Alien => EntityKind::AlienShot,
        }
    }

    pub fn color(&self) -> Color {
        match self.owner {
            ProjectileOwner::Player => PLAYER_SHOT_COLOR,
            ProjectileOwner::Alien => ALIEN_SHOT_COLOR,
        }
    }
}

// ── Renderer contract ─────────────────────────────────────────────────────────

/// What the renderer gets for each visible entity. Read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    pub position: Vec3,
    pub color: Color,
    pub half_size: f32,
    pub kind: EntityKind,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Interval bookkeeping, established by the first tick after a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timers {
    pub last_color_change: u64,
    pub last_descent: u64,
}

impl Timers {
    pub fn starting_at(now: u64) -> Self {
        Timers {
            last_color_change: now,
            last_descent: now,
        }
    }
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    /// Every live alien, in grid order.
    pub aliens: Vec<Alien>,
    /// Ids of diving aliens, oldest dive first. Indexes into `aliens`.
    pub descending: Vec<AlienId>,
    pub player_shot: Option<Projectile>,
    pub alien_shots: Vec<Projectile>,
    pub current_color: Color,
    pub alternate_color: Color,
    /// Patrol direction, always +1 or −1.
    pub direction: i32,
    pub timers: Option<Timers>,
    pub status: GameStatus,
    pub mode: Mode,
    /// Bumped on every reset; events scheduled under an older value are dropped.
    pub generation: u64,
    pub events: Scheduler,
    pub tuning: Tuning,
    pub frame: u64,
}
