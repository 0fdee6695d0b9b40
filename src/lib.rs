//! Gear Diver - A side-scrolling submarine shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (spawning, movement, collisions, scoring)
//! - `renderer`: Sprite draw-list over an abstract 2D surface (Canvas 2D on web)
//! - `hud`: Score/time/ammo overlay and end-of-run banner
//! - `audio`: Named sound cues played through `<audio>` elements
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::HudView;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 1268.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Nominal frame interval for hosts without a display clock (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Global world scroll speed (pixels per frame)
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Run length and win threshold
    pub const TIME_LIMIT_MS: f32 = 60_000.0;
    pub const WINNING_SCORE: i32 = 1000;

    /// Ammo economy
    pub const STARTING_AMMO: u32 = 20;
    pub const MAX_AMMO: u32 = 50;
    pub const AMMO_INTERVAL_MS: f32 = 500.0;

    /// Enemy spawn cadence
    pub const ENEMY_INTERVAL_MS: f32 = 1000.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 20.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 190.0;
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    pub const POWER_UP_LIMIT_MS: f32 = 10_000.0;
    /// Ammo granted per frame while powered up, in tenths
    pub const POWER_UP_REGEN_TENTHS: u32 = 1;

    /// Last index of the swim cycle shared by player and enemies (frames 0..=37)
    pub const SWIM_MAX_FRAME: u32 = 37;

    /// Sprite animation rate shared by projectiles, shield and explosions
    pub const SPRITE_FPS: f32 = 30.0;
    pub const SPRITE_INTERVAL_MS: f32 = 1000.0 / SPRITE_FPS;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 36.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_FRAMES: u32 = 4;
    /// Projectiles vanish past this fraction of the playfield width
    pub const PROJECTILE_RANGE: f32 = 0.8;

    /// Explosion defaults
    pub const EXPLOSION_SIZE: f32 = 200.0;
    pub const EXPLOSION_MAX_FRAME: u32 = 8;

    /// Shield overlay frames (one-shot)
    pub const SHIELD_FRAMES: u32 = 24;

    /// Particle (gear) defaults
    pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    pub const PARTICLE_MAX_BOUNCES: u32 = 2;
    pub const PARTICLE_BOUNCE_DAMPING: f32 = -0.5;

    /// Background strip width (each layer image tiles twice)
    pub const LAYER_WIDTH: f32 = 1768.0;

    /// HiveWhale death swarm size
    pub const DRONE_SWARM: usize = 5;
}
