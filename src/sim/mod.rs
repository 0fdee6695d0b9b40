//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Time comes only from the `dt` passed to `tick`
//! - Randomness comes only from the state's seeded RNG
//! - Deletions are flagged during the update and swept with `retain`
//! - Sounds are queued as cues, never played directly

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod input;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use enemy::{Enemy, EnemyKind};
pub use entity::{Background, Explosion, ExplosionKind, Layer, Particle, Projectile, Shield};
pub use input::{InputEvent, InputState, Key};
pub use player::Player;
pub use state::{GameState, Outcome, Sound};
pub use tick::{frame_delta, tick};
