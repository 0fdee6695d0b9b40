//! The player's submarine
//!
//! Owns its fireballs and the ammo/power-up economy. Sounds are pushed onto
//! the caller's cue list rather than played.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::entity::Projectile;
use super::state::Sound;
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner (x never changes)
    pub pos: Vec2,
    pub size: Vec2,
    /// Current vertical speed (pixels per frame)
    pub speed_y: f32,
    pub max_speed: f32,
    /// Whole shots available, always in [0, max_ammo]
    pub ammo: u32,
    pub max_ammo: u32,
    /// Fractional power-up regeneration, in tenths of a shot
    regen_tenths: u32,
    pub power_up: bool,
    pub power_up_timer: f32,
    pub power_up_limit: f32,
    /// Live fireballs in firing order
    pub projectiles: Vec<Projectile>,
    pub frame_x: u32,
    /// Sprite row: 0 normal, 1 powered up
    pub frame_y: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_START_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed_y: 0.0,
            max_speed: tuning.player_speed,
            ammo: tuning.starting_ammo.min(tuning.max_ammo),
            max_ammo: tuning.max_ammo,
            regen_tenths: 0,
            power_up: false,
            power_up_timer: 0.0,
            power_up_limit: tuning.power_up_limit_ms,
            projectiles: Vec::new(),
            frame_x: 0,
            frame_y: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Vertical travel limits: half the sprite may leave the screen either way
    pub fn y_range(&self, playfield_height: f32) -> (f32, f32) {
        let half = self.size.y * 0.5;
        (-half, playfield_height - half)
    }

    /// Advance one frame.
    ///
    /// `vertical` is -1 (up), +1 (down) or 0, as sampled from held keys.
    pub fn update(&mut self, dt: f32, vertical: f32, playfield: Vec2, sounds: &mut Vec<Sound>) {
        self.frame_x = if self.frame_x < SWIM_MAX_FRAME {
            self.frame_x + 1
        } else {
            0
        };

        self.speed_y = vertical * self.max_speed;
        let (min_y, max_y) = self.y_range(playfield.y);
        self.pos.y = (self.pos.y + self.speed_y).clamp(min_y, max_y);

        for projectile in &mut self.projectiles {
            projectile.update(dt, playfield.x);
        }
        self.projectiles.retain(|p| !p.marked_for_deletion);

        if self.power_up {
            if self.power_up_timer > self.power_up_limit {
                sounds.push(Sound::PowerDown);
                self.power_up_timer = 0.0;
                self.regen_tenths = 0;
                self.power_up = false;
                self.frame_y = 0;
                log::info!("Power-up expired");
            } else {
                self.regen_tenths += POWER_UP_REGEN_TENTHS;
                if self.regen_tenths >= 10 {
                    self.regen_tenths -= 10;
                    self.add_ammo(1);
                }
                self.frame_y = 1;
                self.power_up_timer += dt;
            }
        }
    }

    /// Add ammo, capped at the maximum
    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount).min(self.max_ammo);
    }

    /// Fire from the nose. Returns the number of fireballs launched.
    ///
    /// Does nothing on an empty magazine. While powered up a second fireball
    /// leaves the bottom launcher for free.
    pub fn shoot_top(&mut self, rng: &mut impl Rng, sounds: &mut Vec<Sound>) -> usize {
        if self.ammo == 0 {
            return 0;
        }
        sounds.push(Sound::Shoot);
        let muzzle = Vec2::new(self.pos.x + self.size.x - 10.0, self.pos.y + 30.0);
        self.projectiles.push(Projectile::new(muzzle, rng));
        self.ammo -= 1;

        if self.power_up {
            self.shoot_bottom(rng);
            2
        } else {
            1
        }
    }

    /// Fire from the lower launcher without spending ammo
    pub fn shoot_bottom(&mut self, rng: &mut impl Rng) {
        let muzzle = Vec2::new(
            self.pos.x + self.size.x - 10.0,
            self.pos.y + self.size.y - 14.0,
        );
        self.projectiles.push(Projectile::new(muzzle, rng));
    }

    /// Refill ammo and (re)start the power-up window
    pub fn enter_power_up(&mut self, sounds: &mut Vec<Sound>) {
        if self.ammo < self.max_ammo {
            self.ammo = self.max_ammo;
        }
        self.power_up_timer = 0.0;
        self.regen_tenths = 0;
        self.power_up = true;
        sounds.push(Sound::PowerUp);
        log::info!("Power-up engaged");
    }
}
