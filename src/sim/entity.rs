//! Transient and decorative entities
//!
//! Projectiles, gear particles, explosions, the shield overlay and the
//! parallax background layers. All motion here is per frame; only sprite
//! animation timers consume `dt`.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::*;

/// Advance a sprite frame timer; returns true when the frame should step.
///
/// Matches the "wait for the interval, then step and restart" cadence used by
/// every timed sprite in the game: the tick that steps does not accumulate.
#[inline]
fn step_frame_timer(timer: &mut f32, dt: f32) -> bool {
    if *timer > SPRITE_INTERVAL_MS {
        *timer = 0.0;
        true
    } else {
        *timer += dt;
        false
    }
}

/// A fireball fired by the player, travelling right
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal speed (pixels per frame)
    pub speed: f32,
    pub frame_x: u32,
    frame_timer: f32,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            speed: rng.random_range(2.8..3.0),
            frame_x: 0,
            frame_timer: 0.0,
            marked_for_deletion: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    pub fn update(&mut self, dt: f32, playfield_width: f32) {
        self.pos.x += self.speed;
        if self.pos.x > playfield_width * PROJECTILE_RANGE {
            self.marked_for_deletion = true;
        }

        if step_frame_timer(&mut self.frame_timer, dt) {
            self.frame_x = (self.frame_x + 1) % PROJECTILE_FRAMES;
        }
    }
}

/// A spinning gear thrown out of a damaged enemy
#[derive(Debug, Clone)]
pub struct Particle {
    /// Center of the gear
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation (radians) and its per-frame change
    pub angle: f32,
    pub angular_vel: f32,
    /// Rendered edge length
    pub size: f32,
    /// Cell in the 3x3 gear sheet
    pub sprite_cell: (u32, u32),
    pub bounces: u32,
    /// Distance above the playfield floor at which the gear bounces
    pub bounce_boundary: f32,
    pub marked_for_deletion: bool,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        // Size modifier snaps to one decimal (0.5, 0.6, ... 1.0)
        let size_modifier = ((rng.random::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), -rng.random::<f32>() * 15.0),
            angle: 0.0,
            angular_vel: rng.random_range(-0.1..0.1),
            size: PARTICLE_SPRITE_SIZE * size_modifier,
            sprite_cell: (rng.random_range(0..3), rng.random_range(0..3)),
            bounces: 0,
            bounce_boundary: rng.random_range(60.0..140.0),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, scroll_speed: f32, playfield_height: f32) {
        self.angle += self.angular_vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.pos.x += self.vel.x - scroll_speed;
        self.pos.y += self.vel.y;

        if self.pos.y > playfield_height || self.pos.x < -self.size {
            self.marked_for_deletion = true;
        }

        if self.pos.y > playfield_height - self.bounce_boundary
            && self.bounces < PARTICLE_MAX_BOUNCES
        {
            self.bounces += 1;
            self.vel.y *= PARTICLE_BOUNCE_DAMPING;
        }
    }
}

/// Explosion flavours (same timing, different sprite sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

/// A one-shot explosion animation anchored in the world
#[derive(Debug, Clone)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Top-left corner
    pub pos: Vec2,
    pub frame_x: u32,
    frame_timer: f32,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// Create an explosion centred on `center`
    pub fn new(kind: ExplosionKind, center: Vec2) -> Self {
        Self {
            kind,
            pos: center - Vec2::splat(EXPLOSION_SIZE * 0.5),
            frame_x: 0,
            frame_timer: 0.0,
            marked_for_deletion: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, EXPLOSION_SIZE, EXPLOSION_SIZE)
    }

    pub fn update(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.x -= scroll_speed;
        if step_frame_timer(&mut self.frame_timer, dt) {
            self.frame_x += 1;
        }
        if self.frame_x > EXPLOSION_MAX_FRAME {
            self.marked_for_deletion = true;
        }
    }
}

/// Shield flash drawn over the player; replays from frame 0 on every hit
#[derive(Debug, Clone, Default)]
pub struct Shield {
    pub frame_x: u32,
    frame_timer: f32,
}

impl Shield {
    pub fn update(&mut self, dt: f32) {
        if !self.is_active() {
            return;
        }
        if step_frame_timer(&mut self.frame_timer, dt) {
            self.frame_x += 1;
        }
    }

    /// Restart the flash animation
    pub fn reset(&mut self) {
        self.frame_x = 0;
        self.frame_timer = 0.0;
    }

    /// Whether there is still a frame left to draw
    pub fn is_active(&self) -> bool {
        self.frame_x < SHIELD_FRAMES
    }
}

/// One horizontally tiling background strip
#[derive(Debug, Clone)]
pub struct Layer {
    /// 1-based image index (layer1..layer4)
    pub index: u32,
    pub speed_modifier: f32,
    pub x: f32,
}

impl Layer {
    pub fn new(index: u32, speed_modifier: f32) -> Self {
        Self {
            index,
            speed_modifier,
            x: 0.0,
        }
    }

    pub fn update(&mut self, scroll_speed: f32) {
        if self.x <= -LAYER_WIDTH {
            self.x = 0.0;
        } else {
            self.x -= scroll_speed * self.speed_modifier;
        }
    }
}

/// Parallax background: three layers behind the action, one in front
#[derive(Debug, Clone)]
pub struct Background {
    pub layers: [Layer; 3],
    pub foreground: Layer,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: [Layer::new(1, 0.2), Layer::new(2, 0.4), Layer::new(3, 0.6)],
            foreground: Layer::new(4, 0.6),
        }
    }
}

impl Background {
    pub fn update(&mut self, scroll_speed: f32) {
        for layer in &mut self.layers {
            layer.update(scroll_speed);
        }
        self.foreground.update(scroll_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_projectile_deleted_past_range() {
        let mut rng = rng();
        let mut p = Projectile::new(Vec2::new(PLAYFIELD_WIDTH * PROJECTILE_RANGE - 1.0, 0.0), &mut rng);
        assert!((2.8..3.0).contains(&p.speed));
        p.update(16.0, PLAYFIELD_WIDTH);
        assert!(p.marked_for_deletion);
    }

    #[test]
    fn test_projectile_animation_wraps() {
        let mut rng = rng();
        let mut p = Projectile::new(Vec2::ZERO, &mut rng);
        // Each step needs one accumulating tick plus one stepping tick
        for _ in 0..(PROJECTILE_FRAMES * 2) {
            p.update(SPRITE_INTERVAL_MS + 1.0, 10_000.0);
        }
        assert_eq!(p.frame_x, 0);
    }

    #[test]
    fn test_particle_bounces_at_most_twice() {
        let mut rng = rng();
        let mut particle = Particle::new(Vec2::new(600.0, 250.0), &mut rng);
        particle.vel = Vec2::new(0.0, 10.0);
        let mut bounce_frames = 0;
        for _ in 0..400 {
            let before = particle.bounces;
            particle.update(0.0, PLAYFIELD_HEIGHT);
            if particle.bounces > before {
                bounce_frames += 1;
            }
            if particle.marked_for_deletion {
                break;
            }
        }
        assert_eq!(bounce_frames, PARTICLE_MAX_BOUNCES);
        assert!(particle.marked_for_deletion);
    }

    #[test]
    fn test_particle_size_snaps_to_tenths() {
        let mut rng = rng();
        for _ in 0..50 {
            let p = Particle::new(Vec2::ZERO, &mut rng);
            let modifier = p.size / PARTICLE_SPRITE_SIZE;
            assert!((0.5..=1.0).contains(&modifier));
            assert!(((modifier * 10.0).round() - modifier * 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_explosion_lifecycle() {
        let center = Vec2::new(500.0, 250.0);
        let mut e = Explosion::new(ExplosionKind::Fire, center);
        assert_eq!(e.bounds().center(), center);

        let mut ticks = 0;
        while !e.marked_for_deletion {
            e.update(SPRITE_INTERVAL_MS + 1.0, 1.0);
            ticks += 1;
            assert!(ticks < 100, "explosion never finished");
        }
        assert_eq!(e.frame_x, EXPLOSION_MAX_FRAME + 1);
        // Scrolled left once per tick
        assert_eq!(e.pos.x, center.x - EXPLOSION_SIZE * 0.5 - ticks as f32);
    }

    #[test]
    fn test_shield_plays_once_then_resets() {
        let mut shield = Shield::default();
        for _ in 0..200 {
            shield.update(SPRITE_INTERVAL_MS + 1.0);
        }
        assert_eq!(shield.frame_x, SHIELD_FRAMES);
        assert!(!shield.is_active());

        shield.reset();
        assert_eq!(shield.frame_x, 0);
        assert!(shield.is_active());
    }

    #[test]
    fn test_layer_wraps() {
        let mut layer = Layer::new(1, 1.0);
        layer.x = -LAYER_WIDTH;
        layer.update(1.0);
        assert_eq!(layer.x, 0.0);
        layer.update(1.0);
        assert_eq!(layer.x, -1.0);
    }
}
