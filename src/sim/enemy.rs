//! Enemy archetypes
//!
//! Every enemy shares the same update; archetypes differ only in fixed data,
//! looked up from a static table keyed by [`EnemyKind`].

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::SWIM_MAX_FRAME;

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Angler1,
    Angler2,
    /// Grants a power-up instead of costing score when rammed
    Lucky,
    /// Bursts into a drone swarm when destroyed
    HiveWhale,
    BubWhale,
    Stalker,
    Razorfin,
    /// Grants a power-up when destroyed
    MoonFish,
    /// Only spawned by a dying HiveWhale
    Drone,
}

/// Fixed per-archetype data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub width: f32,
    pub height: f32,
    pub score: i32,
    pub lives: i32,
    /// Number of animation rows in the sprite sheet
    pub sprite_rows: u32,
    /// Horizontal speed magnitude range (pixels per frame)
    pub min_speed: f32,
    pub max_speed: f32,
    /// DOM id of the sprite sheet image
    pub sprite: &'static str,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 9] = [
        EnemyKind::Angler1,
        EnemyKind::Angler2,
        EnemyKind::Lucky,
        EnemyKind::HiveWhale,
        EnemyKind::BubWhale,
        EnemyKind::Stalker,
        EnemyKind::Razorfin,
        EnemyKind::MoonFish,
        EnemyKind::Drone,
    ];

    pub fn archetype(self) -> &'static Archetype {
        match self {
            EnemyKind::Angler1 => &ANGLER1,
            EnemyKind::Angler2 => &ANGLER2,
            EnemyKind::Lucky => &LUCKY,
            EnemyKind::HiveWhale => &HIVE_WHALE,
            EnemyKind::BubWhale => &BUB_WHALE,
            EnemyKind::Stalker => &STALKER,
            EnemyKind::Razorfin => &RAZORFIN,
            EnemyKind::MoonFish => &MOON_FISH,
            EnemyKind::Drone => &DRONE,
        }
    }
}

const ANGLER1: Archetype = Archetype {
    width: 228.0,
    height: 169.0,
    score: 2,
    lives: 2,
    sprite_rows: 3,
    min_speed: 0.5,
    max_speed: 2.0,
    sprite: "angler1",
};

const ANGLER2: Archetype = Archetype {
    width: 213.0,
    height: 165.0,
    score: 3,
    lives: 3,
    sprite_rows: 2,
    min_speed: 0.5,
    max_speed: 2.0,
    sprite: "angler2",
};

const LUCKY: Archetype = Archetype {
    width: 99.0,
    height: 95.0,
    score: 12,
    lives: 3,
    sprite_rows: 2,
    min_speed: 0.5,
    max_speed: 2.0,
    sprite: "lucky",
};

const HIVE_WHALE: Archetype = Archetype {
    width: 400.0,
    height: 227.0,
    score: 15,
    lives: 15,
    sprite_rows: 1,
    min_speed: 0.2,
    max_speed: 1.4,
    sprite: "hivewhale",
};

const BUB_WHALE: Archetype = Archetype {
    width: 270.0,
    height: 219.0,
    score: 20,
    lives: 20,
    sprite_rows: 2,
    min_speed: 0.2,
    max_speed: 1.0,
    sprite: "bulbwhale",
};

const STALKER: Archetype = Archetype {
    width: 243.0,
    height: 123.0,
    score: 5,
    lives: 5,
    sprite_rows: 1,
    min_speed: 1.0,
    max_speed: 2.0,
    sprite: "stalker",
};

const RAZORFIN: Archetype = Archetype {
    width: 187.0,
    height: 149.0,
    score: 7,
    lives: 7,
    sprite_rows: 1,
    min_speed: 1.0,
    max_speed: 2.0,
    sprite: "razorfin",
};

const MOON_FISH: Archetype = Archetype {
    width: 227.0,
    height: 240.0,
    score: 15,
    lives: 15,
    sprite_rows: 1,
    min_speed: 2.0,
    max_speed: 2.8,
    sprite: "moonfish",
};

const DRONE: Archetype = Archetype {
    width: 115.0,
    height: 95.0,
    score: 4,
    lives: 4,
    sprite_rows: 2,
    min_speed: 0.5,
    max_speed: 5.2,
    sprite: "drone",
};

/// A live enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Top-left corner; y never changes after spawn
    pub pos: Vec2,
    /// Leftward speed on top of the world scroll
    pub speed: f32,
    pub lives: i32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// Spawn at `pos` with randomised speed and sprite row
    pub fn new(kind: EnemyKind, pos: Vec2, rng: &mut impl Rng) -> Self {
        let arch = kind.archetype();
        Self {
            kind,
            pos,
            speed: rng.random_range(arch.min_speed..arch.max_speed),
            lives: arch.lives,
            frame_x: 0,
            frame_y: rng.random_range(0..arch.sprite_rows),
            marked_for_deletion: false,
        }
    }

    /// Spawn just past the right edge at a random height.
    ///
    /// The band is `0.95 * height - enemy height` so most of the body
    /// stays on screen.
    pub fn spawn_offscreen(
        kind: EnemyKind,
        playfield: Vec2,
        rng: &mut impl Rng,
    ) -> Self {
        let band = (playfield.y * 0.95 - kind.archetype().height).max(0.0);
        let y = rng.random::<f32>() * band;
        Self::new(kind, Vec2::new(playfield.x, y), rng)
    }

    pub fn archetype(&self) -> &'static Archetype {
        self.kind.archetype()
    }

    pub fn score(&self) -> i32 {
        self.archetype().score
    }

    pub fn size(&self) -> Vec2 {
        let arch = self.archetype();
        Vec2::new(arch.width, arch.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size())
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn update(&mut self, scroll_speed: f32) {
        self.frame_x = if self.frame_x < SWIM_MAX_FRAME {
            self.frame_x + 1
        } else {
            0
        };
        self.pos.x -= self.speed + scroll_speed;
        if self.bounds().right() < 0.0 {
            self.marked_for_deletion = true;
        }
    }

    /// Apply one projectile hit; returns true only for the hit that kills.
    ///
    /// Lives bottom out at zero, so overkill hits in the same frame are not
    /// counted as further deaths.
    pub fn take_hit(&mut self) -> bool {
        let was_alive = self.lives > 0;
        self.lives = (self.lives - 1).max(0);
        was_alive && self.lives == 0
    }
}
