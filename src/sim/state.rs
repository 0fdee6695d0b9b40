//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; the host only reads it
//! back for drawing and drains the queued sound cues.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyKind};
use super::entity::{Background, Explosion, Particle, Shield};
use super::player::Player;
use super::spawn::{roll_enemy_kind, roll_explosion_kind};
use crate::tuning::Tuning;

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    PowerUp,
    PowerDown,
    /// Player rammed by an enemy
    Hit,
    Shoot,
    /// Fireball struck an enemy
    Explosion,
    /// Shield flash restarted
    Shield,
}

impl Sound {
    pub const ALL: [Sound; 6] = [
        Sound::PowerUp,
        Sound::PowerDown,
        Sound::Hit,
        Sound::Shoot,
        Sound::Explosion,
        Sound::Shield,
    ];

    /// Stable cue name
    pub fn name(self) -> &'static str {
        match self {
            Sound::PowerUp => "powerUp",
            Sound::PowerDown => "powerDown",
            Sound::Hit => "hit",
            Sound::Shoot => "shoot",
            Sound::Explosion => "explosion",
            Sound::Shield => "shield",
        }
    }
}

/// End-of-run result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed (for logging/reproduction)
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Elapsed run time (ms), frozen once the run is over
    pub game_time: f32,
    /// Set exactly once when `game_time` passes the limit; never cleared
    game_over: bool,
    /// Can go negative: every ram costs a point
    pub score: i32,
    /// Draw bounding boxes and enemy lives
    pub debug: bool,
    /// Frames simulated so far
    pub frame: u64,
    pub ammo_timer: f32,
    pub enemy_timer: f32,
    pub background: Background,
    pub player: Player,
    pub shield: Shield,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    /// Sound cues raised since the host last drained them
    sounds: Vec<Sound>,
}

impl GameState {
    /// Create a new run; the first BubWhale is already on its way in
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut state = Self::empty(tuning, seed);
        let whale = Enemy::spawn_offscreen(EnemyKind::BubWhale, state.playfield(), &mut state.rng);
        state.enemies.push(whale);
        state
    }

    /// A run with no enemies on screen (useful for scripted scenarios)
    pub fn empty(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            game_time: 0.0,
            game_over: false,
            score: 0,
            debug: false,
            frame: 0,
            ammo_timer: 0.0,
            enemy_timer: 0.0,
            background: Background::default(),
            shield: Shield::default(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.tuning.playfield_width, self.tuning.playfield_height)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Latch the game-over flag. Returns true only on the transition.
    pub(crate) fn finish(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        true
    }

    /// Win/lose once the run is over
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            None
        } else if self.score > self.tuning.winning_score {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Lose)
        }
    }

    pub fn ammo(&self) -> u32 {
        self.player.ammo
    }

    pub fn is_powered_up(&self) -> bool {
        self.player.power_up
    }

    pub(crate) fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    /// Sound cues queued since the last call, in the order they were raised
    pub fn drain_sounds(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.sounds)
    }

    /// Pending cues without consuming them
    pub fn pending_sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// Fire the player's launcher(s) using the state's RNG and cue list
    pub fn fire(&mut self) -> usize {
        self.player.shoot_top(&mut self.rng, &mut self.sounds)
    }

    /// Spawn one weighted-random enemy at the right edge
    pub fn add_enemy(&mut self) {
        let kind = roll_enemy_kind(&mut self.rng);
        let enemy = Enemy::spawn_offscreen(kind, self.playfield(), &mut self.rng);
        log::debug!("Spawned {:?} at y={:.0}", kind, enemy.pos.y);
        self.enemies.push(enemy);
    }

    /// Spawn an explosion of random flavour centred on `center`
    pub fn add_explosion(&mut self, center: Vec2) {
        let kind = roll_explosion_kind(&mut self.rng);
        self.explosions.push(Explosion::new(kind, center));
    }

    /// Throw `count` gears out of `center`
    pub fn add_particles(&mut self, center: Vec2, count: usize) {
        for _ in 0..count {
            let particle = Particle::new(center, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Player-side sound and state split for borrow-friendly updates
    pub(crate) fn player_and_sounds(&mut self) -> (&mut Player, &mut Vec<Sound>) {
        (&mut self.player, &mut self.sounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_run() {
        let state = GameState::new(Tuning::default(), 42);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].kind, EnemyKind::BubWhale);
        assert_eq!(state.ammo(), STARTING_AMMO);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_outcome_threshold() {
        let mut state = GameState::empty(Tuning::default(), 1);
        state.score = WINNING_SCORE;
        assert!(state.finish());
        // Strictly greater than the winning score is needed
        assert_eq!(state.outcome(), Some(Outcome::Lose));
        state.score = WINNING_SCORE + 1;
        assert_eq!(state.outcome(), Some(Outcome::Win));
        assert!(!state.finish());
        assert!(state.is_game_over());
    }

    #[test]
    fn test_fire_queues_sound() {
        let mut state = GameState::empty(Tuning::default(), 1);
        assert_eq!(state.fire(), 1);
        assert_eq!(state.pending_sounds(), &[Sound::Shoot]);
        assert_eq!(state.drain_sounds(), vec![Sound::Shoot]);
        assert!(state.pending_sounds().is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::empty(Tuning::default(), 99);
        let mut b = GameState::empty(Tuning::default(), 99);
        for _ in 0..10 {
            a.add_enemy();
            b.add_enemy();
        }
        let kinds = |s: &GameState| s.enemies.iter().map(|e| (e.kind, e.pos.y)).collect::<Vec<_>>();
        assert_eq!(kinds(&a), kinds(&b));
    }
}
