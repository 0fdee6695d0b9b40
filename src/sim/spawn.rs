//! Weighted random spawning
//!
//! Enemy and explosion variants are picked with a single uniform draw
//! compared against cumulative thresholds.

use rand::Rng;

use super::enemy::EnemyKind;
use super::entity::ExplosionKind;

/// Cumulative upper bounds for the enemy draw (Drones never spawn on their own)
const ENEMY_TABLE: [(f32, EnemyKind); 8] = [
    (0.2, EnemyKind::Angler1),
    (0.3, EnemyKind::Razorfin),
    (0.4, EnemyKind::Stalker),
    (0.6, EnemyKind::Angler2),
    (0.7, EnemyKind::HiveWhale),
    (0.8, EnemyKind::BubWhale),
    (0.9, EnemyKind::MoonFish),
    (1.0, EnemyKind::Lucky),
];

/// Map a uniform draw in [0, 1) to an enemy archetype
pub fn enemy_kind_for(roll: f32) -> EnemyKind {
    ENEMY_TABLE
        .iter()
        .find(|(upper, _)| roll < *upper)
        .map(|&(_, kind)| kind)
        .unwrap_or(EnemyKind::Lucky)
}

/// Map a uniform draw in [0, 1) to an explosion flavour
pub fn explosion_kind_for(roll: f32) -> ExplosionKind {
    if roll < 0.5 {
        ExplosionKind::Smoke
    } else {
        ExplosionKind::Fire
    }
}

pub fn roll_enemy_kind(rng: &mut impl Rng) -> EnemyKind {
    enemy_kind_for(rng.random())
}

pub fn roll_explosion_kind(rng: &mut impl Rng) -> ExplosionKind {
    explosion_kind_for(rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_enemy_thresholds() {
        let cases = [
            (0.0, EnemyKind::Angler1),
            (0.19, EnemyKind::Angler1),
            (0.2, EnemyKind::Razorfin),
            (0.35, EnemyKind::Stalker),
            (0.4, EnemyKind::Angler2),
            (0.59, EnemyKind::Angler2),
            (0.6, EnemyKind::HiveWhale),
            (0.75, EnemyKind::BubWhale),
            (0.85, EnemyKind::MoonFish),
            (0.9, EnemyKind::Lucky),
            (0.999, EnemyKind::Lucky),
        ];
        for (roll, expected) in cases {
            assert_eq!(enemy_kind_for(roll), expected, "roll {roll}");
        }
    }

    #[test]
    fn test_explosion_coin_flip() {
        assert_eq!(explosion_kind_for(0.0), ExplosionKind::Smoke);
        assert_eq!(explosion_kind_for(0.49), ExplosionKind::Smoke);
        assert_eq!(explosion_kind_for(0.5), ExplosionKind::Fire);
    }

    #[test]
    fn test_roll_never_yields_drone() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..2000 {
            assert_ne!(roll_enemy_kind(&mut rng), EnemyKind::Drone);
        }
    }
}
