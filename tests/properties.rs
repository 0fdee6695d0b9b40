//! Invariants that hold for any input sequence

use gear_diver::sim::{GameState, InputEvent, InputState, Key, tick};
use gear_diver::Tuning;
use proptest::prelude::*;

/// One frame of player input plus the frame interval
#[derive(Debug, Clone)]
struct Frame {
    dt: f32,
    up: bool,
    down: bool,
    fire: u8,
}

fn frame() -> impl Strategy<Value = Frame> {
    (0.0f32..120.0, any::<bool>(), any::<bool>(), 0u8..4).prop_map(|(dt, up, down, fire)| Frame {
        dt,
        up,
        down,
        fire,
    })
}

fn apply(input: &mut InputState, frame: &Frame) {
    if frame.up {
        input.press(Key::Up);
    } else {
        input.release(Key::Up);
    }
    if frame.down {
        input.press(Key::Down);
    } else {
        input.release(Key::Down);
    }
    for _ in 0..frame.fire {
        input.push(InputEvent::Fire);
    }
}

proptest! {
    #[test]
    fn ammo_never_exceeds_max(seed in any::<u64>(), frames in prop::collection::vec(frame(), 1..300)) {
        let mut state = GameState::new(Tuning::default(), seed);
        let mut input = InputState::new();
        for f in &frames {
            apply(&mut input, f);
            tick(&mut state, &mut input, f.dt);
            prop_assert!(state.ammo() <= state.player.max_ammo);
        }
    }

    #[test]
    fn player_stays_in_vertical_range(seed in any::<u64>(), frames in prop::collection::vec(frame(), 1..300)) {
        let mut state = GameState::empty(Tuning::default(), seed);
        let mut input = InputState::new();
        let (min_y, max_y) = state.player.y_range(state.playfield().y);
        for f in &frames {
            apply(&mut input, f);
            tick(&mut state, &mut input, f.dt);
            prop_assert!(state.player.pos.y >= min_y && state.player.pos.y <= max_y);
        }
    }

    #[test]
    fn game_over_is_final(seed in any::<u64>(), frames in prop::collection::vec(frame(), 1..200)) {
        let tuning = Tuning {
            time_limit_ms: 500.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, seed);
        let mut input = InputState::new();
        let mut frozen: Option<(i32, f32)> = None;

        for f in &frames {
            apply(&mut input, f);
            tick(&mut state, &mut input, f.dt);
            match frozen {
                Some((score, time)) => {
                    prop_assert!(state.is_game_over());
                    prop_assert_eq!(state.score, score);
                    prop_assert_eq!(state.game_time, time);
                }
                None if state.is_game_over() => frozen = Some((state.score, state.game_time)),
                None => {}
            }
        }
    }

    #[test]
    fn flagged_entities_never_survive_a_tick(seed in any::<u64>(), frames in prop::collection::vec(frame(), 1..200)) {
        let mut state = GameState::new(Tuning::default(), seed);
        let mut input = InputState::new();
        for f in &frames {
            apply(&mut input, f);
            tick(&mut state, &mut input, f.dt);
            prop_assert!(state.enemies.iter().all(|e| !e.marked_for_deletion));
            prop_assert!(state.particles.iter().all(|p| !p.marked_for_deletion));
            prop_assert!(state.explosions.iter().all(|e| !e.marked_for_deletion));
        }
    }
}
