//! Heads-up display
//!
//! Turns game state into the text and ammo bars drawn over the playfield.

use crate::sim::{GameState, Outcome};

/// Ammo bar tint while powered up
pub const POWERED_AMMO_COLOR: &str = "#ffffbd";
pub const TEXT_COLOR: &str = "white";
pub const FONT_FAMILY: &str = "Bangers";
pub const FONT_SIZE: f32 = 25.0;
pub const BANNER_FONT_SIZE: f32 = 50.0;

/// Ammo bar layout: 3x20 bars on a 5px pitch
pub const AMMO_BAR_ORIGIN: (f32, f32) = (20.0, 50.0);
pub const AMMO_BAR_PITCH: f32 = 5.0;
pub const AMMO_BAR_SIZE: (f32, f32) = (3.0, 20.0);

/// Everything the overlay shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub score_text: String,
    pub time_text: String,
    pub ammo_bars: u32,
    pub ammo_color: &'static str,
    /// Headline and subline once the run has ended
    pub banner: Option<(&'static str, &'static str)>,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score_text: format!("Score: {}", state.score),
            time_text: format!("Time: {:.1}", state.game_time * 0.001),
            ammo_bars: state.ammo(),
            ammo_color: if state.is_powered_up() {
                POWERED_AMMO_COLOR
            } else {
                TEXT_COLOR
            },
            banner: state.outcome().map(banner_for),
        }
    }
}

fn banner_for(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Win => ("You Win!", "Well done!"),
        Outcome::Lose => ("You lose!", "Try again!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_running_hud() {
        let mut state = GameState::empty(Tuning::default(), 5);
        state.score = 42;
        state.game_time = 12_345.0;
        let hud = HudView::from_state(&state);
        assert_eq!(hud.score_text, "Score: 42");
        assert_eq!(hud.time_text, "Time: 12.3");
        assert_eq!(hud.ammo_bars, 20);
        assert_eq!(hud.ammo_color, TEXT_COLOR);
        assert_eq!(hud.banner, None);
    }

    #[test]
    fn test_powered_tint() {
        let mut state = GameState::empty(Tuning::default(), 5);
        state.player.power_up = true;
        assert_eq!(HudView::from_state(&state).ammo_color, POWERED_AMMO_COLOR);
    }

    #[test]
    fn test_end_banners() {
        let tuning = Tuning {
            time_limit_ms: 1.0,
            ..Default::default()
        };
        let mut state = GameState::empty(tuning, 5);
        let mut input = crate::sim::InputState::new();
        crate::sim::tick(&mut state, &mut input, 2.0);
        assert_eq!(
            HudView::from_state(&state).banner,
            Some(("You lose!", "Try again!"))
        );

        state.score = 1001;
        assert_eq!(
            HudView::from_state(&state).banner,
            Some(("You Win!", "Well done!"))
        );
    }
}
