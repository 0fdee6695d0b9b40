//! Data-driven game balance
//!
//! Defaults reproduce the shipped game. A host may override any subset of
//! fields with JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors that can occur when loading tuning data.
#[derive(Debug, Error)]
pub enum TuningError {
    /// JSON parsing failed.
    #[error("Parse error in tuning data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error("Invalid tuning value '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// World scroll speed (pixels per frame)
    pub scroll_speed: f32,

    // === Run ===
    pub time_limit_ms: f32,
    pub winning_score: i32,

    // === Ammo ===
    pub starting_ammo: u32,
    pub max_ammo: u32,
    pub ammo_interval_ms: f32,

    // === Enemies ===
    pub enemy_interval_ms: f32,

    // === Player ===
    pub player_speed: f32,
    pub power_up_limit_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            scroll_speed: SCROLL_SPEED,

            time_limit_ms: TIME_LIMIT_MS,
            winning_score: WINNING_SCORE,

            starting_ammo: STARTING_AMMO,
            max_ammo: MAX_AMMO,
            ammo_interval_ms: AMMO_INTERVAL_MS,

            enemy_interval_ms: ENEMY_INTERVAL_MS,

            player_speed: PLAYER_MAX_SPEED,
            power_up_limit_ms: POWER_UP_LIMIT_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for shipping a tuning file alongside the page)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("time_limit_ms", self.time_limit_ms),
            ("ammo_interval_ms", self.ammo_interval_ms),
            ("enemy_interval_ms", self.enemy_interval_ms),
            ("power_up_limit_ms", self.power_up_limit_ms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        for (field, value) in [
            ("scroll_speed", self.scroll_speed),
            ("player_speed", self.player_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                });
            }
        }

        if self.starting_ammo > self.max_ammo {
            return Err(TuningError::Invalid {
                field: "starting_ammo",
                reason: format!("{} exceeds max_ammo {}", self.starting_ammo, self.max_ammo),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "time_limit_ms": 30000, "max_ammo": 80 }"#).unwrap();
        assert_eq!(tuning.time_limit_ms, 30_000.0);
        assert_eq!(tuning.max_ammo, 80);
        assert_eq!(tuning.starting_ammo, STARTING_AMMO);
        assert_eq!(tuning.playfield_width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_round_trip() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Tuning::from_json(r#"{ "enemy_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "enemy_interval_ms",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "starting_ammo": 60, "max_ammo": 50 }"#).unwrap_err();
        assert!(err.to_string().contains("starting_ammo"));
    }
}
