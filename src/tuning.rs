//! Data-driven game balance
//!
//! Loaded from JSON; any field left out falls back to the `consts` default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("Failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lives_on_start must be in 1..=3, got {0}")]
    LivesOutOfRange(i32),
    #[error("Horizontal bounds inverted: min {min} > max {max}")]
    InvertedBounds { min: f32, max: f32 },
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidSpeed { field: &'static str, value: f32 },
    #[error("bonus_row_interval must be positive, got {0}")]
    InvalidBonusInterval(i64),
    #[error("first_bonus_row must be non-negative, got {0}")]
    InvalidFirstBonusRow(i64),
    #[error("Start x {x} lies outside lane bounds [{min}, {max}]")]
    StartOutOfBounds { x: f32, min: f32, max: f32 },
}

/// Player balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at spawn (1..=3); also the size of each health pool
    pub lives_on_start: i32,
    /// Interpolation speed toward the target position
    pub movement_speed: f32,
    /// Initial auto-scroll modifier
    pub scroll_speed: f32,
    /// Scroll modifiers above this switch the trail to danger
    pub danger_speed_threshold: f32,
    pub min_horizontal: f32,
    pub max_horizontal: f32,
    /// Swipes may not target below `furthest_y - minimum_offset_y`
    pub minimum_offset_y: f32,
    pub first_bonus_row: i64,
    pub bonus_row_interval: i64,
    pub start_position: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lives_on_start: LIVES_ON_START,
            movement_speed: MOVEMENT_SPEED,
            scroll_speed: SCROLL_SPEED,
            danger_speed_threshold: DANGER_SPEED_THRESHOLD,
            min_horizontal: MIN_HORIZONTAL,
            max_horizontal: MAX_HORIZONTAL,
            minimum_offset_y: MINIMUM_OFFSET_Y,
            first_bonus_row: FIRST_BONUS_ROW,
            bonus_row_interval: BONUS_ROW_INTERVAL,
            start_position: Vec2::ZERO,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(MIN_LIVES_ON_START..=MAX_LIVES_ON_START).contains(&self.lives_on_start) {
            return Err(TuningError::LivesOutOfRange(self.lives_on_start));
        }

        for (field, value) in [
            ("movement_speed", self.movement_speed),
            ("scroll_speed", self.scroll_speed),
            ("danger_speed_threshold", self.danger_speed_threshold),
            ("minimum_offset_y", self.minimum_offset_y),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidSpeed { field, value });
            }
        }

        if self.min_horizontal > self.max_horizontal {
            return Err(TuningError::InvertedBounds {
                min: self.min_horizontal,
                max: self.max_horizontal,
            });
        }
        if self.bonus_row_interval <= 0 {
            return Err(TuningError::InvalidBonusInterval(self.bonus_row_interval));
        }
        if self.first_bonus_row < 0 {
            return Err(TuningError::InvalidFirstBonusRow(self.first_bonus_row));
        }

        let x = self.start_position.x;
        if x < self.min_horizontal || x > self.max_horizontal {
            return Err(TuningError::StartOutOfBounds {
                x,
                min: self.min_horizontal,
                max: self.max_horizontal,
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
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.lives_on_start, 3);
        assert_eq!(tuning.first_bonus_row, 47);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "lives_on_start": 1, "scroll_speed": 2.5 }"#).unwrap();
        assert_eq!(tuning.lives_on_start, 1);
        assert_eq!(tuning.scroll_speed, 2.5);
        assert_eq!(tuning.max_horizontal, MAX_HORIZONTAL);
    }

    #[test]
    fn test_rejects_too_many_lives() {
        let err = Tuning::from_json(r#"{ "lives_on_start": 4 }"#).unwrap_err();
        assert!(matches!(err, TuningError::LivesOutOfRange(4)));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = Tuning::from_json(r#"{ "min_horizontal": 3.0, "max_horizontal": 1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::InvertedBounds { .. }));
    }

    #[test]
    fn test_rejects_start_outside_lanes() {
        let err = Tuning::from_json(r#"{ "start_position": [5.0, 0.0] }"#).unwrap_err();
        assert!(matches!(err, TuningError::StartOutOfBounds { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ lives_on_start: }").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/lane-runner-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
