//! Row and bonus-row scoring
//!
//! Score is derived from the vertical watermark: one point whenever the player
//! moves into a new integer row, plus a growing bonus every `bonus_row_interval`
//! rows.

use serde::{Deserialize, Serialize};

use crate::consts::{BONUS_ROW_DIVISOR, ROW_SCORE};
use crate::ports::ScoreAccumulator;
use crate::tuning::Tuning;

/// Scoring produced by a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowProgress {
    /// Points for entering a new row (0 or 1)
    pub row_points: u32,
    /// Bonus-row points (0 when no bonus row was reached)
    pub bonus_points: u32,
}

impl RowProgress {
    pub fn total(&self) -> u32 {
        self.row_points + self.bonus_points
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameProgress {
    /// Highest Y ever reached (non-decreasing)
    furthest_y: f32,
    /// Row at which the next bonus fires (non-decreasing)
    next_bonus_row: i64,
    bonus_row_interval: i64,
}

impl GameProgress {
    pub fn new(start_y: f32, tuning: &Tuning) -> Self {
        Self {
            furthest_y: start_y,
            next_bonus_row: tuning.first_bonus_row,
            bonus_row_interval: tuning.bonus_row_interval,
        }
    }

    pub fn furthest_y(&self) -> f32 {
        self.furthest_y
    }

    pub fn next_bonus_row(&self) -> i64 {
        self.next_bonus_row
    }

    /// Score any row boundary crossed on the way to `current_y`.
    ///
    /// Only one row point per call, however many rows were skipped.
    pub fn evaluate(&mut self, current_y: f32, scores: &mut dyn ScoreAccumulator) -> RowProgress {
        let mut progress = RowProgress::default();
        if current_y <= self.furthest_y {
            return progress;
        }

        let current_row = current_y.floor() as i64;
        let furthest_row = self.furthest_y.floor() as i64;

        if current_row > furthest_row {
            progress.row_points = ROW_SCORE;
            scores.increase_score(ROW_SCORE);
            log::debug!("Entered row {}", current_row);
        }

        if current_row >= self.next_bonus_row {
            let bonus = (current_row / BONUS_ROW_DIVISOR + 1) as u32;
            progress.bonus_points = bonus;
            scores.increase_score(bonus);
            log::info!("Bonus row {} reached: +{}", current_row, bonus);
            self.next_bonus_row += self.bonus_row_interval;
        }

        self.furthest_y = current_y;
        progress
    }
}
