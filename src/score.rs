//! Session score accumulator
//!
//! Lives only as long as the session; best-score persistence belongs to the
//! frontend.

use serde::{Deserialize, Serialize};

use crate::ports::ScoreAccumulator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    score: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

impl ScoreAccumulator for Scoreboard {
    fn increase_score(&mut self, delta: u32) {
        self.score += u64::from(delta);
    }
}
