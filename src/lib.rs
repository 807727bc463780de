//! Lane Runner - gameplay core of a lane-based vertical runner
//!
//! Core modules:
//! - `sim`: Movement, row scoring, health and the game-over sequence
//! - `ports`: Collaborator traits the core calls out to (score, orchestrator, feedback)
//! - `score`: In-memory score accumulator
//! - `tuning`: Data-driven game balance
//! - `headless`: Log-backed collaborators for running without a frontend

pub mod headless;
pub mod ports;
pub mod score;
pub mod sim;
pub mod tuning;

pub use ports::{FeedbackSink, Orchestrator, ScoreAccumulator, Sound, Tint, TrailColor};
pub use score::Scoreboard;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Lives granted at spawn
    pub const LIVES_ON_START: i32 = 3;
    /// Allowed range for lives at spawn
    pub const MIN_LIVES_ON_START: i32 = 1;
    pub const MAX_LIVES_ON_START: i32 = 3;

    /// Interpolation speed toward the target position (units/sec)
    pub const MOVEMENT_SPEED: f32 = 6.0;
    /// Base auto-scroll rate (units/sec)
    pub const SCROLL_SPEED: f32 = 1.0;
    /// Scroll rates above this recolor the trail
    pub const DANGER_SPEED_THRESHOLD: f32 = 1.0;

    /// Horizontal lane bounds (inclusive)
    pub const MIN_HORIZONTAL: f32 = 0.0;
    pub const MAX_HORIZONTAL: f32 = 3.0;
    /// How far below the watermark a swipe may retreat
    pub const MINIMUM_OFFSET_Y: f32 = 3.0;

    /// First bonus row and the spacing between bonus rows
    pub const FIRST_BONUS_ROW: i64 = 47;
    pub const BONUS_ROW_INTERVAL: i64 = 50;
    /// Rows per extra bonus point
    pub const BONUS_ROW_DIVISOR: i64 = 5;

    /// Score granted for crossing a row boundary
    pub const ROW_SCORE: u32 = 1;
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist <= f32::EPSILON {
        target
    } else {
        current + delta / dist * max_delta
    }
}
