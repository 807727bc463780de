//! Auto-scroll and lane movement
//!
//! The player scrolls upward continuously while swipes shift a discrete target
//! position. The live position chases the target at a fixed speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::progress::{GameProgress, RowProgress};
use crate::move_towards;
use crate::ports::{FeedbackSink, Orchestrator, ScoreAccumulator, Sound, TrailColor};
use crate::tuning::Tuning;

/// Whether the controller still accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlState {
    Active,
    /// Terminal: entered on game over, never left
    InputDisabled,
}

/// Result of a swipe request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Accepted,
    /// Target x would leave the lanes
    OutOfBounds,
    /// Target y would drop below the scroll watermark floor
    BelowWatermark,
    /// Controller no longer takes input
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementController {
    position: Vec2,
    target: Vec2,
    /// Auto-scroll modifier (units/sec)
    move_speed: f32,
    /// Interpolation speed toward `target`
    movement_speed: f32,
    danger_speed_threshold: f32,
    min_horizontal: f32,
    max_horizontal: f32,
    minimum_offset_y: f32,
    reversed_controls: bool,
    trail: TrailColor,
    state: ControlState,
    progress: GameProgress,
}

impl MovementController {
    pub fn new(tuning: &Tuning) -> Self {
        let start = tuning.start_position;
        Self {
            position: start,
            target: start,
            move_speed: tuning.scroll_speed,
            movement_speed: tuning.movement_speed,
            danger_speed_threshold: tuning.danger_speed_threshold,
            min_horizontal: tuning.min_horizontal,
            max_horizontal: tuning.max_horizontal,
            minimum_offset_y: tuning.minimum_offset_y,
            reversed_controls: false,
            trail: TrailColor::Normal,
            state: ControlState::Active,
            progress: GameProgress::new(start.y, tuning),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn trail(&self) -> TrailColor {
        self.trail
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn reversed_controls(&self) -> bool {
        self.reversed_controls
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    /// Lowest Y a swipe may target
    pub fn retreat_floor(&self) -> f32 {
        self.progress.furthest_y() - self.minimum_offset_y
    }

    /// Advance one frame: scroll, chase the target, then score rows.
    pub fn advance(&mut self, dt: f32, scores: &mut dyn ScoreAccumulator) -> RowProgress {
        if self.state == ControlState::InputDisabled {
            return RowProgress::default();
        }

        let scroll = self.move_speed * dt;
        self.position.y += scroll;
        self.target.y += scroll;

        if self.position != self.target {
            self.position = move_towards(self.position, self.target, self.movement_speed * dt);
        }

        self.progress.evaluate(self.position.y, scores)
    }

    /// Shift the target by a decoded swipe direction
    pub fn handle_swipe(
        &mut self,
        direction: Vec2,
        feedback: &mut dyn FeedbackSink,
        orchestrator: &mut dyn Orchestrator,
    ) -> SwipeOutcome {
        if self.state == ControlState::InputDisabled {
            return SwipeOutcome::Disabled;
        }

        let direction = if self.reversed_controls {
            -direction
        } else {
            direction
        };
        let candidate = self.target + direction;

        if candidate.x < self.min_horizontal || candidate.x > self.max_horizontal {
            log::debug!("Swipe to x={} rejected: outside lanes", candidate.x);
            return SwipeOutcome::OutOfBounds;
        }

        if candidate.y < self.retreat_floor() {
            log::debug!("Swipe to y={} rejected: below watermark", candidate.y);
            orchestrator.play_restriction_cue();
            return SwipeOutcome::BelowWatermark;
        }

        self.target = candidate;
        feedback.play_sound(Sound::Move);
        SwipeOutcome::Accepted
    }

    /// Knockback from a collision. Never rejected.
    ///
    /// When the target sits on a lane edge the player is pushed back one row
    /// instead, so a sideways rebound cannot pin it against the wall.
    pub fn rebound(&mut self, direction: Vec2) {
        if self.target.x >= self.max_horizontal || self.target.x <= self.min_horizontal {
            self.target += Vec2::NEG_Y;
        } else {
            self.target += direction;
        }
    }

    pub fn edit_move_speed(&mut self, speed: f32, feedback: &mut dyn FeedbackSink) {
        self.move_speed = speed;
        self.trail = if speed > self.danger_speed_threshold {
            TrailColor::Danger
        } else {
            TrailColor::Normal
        };
        feedback.set_trail(self.trail);
    }

    pub fn set_reversed_controls(&mut self, reversed: bool) {
        self.reversed_controls = reversed;
    }

    pub fn disable_input(&mut self) {
        if self.state != ControlState::InputDisabled {
            log::info!("Movement input disabled");
        }
        self.state = ControlState::InputDisabled;
    }
}
