//! Player entity aggregate
//!
//! Owns movement, health and the game-over sequencer, plus the collaborators
//! they report to. Every external setter routes through here so the whole
//! player is driven from one frame context.

use glam::Vec2;

use super::health::{DamageOutcome, HealthState};
use super::movement::{MovementController, SwipeOutcome};
use super::progress::RowProgress;
use super::survival::{SurvivalPhase, SurvivalSequencer};
use crate::ports::{FeedbackSink, Orchestrator, ScoreAccumulator};
use crate::tuning::Tuning;

pub struct Player<F, O, S> {
    movement: MovementController,
    health: HealthState,
    survival: SurvivalSequencer,
    feedback: F,
    orchestrator: O,
    scores: S,
}

impl<F, O, S> Player<F, O, S>
where
    F: FeedbackSink,
    O: Orchestrator,
    S: ScoreAccumulator,
{
    pub fn new(tuning: &Tuning, feedback: F, orchestrator: O, scores: S) -> Self {
        Self {
            movement: MovementController::new(tuning),
            health: HealthState::new(tuning.lives_on_start),
            survival: SurvivalSequencer::new(),
            feedback,
            orchestrator,
            scores,
        }
    }

    /// Per-frame update: movement and scoring, then the game-over sequence
    pub fn tick(&mut self, dt: f32) -> RowProgress {
        let progress = self.movement.advance(dt, &mut self.scores);
        self.survival
            .tick(&mut self.movement, &mut self.feedback, &mut self.orchestrator);
        progress
    }

    pub fn handle_swipe(&mut self, direction: Vec2) -> SwipeOutcome {
        self.movement
            .handle_swipe(direction, &mut self.feedback, &mut self.orchestrator)
    }

    pub fn rebound(&mut self, direction: Vec2) {
        self.movement.rebound(direction);
    }

    pub fn edit_move_speed(&mut self, speed: f32) {
        self.movement.edit_move_speed(speed, &mut self.feedback);
    }

    pub fn set_reversed_controls(&mut self, reversed: bool) {
        self.movement.set_reversed_controls(reversed);
    }

    pub fn damage(&mut self, amount: i32) -> DamageOutcome {
        let pos = self.movement.position();
        let outcome = self.health.damage(amount, pos, &mut self.feedback);
        self.after_damage(outcome);
        outcome
    }

    /// Obstacle hit costing a full health pool
    pub fn hit(&mut self) -> DamageOutcome {
        let pos = self.movement.position();
        let outcome = self.health.hit(pos, &mut self.feedback);
        self.after_damage(outcome);
        outcome
    }

    pub fn heal(&mut self, amount: i32) {
        self.health.heal(amount);
    }

    /// Swaps the tint unconditionally; the last tint write wins, including
    /// over the dead tint after game over.
    pub fn set_invincible(&mut self, invincible: bool) {
        self.health.set_invincible(invincible, &mut self.feedback);
    }

    /// Abandon a pending game-over wait
    pub fn cancel_game_over(&mut self) {
        self.survival.cancel();
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn health(&self) -> &HealthState {
        &self.health
    }

    pub fn survival_phase(&self) -> SurvivalPhase {
        self.survival.phase()
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    fn after_damage(&mut self, outcome: DamageOutcome) {
        if outcome == DamageOutcome::OutOfLives && self.survival.trigger() {
            // Freeze immediately rather than on the next frame
            self.survival
                .tick(&mut self.movement, &mut self.feedback, &mut self.orchestrator);
        }
    }
}
