//! Game-over sequencing
//!
//! Replaces a suspend-until-audio-finishes coroutine with an explicit state
//! machine, ticked once per frame.

use serde::{Deserialize, Serialize};

use super::movement::MovementController;
use crate::ports::{FeedbackSink, Orchestrator, Sound, Tint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurvivalPhase {
    /// Player still has lives
    #[default]
    Alive,
    /// Triggered; freeze and game-over sound run on the next step
    Disabling,
    /// Waiting for the game-over sound to stop
    WaitingForAudio,
    /// Orchestrator notified
    Completed,
    /// Sequence abandoned before completion
    Cancelled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurvivalSequencer {
    phase: SurvivalPhase,
}

impl SurvivalSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SurvivalPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            SurvivalPhase::Disabling | SurvivalPhase::WaitingForAudio
        )
    }

    /// Start the sequence. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.phase != SurvivalPhase::Alive {
            return false;
        }
        log::info!("Out of lives, starting game-over sequence");
        self.phase = SurvivalPhase::Disabling;
        true
    }

    /// Stop waiting. There is no retry once cancelled.
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::info!("Game-over sequence cancelled");
            self.phase = SurvivalPhase::Cancelled;
        }
    }

    /// Drive the sequence one step.
    ///
    /// `Disabling` completes within a single step; `WaitingForAudio` resumes
    /// on the first step that finds the feedback device silent. A device that
    /// never goes silent holds the sequence here indefinitely.
    pub fn tick(
        &mut self,
        movement: &mut MovementController,
        feedback: &mut dyn FeedbackSink,
        orchestrator: &mut dyn Orchestrator,
    ) {
        match self.phase {
            SurvivalPhase::Disabling => {
                feedback.set_tint(Tint::Dead);
                movement.disable_input();
                feedback.play_sound(Sound::GameOver);
                self.phase = SurvivalPhase::WaitingForAudio;
            }
            SurvivalPhase::WaitingForAudio => {
                if !feedback.is_still_playing() {
                    log::info!("Game-over sound finished, ending session");
                    self.phase = SurvivalPhase::Completed;
                    orchestrator.game_over();
                }
            }
            SurvivalPhase::Alive | SurvivalPhase::Completed | SurvivalPhase::Cancelled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fakes::{RecordingFeedback, RecordingOrchestrator};
    use crate::sim::movement::ControlState;
    use crate::tuning::Tuning;

    struct Rig {
        sequencer: SurvivalSequencer,
        movement: MovementController,
        feedback: RecordingFeedback,
        orchestrator: RecordingOrchestrator,
    }

    impl Rig {
        fn new(busy_polls: u32) -> Self {
            Self {
                sequencer: SurvivalSequencer::new(),
                movement: MovementController::new(&Tuning::default()),
                feedback: RecordingFeedback::with_busy_polls(busy_polls),
                orchestrator: RecordingOrchestrator::default(),
            }
        }

        fn tick(&mut self) {
            self.sequencer
                .tick(&mut self.movement, &mut self.feedback, &mut self.orchestrator);
        }
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut rig = Rig::new(0);
        rig.tick();
        assert_eq!(rig.sequencer.phase(), SurvivalPhase::Alive);
        assert_eq!(rig.movement.state(), ControlState::Active);
        assert!(rig.feedback.sounds.is_empty());
    }

    #[test]
    fn test_disabling_step_freezes_player() {
        let mut rig = Rig::new(3);
        assert!(rig.sequencer.trigger());
        rig.tick();
        assert_eq!(rig.sequencer.phase(), SurvivalPhase::WaitingForAudio);
        assert_eq!(rig.movement.state(), ControlState::InputDisabled);
        assert_eq!(rig.feedback.tints, vec![Tint::Dead]);
        assert_eq!(rig.feedback.sounds, vec![Sound::GameOver]);
        assert_eq!(rig.orchestrator.game_overs, 0);
    }

    #[test]
    fn test_waits_until_audio_stops() {
        let mut rig = Rig::new(3);
        rig.sequencer.trigger();
        rig.tick();
        for _ in 0..3 {
            rig.tick();
            assert_eq!(rig.orchestrator.game_overs, 0);
        }
        rig.tick();
        assert_eq!(rig.orchestrator.game_overs, 1);
        assert_eq!(rig.sequencer.phase(), SurvivalPhase::Completed);
        assert_eq!(rig.feedback.polls.get(), 4);

        for _ in 0..5 {
            rig.tick();
        }
        assert_eq!(rig.orchestrator.game_overs, 1);
    }

    #[test]
    fn test_trigger_only_once() {
        let mut rig = Rig::new(0);
        assert!(rig.sequencer.trigger());
        assert!(!rig.sequencer.trigger());
        rig.tick();
        rig.tick();
        assert!(!rig.sequencer.trigger());
        assert_eq!(rig.feedback.count(Sound::GameOver), 1);
        assert_eq!(rig.orchestrator.game_overs, 1);
    }

    #[test]
    fn test_cancel_stops_wait() {
        let mut rig = Rig::new(10);
        rig.sequencer.trigger();
        rig.tick();
        rig.sequencer.cancel();
        for _ in 0..20 {
            rig.tick();
        }
        assert_eq!(rig.sequencer.phase(), SurvivalPhase::Cancelled);
        assert_eq!(rig.orchestrator.game_overs, 0);
        assert!(!rig.sequencer.trigger());
    }

    #[test]
    fn test_cancel_when_alive_is_noop() {
        let mut rig = Rig::new(0);
        rig.sequencer.cancel();
        assert_eq!(rig.sequencer.phase(), SurvivalPhase::Alive);
    }
}
