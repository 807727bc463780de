//! Collaborator traits the gameplay core calls out to
//!
//! The core never reaches for a global; every side effect goes through one of
//! these, injected into the player aggregate at construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Audio clips the core can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Accepted swipe
    Move,
    /// Instant-kill obstacle hit
    Hit,
    /// Health pool emptied
    LifeLost,
    /// Last life gone
    GameOver,
}

/// Player sprite tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Normal,
    Invincible,
    Dead,
}

impl Tint {
    /// RGBA color for this tint
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Tint::Normal => [1.0, 1.0, 1.0, 1.0],
            Tint::Invincible => [0.5, 0.85, 0.9, 1.0],
            Tint::Dead => [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Movement trail color, driven by scroll speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrailColor {
    #[default]
    Normal,
    Danger,
}

/// Receives score deltas (always positive)
pub trait ScoreAccumulator {
    fn increase_score(&mut self, delta: u32);
}

/// Session-level entry points owned by whoever runs the game
pub trait Orchestrator {
    /// End the session. Called at most once per player.
    fn game_over(&mut self);
    /// Visual cue shown when a swipe tries to retreat below the watermark
    fn play_restriction_cue(&mut self);
}

/// Audio/particle/visual device. Calls must never block.
pub trait FeedbackSink {
    fn play_sound(&mut self, sound: Sound);
    fn spawn_particle(&mut self, pos: Vec2);
    fn set_tint(&mut self, tint: Tint);
    fn set_trail(&mut self, trail: TrailColor);
    /// Death flash animation
    fn play_animation(&mut self);
    /// True while a previously triggered sound is still audible
    fn is_still_playing(&self) -> bool;
}

#[cfg(test)]
pub(crate) mod fakes {
    //! Recording collaborators shared by the unit tests

    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingScore {
        pub deltas: Vec<u32>,
    }

    impl RecordingScore {
        pub fn total(&self) -> u32 {
            self.deltas.iter().sum()
        }
    }

    impl ScoreAccumulator for RecordingScore {
        fn increase_score(&mut self, delta: u32) {
            self.deltas.push(delta);
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingOrchestrator {
        pub game_overs: u32,
        pub restriction_cues: u32,
    }

    impl Orchestrator for RecordingOrchestrator {
        fn game_over(&mut self) {
            self.game_overs += 1;
        }

        fn play_restriction_cue(&mut self) {
            self.restriction_cues += 1;
        }
    }

    /// Playback stays "busy" for `busy_polls` calls to `is_still_playing`
    /// after any sound starts.
    #[derive(Debug, Default)]
    pub struct RecordingFeedback {
        pub sounds: Vec<Sound>,
        pub particles: Vec<Vec2>,
        pub tints: Vec<Tint>,
        pub trails: Vec<TrailColor>,
        pub animations: u32,
        pub busy_polls: u32,
        pub polls: std::cell::Cell<u32>,
        pub remaining: std::cell::Cell<u32>,
    }

    impl RecordingFeedback {
        pub fn with_busy_polls(busy_polls: u32) -> Self {
            Self {
                busy_polls,
                ..Default::default()
            }
        }

        pub fn count(&self, sound: Sound) -> usize {
            self.sounds.iter().filter(|s| **s == sound).count()
        }
    }

    impl FeedbackSink for RecordingFeedback {
        fn play_sound(&mut self, sound: Sound) {
            self.sounds.push(sound);
            self.remaining.set(self.busy_polls);
        }

        fn spawn_particle(&mut self, pos: Vec2) {
            self.particles.push(pos);
        }

        fn set_tint(&mut self, tint: Tint) {
            self.tints.push(tint);
        }

        fn set_trail(&mut self, trail: TrailColor) {
            self.trails.push(trail);
        }

        fn play_animation(&mut self) {
            self.animations += 1;
        }

        fn is_still_playing(&self) -> bool {
            self.polls.set(self.polls.get() + 1);
            let left = self.remaining.get();
            if left == 0 {
                false
            } else {
                self.remaining.set(left - 1);
                true
            }
        }
    }
}
