//! Headless collaborators
//!
//! Stand-ins for the audio/visual device and the session orchestrator when no
//! frontend is attached. Everything is logged; audio playback is simulated with
//! per-clip durations so the game-over wait behaves like the real thing.

use glam::Vec2;

use crate::ports::{FeedbackSink, Orchestrator, Sound, Tint, TrailColor};

/// Simulated clip length in seconds
pub fn clip_length(sound: Sound) -> f32 {
    match sound {
        Sound::Move => 0.1,
        Sound::Hit => 0.25,
        Sound::LifeLost => 0.6,
        Sound::GameOver => 1.5,
    }
}

/// Logs feedback triggers and tracks simulated playback
#[derive(Debug, Default)]
pub struct HeadlessFeedback {
    tint: Tint,
    trail: TrailColor,
    /// Seconds until the longest active clip ends
    playing_for: f32,
    particles: u32,
}

impl HeadlessFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated playback by one frame
    pub fn advance(&mut self, dt: f32) {
        self.playing_for = (self.playing_for - dt).max(0.0);
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn trail(&self) -> TrailColor {
        self.trail
    }

    pub fn particles(&self) -> u32 {
        self.particles
    }
}

impl FeedbackSink for HeadlessFeedback {
    fn play_sound(&mut self, sound: Sound) {
        log::debug!("sfx {:?}", sound);
        // One-shots overlap; playback ends with the longest
        self.playing_for = self.playing_for.max(clip_length(sound));
    }

    fn spawn_particle(&mut self, pos: Vec2) {
        log::debug!("particle burst at ({:.2}, {:.2})", pos.x, pos.y);
        self.particles += 1;
    }

    fn set_tint(&mut self, tint: Tint) {
        log::debug!("tint {:?} {:?}", tint, tint.rgba());
        self.tint = tint;
    }

    fn set_trail(&mut self, trail: TrailColor) {
        log::debug!("trail {:?}", trail);
        self.trail = trail;
    }

    fn play_animation(&mut self) {
        log::debug!("death flash");
    }

    fn is_still_playing(&self) -> bool {
        self.playing_for > 0.0
    }
}

/// Tracks the end of a headless session
#[derive(Debug, Default)]
pub struct HeadlessSession {
    over: bool,
    restriction_cues: u32,
}

impl HeadlessSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn restriction_cues(&self) -> u32 {
        self.restriction_cues
    }
}

impl Orchestrator for HeadlessSession {
    fn game_over(&mut self) {
        log::info!("Game over");
        self.over = true;
    }

    fn play_restriction_cue(&mut self) {
        self.restriction_cues += 1;
        log::debug!("restriction line flashed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::score::Scoreboard;
    use crate::sim::{Player, SurvivalPhase};
    use crate::tuning::Tuning;

    #[test]
    fn test_playback_runs_for_longest_clip() {
        let mut feedback = HeadlessFeedback::new();
        feedback.play_sound(Sound::GameOver);
        feedback.play_sound(Sound::Move);
        feedback.advance(1.0);
        assert!(feedback.is_still_playing());
        feedback.advance(0.6);
        assert!(!feedback.is_still_playing());
    }

    #[test]
    fn test_tracks_latest_trail() {
        let mut player = Player::new(
            &Tuning::default(),
            HeadlessFeedback::new(),
            HeadlessSession::new(),
            Scoreboard::new(),
        );
        assert_eq!(player.feedback().trail(), TrailColor::Normal);
        player.edit_move_speed(1.5);
        assert_eq!(player.feedback().trail(), TrailColor::Danger);
        player.edit_move_speed(0.8);
        assert_eq!(player.feedback().trail(), TrailColor::Normal);
    }

    #[test]
    fn test_session_ends_after_game_over_clip() {
        let tuning = Tuning {
            lives_on_start: 1,
            ..Tuning::default()
        };
        let mut player = Player::new(
            &tuning,
            HeadlessFeedback::new(),
            HeadlessSession::new(),
            Scoreboard::new(),
        );

        player.hit();
        assert_eq!(player.feedback().tint(), Tint::Dead);
        assert_eq!(player.feedback().particles(), 1);

        let mut frames = 0;
        while !player.orchestrator().is_over() {
            player.feedback_mut().advance(SIM_DT);
            player.tick(SIM_DT);
            frames += 1;
            assert!(frames < 1000, "game-over wait never resumed");
        }
        // 1.5s clip at 60 Hz
        assert!(frames >= 89);
        assert_eq!(player.survival_phase(), SurvivalPhase::Completed);
    }
}
