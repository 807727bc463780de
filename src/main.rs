//! Lane Runner headless entry point
//!
//! Runs a scripted, seeded session against log-backed collaborators.
//!
//! Usage: `lane-runner [tuning.json] [seed]`

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use lane_runner::consts::SIM_DT;
use lane_runner::headless::{HeadlessFeedback, HeadlessSession};
use lane_runner::sim::{DamageOutcome, Player, SurvivalPhase, SwipeOutcome};
use lane_runner::{Scoreboard, Tuning};

/// Give up after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;
/// Frames between scripted swipes
const SWIPE_INTERVAL: u32 = 20;
/// Frames between obstacle checks
const HAZARD_INTERVAL: u32 = 90;
/// Frames between scroll speed changes
const SPEED_INTERVAL: u32 = 600;
/// Length of the invincibility window after a lost life
const INVINCIBLE_FRAMES: u32 = 120;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("Falling back to default tuning: {}", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);

    log::info!("Starting run with seed {}", seed);
    let score = run(&tuning, seed);
    log::info!("Final score: {}", score);
}

fn run(tuning: &Tuning, seed: u64) -> u64 {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut player = Player::new(
        tuning,
        HeadlessFeedback::new(),
        HeadlessSession::new(),
        Scoreboard::new(),
    );
    let mut invincible_frames = 0u32;

    for frame in 1..=MAX_FRAMES {
        if frame % SWIPE_INTERVAL == 0 {
            let dir = match rng.random_range(0..4) {
                0 => Vec2::X,
                1 => Vec2::NEG_X,
                2 => Vec2::Y,
                _ => Vec2::NEG_Y,
            };
            if player.handle_swipe(dir) != SwipeOutcome::Accepted {
                log::debug!("frame {}: swipe {:?} rejected", frame, dir);
            }
        }

        if frame % SPEED_INTERVAL == 0 {
            let speed = rng.random_range(0.75..2.0);
            player.edit_move_speed(speed);
            player.set_reversed_controls(rng.random_bool(0.2));
        }

        if frame % HAZARD_INTERVAL == 0 && rng.random_bool(0.3) {
            let knockback = Vec2::new(if rng.random_bool(0.5) { 1.0 } else { -1.0 }, 0.0);
            player.rebound(knockback);
            if player.hit() == DamageOutcome::LifeLost {
                player.set_invincible(true);
                invincible_frames = INVINCIBLE_FRAMES;
            }
        }

        if invincible_frames > 0 {
            invincible_frames -= 1;
            if invincible_frames == 0 && player.survival_phase() == SurvivalPhase::Alive {
                player.set_invincible(false);
            }
        }

        player.feedback_mut().advance(SIM_DT);
        player.tick(SIM_DT);

        if player.orchestrator().is_over() {
            log::info!(
                "Run ended on frame {} at row {} ({} blocked retreats)",
                frame,
                player.movement().progress().furthest_y().floor(),
                player.orchestrator().restriction_cues()
            );
            return player.scores().score();
        }
    }

    log::warn!("Frame cap reached without game over");
    player.scores().score()
}
