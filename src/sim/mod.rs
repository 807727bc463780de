//! Deterministic gameplay core
//!
//! All player logic lives here. This module must stay pure:
//! - Time only advances through `tick(dt)`
//! - Side effects only through the `ports` traits
//! - No rendering or platform dependencies

pub mod health;
pub mod movement;
pub mod player;
pub mod progress;
pub mod survival;

pub use health::{DamageOutcome, HealthDefinition, HealthState};
pub use movement::{ControlState, MovementController, SwipeOutcome};
pub use player::Player;
pub use progress::{GameProgress, RowProgress};
pub use survival::{SurvivalPhase, SurvivalSequencer};
