//! Lives, health pool and invincibility

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ports::{FeedbackSink, Sound, Tint};

/// Raw health numbers.
///
/// `current_health` is deliberately left unclamped in both directions: a
/// consumed life does not refill the pool and healing has no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDefinition {
    pub max_health: i32,
    pub current_health: i32,
    pub lives: i32,
}

impl HealthDefinition {
    /// One health point per starting life
    pub fn new(lives_on_start: i32) -> Self {
        Self {
            max_health: lives_on_start,
            current_health: lives_on_start,
            lives: lives_on_start,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// Apply damage; returns true when this emptied the pool and cost a life
    pub fn damage(&mut self, amount: i32) -> bool {
        self.current_health -= amount;
        if self.is_dead() {
            self.lives = (self.lives - 1).max(0);
            true
        } else {
            false
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.current_health += amount;
    }
}

/// What a damage call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invincible, nothing changed
    Ignored,
    /// Health dropped but the pool is not empty
    Wounded,
    /// A life was lost, more remain
    LifeLost,
    /// No lives remain
    OutOfLives,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthState {
    definition: HealthDefinition,
    invincible: bool,
}

impl HealthState {
    pub fn new(lives_on_start: i32) -> Self {
        Self {
            definition: HealthDefinition::new(lives_on_start),
            invincible: false,
        }
    }

    pub fn definition(&self) -> &HealthDefinition {
        &self.definition
    }

    pub fn lives(&self) -> i32 {
        self.definition.lives
    }

    pub fn current_health(&self) -> i32 {
        self.definition.current_health
    }

    pub fn is_dead(&self) -> bool {
        self.definition.is_dead()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Obstacle hit: costs a whole health pool
    pub fn hit(&mut self, pos: Vec2, feedback: &mut dyn FeedbackSink) -> DamageOutcome {
        if self.invincible {
            return DamageOutcome::Ignored;
        }
        feedback.play_sound(Sound::Hit);
        let amount = self.definition.max_health;
        self.damage(amount, pos, feedback)
    }

    pub fn damage(&mut self, amount: i32, pos: Vec2, feedback: &mut dyn FeedbackSink) -> DamageOutcome {
        if self.invincible {
            log::debug!("Damage {} ignored while invincible", amount);
            return DamageOutcome::Ignored;
        }

        let life_lost = self.definition.damage(amount);
        if life_lost {
            log::info!("Life lost, {} remaining", self.definition.lives);
            feedback.play_sound(Sound::LifeLost);
            // Death feedback: flash + particle burst at the player
            feedback.play_animation();
            feedback.spawn_particle(pos);
        }

        if self.definition.lives <= 0 {
            DamageOutcome::OutOfLives
        } else if life_lost {
            DamageOutcome::LifeLost
        } else {
            DamageOutcome::Wounded
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.definition.heal(amount);
    }

    pub fn set_invincible(&mut self, invincible: bool, feedback: &mut dyn FeedbackSink) {
        self.invincible = invincible;
        feedback.set_tint(if invincible { Tint::Invincible } else { Tint::Normal });
    }
}
