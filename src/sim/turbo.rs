use std::time::Duration;

use bevy::log::{debug, info};
use bevy::prelude::Resource;

use crate::config::RotationConfig;
use crate::sim::tween::{Tween, TweenKey, Tweens};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurboState {
    Idle,
    Turbo,
    Transitioning { from: f32, to: f32, elapsed: Duration },
}

/// Two-state speed control. Every call retargets the rotation speed tween, the newest call wins.
#[derive(Resource, Debug, Clone)]
pub struct Turbo {
    pub enabled: bool,
    pub idle_speed: f32,
    pub turbo_speed: f32,
    pub duration: Duration,
}

impl Turbo {
    pub fn new(idle_speed: f32, turbo_speed: f32, duration: Duration) -> Self {
        Self { enabled: false, idle_speed, turbo_speed, duration }
    }

    pub fn from_config(config: &RotationConfig) -> Self {
        Self::new(
            config.idle_speed,
            config.turbo_speed,
            Duration::from_millis(config.turbo_ms),
        )
    }

    pub fn target(&self) -> f32 {
        if self.enabled { self.turbo_speed } else { self.idle_speed }
    }

    /// `current_speed` is where the new transition starts, so an interrupted tween
    /// continues from the speed it had reached.
    pub fn set_turbo(&mut self, enabled: bool, current_speed: f32, tweens: &mut Tweens) {
        if enabled != self.enabled {
            info!("turbo {}", if enabled { "on" } else { "off" });
        }
        self.enabled = enabled;

        let tween = Tween::linear(current_speed, self.target(), self.duration);
        if let Some(cancelled) = tweens.start(TweenKey::RotationSpeed, tween) {
            debug!(
                "cancelled speed tween toward {} at {:.0}%",
                cancelled.to,
                cancelled.progress() * 100.0
            );
        }
    }

    pub fn state(&self, tweens: &Tweens) -> TurboState {
        match tweens.get(TweenKey::RotationSpeed) {
            Some(tween) => TurboState::Transitioning {
                from: tween.from,
                to: tween.to,
                elapsed: tween.elapsed,
            },
            None if self.enabled => TurboState::Turbo,
            None => TurboState::Idle,
        }
    }
}
