// keyed numeric tweens, advanced by wall clock time
use std::time::Duration;

use bevy::prelude::Resource;

/// Properties a tween can drive. Only one tween per key is alive at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TweenKey {
    RotationSpeed,
    CameraZ,
}

// curve shapes from https://easings.net/
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
}

impl Easing {
    /// maps linear progress `t` in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub elapsed: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self { from, to, duration, elapsed: Duration::ZERO, easing }
    }

    pub fn linear(from: f32, to: f32, duration: Duration) -> Self {
        Self::new(from, to, duration, Easing::Linear)
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// current interpolated value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }
}

#[derive(Resource, Debug, Default)]
pub struct Tweens {
    active: Vec<(TweenKey, Tween)>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// starts `tween` on `key`, handing back whatever was running there before
    pub fn start(&mut self, key: TweenKey, tween: Tween) -> Option<Tween> {
        let cancelled = self.cancel(key);
        self.active.push((key, tween));
        cancelled
    }

    pub fn cancel(&mut self, key: TweenKey) -> Option<Tween> {
        let index = self.active.iter().position(|(k, _)| *k == key)?;
        Some(self.active.swap_remove(index).1)
    }

    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.active.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    pub fn is_active(&self, key: TweenKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// moves every tween forward by `dt` and returns the values to write back.
    /// finished tweens report their end value one last time and are dropped.
    pub fn advance(&mut self, dt: Duration) -> Vec<(TweenKey, f32)> {
        let mut updates = Vec::with_capacity(self.active.len());
        self.active.retain_mut(|(key, tween)| {
            tween.elapsed = tween.elapsed.saturating_add(dt);
            updates.push((*key, tween.value()));
            !tween.is_finished()
        });
        updates
    }
}
