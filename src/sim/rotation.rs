use std::f32::consts::TAU;

/// Spin of the droid, advanced in fixed per-frame ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub angle: f32, // radians, kept in [0, TAU)
    speed: f32,     // radians per frame
}

impl RotationState {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed: speed.max(0.0) }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    // speed must never go negative, tweens overshooting below zero get clamped
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// one frame worth of rotation, returns the new angle
    pub fn tick(&mut self) -> f32 {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
        self.angle
    }
}
