// per-refresh driver: reschedule, spin, meteorites, render
use bevy::prelude::Resource;
use rand::Rng;

use crate::config::DroidConfig;
use crate::error::SceneError;
use crate::sim::meteorites::{Meteorite, MeteoriteField, MeteoriteId};
use crate::sim::rotation::RotationState;

/// Scalar properties of the scene the core writes to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SceneProperty {
    DroidAngle,
    CameraZ,
}

/// The only operations the animation core needs from a scene graph library.
pub trait SceneGraph {
    fn set_property(&mut self, property: SceneProperty, value: f32) -> Result<(), SceneError>;
    fn add_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError>;
    fn move_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError>;
    fn remove_meteorite(&mut self, id: MeteoriteId) -> Result<(), SceneError>;
    fn render(&mut self) -> Result<(), SceneError>;
}

/// Host hook that queues the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Resource, Debug)]
pub struct FrameLoop {
    pub rotation: RotationState,
    pub meteorites: Option<MeteoriteField>,
    pub frames: u64,
}

impl FrameLoop {
    pub fn new(rotation: RotationState, meteorites: Option<MeteoriteField>) -> Self {
        Self { rotation, meteorites, frames: 0 }
    }

    pub fn from_config(config: &DroidConfig) -> Self {
        let meteorites = config
            .meteorites
            .enabled
            .then(|| MeteoriteField::from_config(&config.meteorites));
        Self::new(RotationState::new(config.rotation.idle_speed), meteorites)
    }

    /// One display refresh. The next refresh is requested before any work so an error
    /// in this frame only loses this frame.
    pub fn on_frame<F, S, R>(
        &mut self,
        scheduler: &mut F,
        scene: &mut S,
        rng: &mut R,
    ) -> Result<(), SceneError>
    where
        F: FrameScheduler + ?Sized,
        S: SceneGraph + ?Sized,
        R: Rng + ?Sized,
    {
        scheduler.request_frame();
        self.frames += 1;

        let angle = self.rotation.tick();
        scene.set_property(SceneProperty::DroidAngle, angle)?;

        if let Some(field) = self.meteorites.as_mut() {
            field.update(scene, rng)?;
        }

        scene.render()
    }
}
