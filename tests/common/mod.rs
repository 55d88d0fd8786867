#![allow(dead_code)]

use space_droid::error::SceneError;
use space_droid::sim::frame::{FrameScheduler, SceneGraph, SceneProperty};
use space_droid::sim::meteorites::{Meteorite, MeteoriteId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set(SceneProperty, f32),
    Add(MeteoriteId),
    Move(MeteoriteId),
    Remove(MeteoriteId),
    Render,
}

// records every call, optionally failing on one kind of call
#[derive(Default)]
pub struct RecordingScene {
    pub calls: Vec<Call>,
    pub fail_render: bool,
    pub fail_set: bool,
}

impl RecordingScene {
    pub fn removed(&self) -> Vec<MeteoriteId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Remove(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn added(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Add(_))).count()
    }
}

impl SceneGraph for RecordingScene {
    fn set_property(&mut self, property: SceneProperty, value: f32) -> Result<(), SceneError> {
        if self.fail_set {
            return Err(SceneError::MissingEntity("droid"));
        }
        self.calls.push(Call::Set(property, value));
        Ok(())
    }

    fn add_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError> {
        self.calls.push(Call::Add(meteorite.id));
        Ok(())
    }

    fn move_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError> {
        self.calls.push(Call::Move(meteorite.id));
        Ok(())
    }

    fn remove_meteorite(&mut self, id: MeteoriteId) -> Result<(), SceneError> {
        self.calls.push(Call::Remove(id));
        Ok(())
    }

    fn render(&mut self) -> Result<(), SceneError> {
        if self.fail_render {
            return Err(SceneError::MissingEntity("renderer"));
        }
        self.calls.push(Call::Render);
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingScheduler {
    pub requested: u64,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

// accepts everything, for long runs where recording would only cost memory
pub struct NullScene;

impl SceneGraph for NullScene {
    fn set_property(&mut self, _: SceneProperty, _: f32) -> Result<(), SceneError> {
        Ok(())
    }
    fn add_meteorite(&mut self, _: &Meteorite) -> Result<(), SceneError> {
        Ok(())
    }
    fn move_meteorite(&mut self, _: &Meteorite) -> Result<(), SceneError> {
        Ok(())
    }
    fn remove_meteorite(&mut self, _: MeteoriteId) -> Result<(), SceneError> {
        Ok(())
    }
    fn render(&mut self) -> Result<(), SceneError> {
        Ok(())
    }
}
