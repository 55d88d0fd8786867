// SceneGraph on top of the bevy world
use std::collections::HashMap;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::error::SceneError;
use crate::sim::frame::{FrameScheduler, SceneGraph, SceneProperty};
use crate::sim::meteorites::{DEPTH_OFFSET, DEPTH_RANGE, Meteorite, MeteoriteId};
use crate::{Droid, MainCamera, MeteoriteSprite};

// meteorites sit on the 2d overlay, whose clip range is -1000..1000
const SPRITE_DEPTH_SCALE: f32 = 0.25;

type DroidOnly = (With<Droid>, Without<MainCamera>, Without<MeteoriteSprite>);
type CameraOnly = (With<MainCamera>, Without<Droid>, Without<MeteoriteSprite>);
type SpriteOnly = (With<MeteoriteSprite>, Without<Droid>, Without<MainCamera>);

#[derive(Resource, Default, Debug)]
pub struct MeteoriteEntities(pub HashMap<MeteoriteId, Entity>);

/// Colours and base size of the meteorite sprites.
#[derive(Resource, Debug, Clone)]
pub struct MeteoritePalette {
    pub colors: [Color; 3],
    pub size: Vec2,
}

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FrameStats {
    pub rendered: u64,
    pub dropped: u64,
}

// the winit runner is reactive, a frame only happens because the previous one asked for it
impl FrameScheduler for EventWriter<'_, RequestRedraw> {
    fn request_frame(&mut self) {
        self.write(RequestRedraw);
    }
}

pub fn meteorite_transform(meteorite: &Meteorite) -> Transform {
    // deeper meteorites are drawn smaller and behind the shallow ones
    let depth = meteorite.depth().clamp(0.0, 1.0);
    Transform::from_xyz(
        meteorite.pos.x,
        meteorite.pos.y,
        (meteorite.pos.z - DEPTH_OFFSET - DEPTH_RANGE) * SPRITE_DEPTH_SCALE,
    )
    .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4))
    .with_scale(Vec3::splat(1.0 - 0.5 * depth))
}

#[derive(SystemParam)]
pub struct BevyScene<'w, 's> {
    commands: Commands<'w, 's>,
    droids: Query<'w, 's, &'static mut Transform, DroidOnly>,
    cameras: Query<'w, 's, &'static mut Transform, CameraOnly>,
    sprites: Query<'w, 's, &'static mut Transform, SpriteOnly>,
    entities: ResMut<'w, MeteoriteEntities>,
    palette: Res<'w, MeteoritePalette>,
    stats: ResMut<'w, FrameStats>,
}

impl BevyScene<'_, '_> {
    pub fn record_dropped(&mut self) {
        self.stats.dropped += 1;
    }
}

impl SceneGraph for BevyScene<'_, '_> {
    fn set_property(&mut self, property: SceneProperty, value: f32) -> Result<(), SceneError> {
        match property {
            SceneProperty::DroidAngle => {
                let mut transform = self
                    .droids
                    .single_mut()
                    .map_err(|_| SceneError::MissingEntity("droid"))?;
                transform.rotation = Quat::from_rotation_y(value);
            }
            SceneProperty::CameraZ => {
                let mut transform = self
                    .cameras
                    .single_mut()
                    .map_err(|_| SceneError::MissingEntity("camera"))?;
                transform.translation.z = value;
            }
        }
        Ok(())
    }

    fn add_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError> {
        let entity = self
            .commands
            .spawn((
                Sprite {
                    color: self.palette.colors[meteorite.color.index()],
                    custom_size: Some(self.palette.size),
                    ..default()
                },
                meteorite_transform(meteorite),
                MeteoriteSprite(meteorite.id),
            ))
            .id();
        self.entities.0.insert(meteorite.id, entity);
        Ok(())
    }

    fn move_meteorite(&mut self, meteorite: &Meteorite) -> Result<(), SceneError> {
        let entity = self
            .entities
            .0
            .get(&meteorite.id)
            .copied()
            .ok_or(SceneError::MissingEntity("meteorite"))?;
        let mut transform = self
            .sprites
            .get_mut(entity)
            .map_err(|_| SceneError::MissingEntity("meteorite sprite"))?;
        *transform = meteorite_transform(meteorite);
        Ok(())
    }

    fn remove_meteorite(&mut self, id: MeteoriteId) -> Result<(), SceneError> {
        let entity = self
            .entities
            .0
            .remove(&id)
            .ok_or(SceneError::MissingEntity("meteorite"))?;
        self.commands.entity(entity).despawn();
        Ok(())
    }

    fn render(&mut self) -> Result<(), SceneError> {
        // bevy renders after Update on its own, this only keeps the books
        self.stats.rendered += 1;
        Ok(())
    }
}
