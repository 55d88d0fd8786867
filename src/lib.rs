use std::time::Duration;

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};

pub mod config;
pub mod container;
pub mod error;

pub mod sim {
    pub mod frame;
    pub mod meteorites;
    pub mod rotation;
    pub mod turbo;
    pub mod tween;
}

pub mod scene {
    pub mod adapter;
    pub mod loading;
    pub mod setup;
    pub mod systems;
}

use crate::config::DroidConfig;
use crate::container::Container;
use crate::scene::adapter::{FrameStats, MeteoriteEntities, MeteoritePalette};
use crate::scene::loading::{DroidState, load_droid, poll_droid_model};
use crate::scene::setup::{hex_color, paint_turbo_button, setup_scene, spawn_turbo_button};
use crate::scene::systems::{SceneRng, advance_tweens, drive_frame, start_intro, turbo_input};
use crate::sim::frame::FrameLoop;
use crate::sim::meteorites::MeteoriteId;
use crate::sim::turbo::Turbo;
use crate::sim::tween::Tweens;

// how long winit sleeps when nobody asked for a frame (loading, failed)
const IDLE_WAKE: Duration = Duration::from_millis(100);

/// The group the droid model hangs under, spun every frame.
#[derive(Component)]
pub struct Droid;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component, Debug, Copy, Clone)]
pub struct MeteoriteSprite(pub MeteoriteId);

/// `held` is true between the press and the release edge of the button.
#[derive(Component, Debug, Default)]
pub struct TurboButton {
    pub held: bool,
}

pub struct SpaceDroidPlugin {
    pub config: DroidConfig,
    pub container: Container,
}

impl SpaceDroidPlugin {
    pub fn new(config: DroidConfig, container: Container) -> Self {
        Self { config, container }
    }
}

impl Plugin for SpaceDroidPlugin {
    fn build(&self, app: &mut App) {
        let meteorites = &self.config.meteorites;
        let palette = MeteoritePalette {
            colors: meteorites.colors.map(hex_color),
            size: Vec2::new(meteorites.radius * meteorites.tail_length, meteorites.radius * 2.0),
        };

        app.insert_resource(self.config.clone())
            .insert_resource(self.container.clone())
            .insert_resource(FrameLoop::from_config(&self.config))
            .insert_resource(Turbo::from_config(&self.config.rotation))
            .insert_resource(SceneRng::new(meteorites.seed))
            .insert_resource(palette)
            .insert_resource(ClearColor(Color::NONE))
            .insert_resource(WinitSettings {
                focused_mode: UpdateMode::reactive(IDLE_WAKE),
                unfocused_mode: UpdateMode::reactive(IDLE_WAKE),
            })
            .init_resource::<Tweens>()
            .init_resource::<MeteoriteEntities>()
            .init_resource::<FrameStats>()
            .init_state::<DroidState>();

        app.add_systems(Startup, (setup_scene, spawn_turbo_button, load_droid))
            .add_systems(Update, poll_droid_model.run_if(in_state(DroidState::Loading)))
            .add_systems(OnEnter(DroidState::Running), start_intro)
            .add_systems(
                Update,
                (paint_turbo_button, turbo_input, advance_tweens, drive_frame)
                    .chain()
                    .run_if(in_state(DroidState::Running)),
            );
    }
}
