use std::time::Duration;

use bevy::prelude::*;
use bevy::window::RequestRedraw;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::TurboButton;
use crate::config::DroidConfig;
use crate::scene::adapter::BevyScene;
use crate::sim::frame::{FrameLoop, SceneGraph, SceneProperty};
use crate::sim::turbo::Turbo;
use crate::sim::tween::{Easing, Tween, TweenKey, Tweens};

#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

// camera fly-in once the droid is there
pub fn start_intro(config: Res<DroidConfig>, mut tweens: ResMut<Tweens>) {
    let camera = &config.camera;
    tweens.start(
        TweenKey::CameraZ,
        Tween::new(
            camera.intro_from_z,
            camera.position[2],
            Duration::from_millis(camera.intro_ms),
            Easing::EaseOutCubic,
        ),
    );
    info!("droid running");
}

// press/release on the button or the space bar. hovering in and out of the
// button is not a release, only leaving Pressed is
pub fn turbo_input(
    mut buttons: Query<(&Interaction, &mut TurboButton), Changed<Interaction>>,
    keys: Res<ButtonInput<KeyCode>>,
    frame_loop: Res<FrameLoop>,
    mut turbo: ResMut<Turbo>,
    mut tweens: ResMut<Tweens>,
) {
    let speed = frame_loop.rotation.speed();

    for (interaction, mut button) in &mut buttons {
        let pressed = *interaction == Interaction::Pressed;
        if pressed == button.held {
            continue;
        }
        button.held = pressed;
        turbo.set_turbo(pressed, speed, &mut tweens);
    }

    if keys.just_pressed(KeyCode::Space) {
        turbo.set_turbo(true, speed, &mut tweens);
    }
    if keys.just_released(KeyCode::Space) {
        turbo.set_turbo(false, speed, &mut tweens);
    }
}

pub fn advance_tweens(
    time: Res<Time>,
    mut tweens: ResMut<Tweens>,
    mut frame_loop: ResMut<FrameLoop>,
    mut scene: BevyScene,
) {
    for (key, value) in tweens.advance(time.delta()) {
        match key {
            TweenKey::RotationSpeed => frame_loop.rotation.set_speed(value),
            TweenKey::CameraZ => {
                if let Err(err) = scene.set_property(SceneProperty::CameraZ, value) {
                    warn!("camera tween: {err}");
                }
            }
        }
    }
}

pub fn drive_frame(
    mut frame_loop: ResMut<FrameLoop>,
    mut redraw: EventWriter<RequestRedraw>,
    mut scene: BevyScene,
    mut rng: ResMut<SceneRng>,
) {
    if let Err(err) = frame_loop.on_frame(&mut redraw, &mut scene, &mut rng.0) {
        scene.record_dropped();
        warn!("frame {} dropped: {err}", frame_loop.frames);
    }
}
