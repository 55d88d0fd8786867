mod common;

use rand::rngs::mock::StepRng;
use space_droid::config::DroidConfig;
use space_droid::sim::frame::{FrameLoop, SceneProperty};
use space_droid::sim::meteorites::{MeteoriteColor, MeteoriteField, drift_speed};
use space_droid::sim::rotation::RotationState;

use common::{Call, CountingScheduler, RecordingScene};

fn never_spawn() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn frame_loop_with_one_meteorite(scene: &mut RecordingScene) -> FrameLoop {
    let mut field = MeteoriteField::new(drift_speed(3.0, 20.0), 0.2, -1000.0);
    field.spawn(0.5, 0.5, MeteoriteColor::Frost, scene).unwrap();
    scene.calls.clear();
    FrameLoop::new(RotationState::new(0.1), Some(field))
}

#[test]
fn rotation_then_meteorites_then_render() {
    let mut scene = RecordingScene::default();
    let mut frame_loop = frame_loop_with_one_meteorite(&mut scene);
    let mut scheduler = CountingScheduler::default();
    let id = frame_loop.meteorites.as_ref().unwrap().meteorites[0].id;

    frame_loop.on_frame(&mut scheduler, &mut scene, &mut never_spawn()).unwrap();

    assert_eq!(scheduler.requested, 1);
    assert_eq!(frame_loop.frames, 1);
    assert_eq!(
        scene.calls,
        vec![Call::Set(SceneProperty::DroidAngle, 0.1), Call::Move(id), Call::Render]
    );
}

#[test]
fn failed_render_still_schedules_next_frame() {
    let mut scene = RecordingScene { fail_render: true, ..Default::default() };
    let mut frame_loop = frame_loop_with_one_meteorite(&mut scene);
    let mut scheduler = CountingScheduler::default();

    assert!(frame_loop.on_frame(&mut scheduler, &mut scene, &mut never_spawn()).is_err());
    assert_eq!(scheduler.requested, 1);

    scene.fail_render = false;
    frame_loop.on_frame(&mut scheduler, &mut scene, &mut never_spawn()).unwrap();
    assert_eq!(scheduler.requested, 2);
    assert_eq!(scene.calls.last(), Some(&Call::Render));
}

#[test]
fn failed_rotation_write_drops_the_rest_of_the_frame() {
    let mut scene = RecordingScene { fail_set: true, ..Default::default() };
    let mut frame_loop = frame_loop_with_one_meteorite(&mut scene);
    let mut scheduler = CountingScheduler::default();
    let before = frame_loop.meteorites.as_ref().unwrap().meteorites[0].pos;

    assert!(frame_loop.on_frame(&mut scheduler, &mut scene, &mut never_spawn()).is_err());

    assert_eq!(scheduler.requested, 1);
    assert!(scene.calls.is_empty());
    assert_eq!(frame_loop.meteorites.as_ref().unwrap().meteorites[0].pos, before);
}

#[test]
fn angle_accumulates_across_frames() {
    let mut scene = RecordingScene::default();
    let mut frame_loop = FrameLoop::new(RotationState::new(0.002), None);
    let mut scheduler = CountingScheduler::default();

    for _ in 0..500 {
        frame_loop.on_frame(&mut scheduler, &mut scene, &mut never_spawn()).unwrap();
    }

    assert_eq!(scheduler.requested, 500);
    assert!((frame_loop.rotation.angle - 1.0).abs() < 1e-4);
}

#[test]
fn config_without_meteorites_only_spins_and_renders() {
    let mut config = DroidConfig::default();
    config.meteorites.enabled = false;
    let mut frame_loop = FrameLoop::from_config(&config);
    assert!(frame_loop.meteorites.is_none());

    let mut scene = RecordingScene::default();
    frame_loop
        .on_frame(&mut CountingScheduler::default(), &mut scene, &mut StepRng::new(0, 0))
        .unwrap();

    assert_eq!(scene.calls.len(), 2);
    assert_eq!(scene.calls[1], Call::Render);
    match scene.calls[0] {
        Call::Set(SceneProperty::DroidAngle, angle) => assert!((angle - 0.002).abs() < 1e-7),
        ref other => panic!("unexpected call {other:?}"),
    }
}
