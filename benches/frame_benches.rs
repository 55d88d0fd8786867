use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use space_droid::error::SceneError;
use space_droid::sim::frame::{FrameLoop, FrameScheduler, SceneGraph, SceneProperty};
use space_droid::sim::meteorites::{
    Meteorite, MeteoriteColor, MeteoriteField, MeteoriteId, drift_speed,
};
use space_droid::sim::rotation::RotationState;

struct NullScene;

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

struct NoScheduler;

impl FrameScheduler for NoScheduler {
    fn request_frame(&mut self) {}
}

fn bench_frame(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    // a crowded field, well past the ~35 meteorites the defaults settle at
    let mut field = MeteoriteField::new(drift_speed(3.0, 20.0), 0.2, -1000.0);
    for i in 0..500 {
        let depth = (i % 100) as f32 / 100.0;
        let angle = (i % 90) as f32 * std::f32::consts::PI / 180.0;
        field.spawn(depth, angle, MeteoriteColor::ALL[i % 3], &mut NullScene).unwrap();
    }
    let mut frame_loop = FrameLoop::new(RotationState::new(0.002), Some(field));

    c.bench_function("frame_500_meteorites", |b| {
        b.iter(|| frame_loop.on_frame(&mut NoScheduler, &mut NullScene, &mut rng))
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
