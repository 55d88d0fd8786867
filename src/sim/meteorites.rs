// decorative meteorites drifting across the screen on a 45 degree diagonal
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::MeteoriteConfig;
use crate::error::SceneError;
use crate::sim::frame::SceneGraph;

pub const SPAWN_OFFSET: f32 = 300.0;
pub const SPAWN_SPREAD: f32 = 1000.0;
pub const DEPTH_RANGE: f32 = -2000.0;
pub const DEPTH_OFFSET: f32 = 10.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeteoriteId(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MeteoriteColor {
    Gold,
    Ember,
    Frost,
}

impl MeteoriteColor {
    pub const ALL: [MeteoriteColor; 3] =
        [MeteoriteColor::Gold, MeteoriteColor::Ember, MeteoriteColor::Frost];

    pub fn index(self) -> usize {
        match self {
            MeteoriteColor::Gold => 0,
            MeteoriteColor::Ember => 1,
            MeteoriteColor::Frost => 2,
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meteorite {
    pub id: MeteoriteId,
    pub pos: Vec3, // x, y on screen, z is depth
    pub color: MeteoriteColor,
}

impl Meteorite {
    /// spawn depth in [0, 1), recovered from z
    pub fn depth(&self) -> f32 {
        (self.pos.z - DEPTH_OFFSET) / DEPTH_RANGE
    }
}

/// `depth` in [0, 1) and `angle` in [0, PI/2) place a meteorite inside a quarter disc
/// offset from the origin; deeper meteorites land further out and further back.
pub fn spawn_position(depth: f32, angle: f32) -> Vec3 {
    Vec3::new(
        angle.sin() * depth * SPAWN_SPREAD + SPAWN_OFFSET,
        angle.cos() * depth * SPAWN_SPREAD + SPAWN_OFFSET,
        depth * DEPTH_RANGE + DEPTH_OFFSET,
    )
}

/// per-frame drift, subtracted from x and y
pub fn drift_speed(radius: f32, tail_length: f32) -> Vec2 {
    Vec2::new(
        FRAC_PI_4.sin() * radius * tail_length / 4.0,
        FRAC_PI_4.cos() * radius * tail_length / 4.0,
    )
}

#[derive(Debug, Clone)]
pub struct MeteoriteField {
    pub meteorites: Vec<Meteorite>,
    pub speed: Vec2,
    pub spawn_chance: f32,
    pub cull_below: f32,
    pub spawned: u64,
    pub culled: u64,
    next_id: u64,
}

impl MeteoriteField {
    pub fn new(speed: Vec2, spawn_chance: f32, cull_below: f32) -> Self {
        Self {
            meteorites: Vec::new(),
            speed,
            spawn_chance,
            cull_below,
            spawned: 0,
            culled: 0,
            next_id: 0,
        }
    }

    pub fn from_config(config: &MeteoriteConfig) -> Self {
        Self::new(
            drift_speed(config.radius, config.tail_length),
            config.spawn_chance,
            config.cull_below,
        )
    }

    pub fn len(&self) -> usize {
        self.meteorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteorites.is_empty()
    }

    fn is_off_screen(&self, pos: Vec3) -> bool {
        pos.y < self.cull_below || pos.x < self.cull_below
    }

    /// cull, advance, then maybe spawn one
    pub fn update<S, R>(&mut self, scene: &mut S, rng: &mut R) -> Result<(), SceneError>
    where
        S: SceneGraph + ?Sized,
        R: Rng + ?Sized,
    {
        // walk backwards so removing by index keeps the unvisited part stable
        for i in (0..self.meteorites.len()).rev() {
            if self.is_off_screen(self.meteorites[i].pos) {
                let gone = self.meteorites.remove(i);
                self.culled += 1;
                scene.remove_meteorite(gone.id)?;
            } else {
                let meteorite = &mut self.meteorites[i];
                meteorite.pos.x -= self.speed.x;
                meteorite.pos.y -= self.speed.y;
                scene.move_meteorite(meteorite)?;
            }
        }

        // one bernoulli trial per frame, not per meteorite
        if rng.r#gen::<f32>() <= self.spawn_chance {
            let depth = rng.r#gen::<f32>();
            let angle = rng.gen_range(0.0..FRAC_PI_2);
            let color = MeteoriteColor::pick(rng);
            self.spawn(depth, angle, color, scene)?;
        }
        Ok(())
    }

    pub fn spawn<S>(
        &mut self,
        depth: f32,
        angle: f32,
        color: MeteoriteColor,
        scene: &mut S,
    ) -> Result<MeteoriteId, SceneError>
    where
        S: SceneGraph + ?Sized,
    {
        let id = MeteoriteId(self.next_id);
        self.next_id += 1;
        self.spawned += 1;

        let meteorite = Meteorite { id, pos: spawn_position(depth, angle), color };
        scene.add_meteorite(&meteorite)?;
        self.meteorites.push(meteorite);
        Ok(id)
    }
}
