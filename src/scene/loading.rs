use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::Droid;
use crate::config::{DroidConfig, MaterialOverride, ModelSource};
use crate::error::SceneError;
use crate::scene::setup::hex_color;

const SAMPLE_BOX_SIZE: f32 = 10.0;
const SAMPLE_BOX_COLOR: u32 = 0x00ffbb;

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DroidState {
    #[default]
    Loading,
    Running,
    Failed,
}

#[derive(Resource, Debug, Default)]
pub struct DroidModel {
    pub path: String,
    pub handle: Option<Handle<Gltf>>,
}

/// spawns the (still empty) droid group and kicks off the model load
pub fn load_droid(
    mut commands: Commands,
    config: Res<DroidConfig>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<DroidState>>,
) {
    let droid = commands
        .spawn((Droid, Transform::default(), Visibility::default()))
        .id();

    match &config.model {
        ModelSource::Gltf(path) => {
            info!("loading droid model {path}");
            commands.insert_resource(DroidModel {
                path: path.clone(),
                handle: Some(asset_server.load(path.clone())),
            });
        }
        ModelSource::SampleBox => {
            let mesh = meshes.add(Cuboid::from_length(SAMPLE_BOX_SIZE));
            let material = materials.add(StandardMaterial {
                base_color: hex_color(SAMPLE_BOX_COLOR),
                perceptual_roughness: 1.0,
                ..default()
            });
            commands.entity(droid).with_children(|parent| {
                parent.spawn((Mesh3d(mesh), MeshMaterial3d(material)));
            });
            commands.insert_resource(DroidModel::default());
            next_state.set(DroidState::Running);
        }
    }
}

pub fn apply_override(material: &mut StandardMaterial, material_override: &MaterialOverride) {
    material.base_color = hex_color(material_override.color);
    material.perceptual_roughness = material_override.roughness;
    if let Some(emissive) = material_override.emissive {
        material.emissive = hex_color(emissive).to_linear();
    }
}

/// Rewrites the named materials we have an override for, the rest stay as
/// authored. Returns how many were rewritten.
pub fn apply_material_overrides<'a>(
    named: impl IntoIterator<Item = (&'a str, &'a Handle<StandardMaterial>)>,
    config: &DroidConfig,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let mut applied = 0;
    for (name, handle) in named {
        let Some(material_override) = config.material_override(name) else {
            continue;
        };
        if let Some(material) = materials.get_mut(handle) {
            apply_override(material, material_override);
            applied += 1;
        }
    }
    applied
}

pub fn poll_droid_model(
    mut commands: Commands,
    model: Res<DroidModel>,
    config: Res<DroidConfig>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    droids: Query<Entity, With<Droid>>,
    mut next_state: ResMut<NextState<DroidState>>,
) {
    let Some(handle) = &model.handle else { return };

    match asset_server.load_state(handle.id()) {
        LoadState::Loaded => {}
        LoadState::Failed(err) => {
            let err = SceneError::AssetLoad { path: model.path.clone(), reason: err.to_string() };
            error!("{err}");
            next_state.set(DroidState::Failed);
            return;
        }
        _ => return,
    }

    let Some(gltf) = gltfs.get(handle) else { return };
    let Ok(droid) = droids.single() else {
        error!("{}", SceneError::MissingEntity("droid"));
        next_state.set(DroidState::Failed);
        return;
    };

    let named = gltf.named_materials.iter().map(|(name, handle)| (&**name, handle));
    let applied = apply_material_overrides(named, &config, &mut materials);
    debug!("{applied} droid materials overridden");

    let Some(scene) = gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()) else {
        let err = SceneError::AssetLoad {
            path: model.path.clone(),
            reason: "no scene in model".to_string(),
        };
        error!("{err}");
        next_state.set(DroidState::Failed);
        return;
    };

    commands.entity(droid).with_children(|parent| {
        parent.spawn(SceneRoot(scene));
    });
    info!("droid model {} loaded", model.path);
    next_state.set(DroidState::Running);
}
