// scene constants, overridable from a json file
use std::collections::BTreeMap;
use std::path::Path;

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::error::SceneError;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DroidConfig {
    pub container: ContainerConfig,
    pub model: ModelSource,
    // keyed by the material names baked into the model
    pub material_overrides: BTreeMap<String, MaterialOverride>,
    pub camera: CameraConfig,
    pub lights: LightConfig,
    pub rotation: RotationConfig,
    pub meteorites: MeteoriteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub selector: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    Gltf(String),
    SampleBox,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialOverride {
    pub color: u32,
    #[serde(default = "default_roughness")]
    pub roughness: f32,
    #[serde(default)]
    pub emissive: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub intro_from_z: f32,
    pub intro_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub key_color: u32,
    pub key_intensity: f32,
    pub key_position: [f32; 3],
    pub fill_color: u32,
    pub fill_intensity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub idle_speed: f32,  // radians per frame
    pub turbo_speed: f32, // radians per frame
    pub turbo_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MeteoriteConfig {
    pub enabled: bool,
    pub spawn_chance: f32,
    pub radius: f32,
    pub tail_length: f32,
    pub cull_below: f32,
    pub colors: [u32; 3],
    pub seed: Option<u64>,
}

fn default_roughness() -> f32 {
    0.8
}

impl Default for DroidConfig {
    fn default() -> Self {
        let mut material_overrides = BTreeMap::new();
        material_overrides.insert(
            "lambert2SG".to_string(),
            MaterialOverride { color: 0xe8eef2, roughness: 0.6, emissive: None },
        );
        material_overrides.insert(
            "lambert3SG".to_string(),
            MaterialOverride { color: 0x00ffbb, roughness: 0.4, emissive: Some(0x003322) },
        );

        Self {
            container: ContainerConfig::default(),
            model: ModelSource::default(),
            material_overrides,
            camera: CameraConfig::default(),
            lights: LightConfig::default(),
            rotation: RotationConfig::default(),
            meteorites: MeteoriteConfig::default(),
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self { selector: "#space-droid".to_string(), width: 800.0, height: 600.0 }
    }
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource::Gltf("models/space_droid.glb".to_string())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 35.0],
            intro_from_z: 120.0,
            intro_ms: 2500,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            key_color: 0xffffff,
            key_intensity: 0.75,
            key_position: [-1.0, 1.0, 0.0],
            fill_color: 0xffffff,
            fill_intensity: 0.25,
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { idle_speed: 0.002, turbo_speed: 0.1, turbo_ms: 1000 }
    }
}

impl Default for MeteoriteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_chance: 0.2,
            radius: 3.0,
            tail_length: 20.0,
            cull_below: -1000.0,
            colors: [0xffd27f, 0xff7a4d, 0x9fd8ff],
            seed: None,
        }
    }
}

impl DroidConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let config: DroidConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let rotation = &self.rotation;
        if !(rotation.idle_speed >= 0.0 && rotation.turbo_speed >= 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "rotation speeds must be non-negative (idle {}, turbo {})",
                rotation.idle_speed, rotation.turbo_speed
            )));
        }
        if rotation.turbo_ms == 0 {
            return Err(SceneError::InvalidConfig("turbo_ms must be positive".to_string()));
        }

        let chance = self.meteorites.spawn_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(SceneError::InvalidConfig(format!(
                "meteorite spawn_chance {chance} is outside [0, 1]"
            )));
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(SceneError::InvalidConfig(format!(
                "camera clip range {}..{} is empty",
                camera.near, camera.far
            )));
        }
        Ok(())
    }

    /// the override for a model material, `None` leaves the material as authored
    pub fn material_override(&self, name: &str) -> Option<&MaterialOverride> {
        self.material_overrides.get(name)
    }
}
