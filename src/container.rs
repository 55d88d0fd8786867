use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::config::ContainerConfig;
use crate::error::SceneError;

/// The host surface the scene draws into: a canvas selector on the web, the window size on desktop.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Container {
    pub selector: String,
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn new(selector: impl Into<String>, width: f32, height: f32) -> Result<Self, SceneError> {
        let selector = selector.into();
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if selector.trim().is_empty() || !usable(width) || !usable(height) {
            return Err(SceneError::InvalidContainer { selector, width, height });
        }
        Ok(Self { selector, width, height })
    }

    pub fn from_config(config: &ContainerConfig) -> Result<Self, SceneError> {
        Self::new(config.selector.clone(), config.width, config.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub fn window(&self, title: &str) -> Window {
        Window {
            title: title.to_string(),
            resolution: WindowResolution::new(self.width, self.height),
            canvas: Some(self.selector.clone()),
            transparent: true,
            ..default()
        }
    }
}
