use thiserror::Error;

/// Everything that can go wrong while building or driving the droid scene.
///
/// Construction errors (`InvalidContainer`, `InvalidConfig`, `Config*`) stop the app before a
/// window exists. `AssetLoad` keeps the render loop from ever starting. `MissingEntity` is a
/// per-frame error: it drops the current frame only.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to load droid model `{path}`: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("container `{selector}` is not usable ({width}x{height})")]
    InvalidContainer {
        selector: String,
        width: f32,
        height: f32,
    },

    #[error("invalid scene config: {0}")]
    InvalidConfig(String),

    #[error("could not read scene config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("could not parse scene config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("scene entity missing: {0}")]
    MissingEntity(&'static str),
}
