use bevy::prelude::*;
use space_droid::SpaceDroidPlugin;
use space_droid::config::DroidConfig;
use space_droid::container::Container;
use space_droid::error::SceneError;

// usage: cargo run --example space_droid [config.json]
fn main() -> Result<(), SceneError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DroidConfig::from_path(path)?,
        None => DroidConfig::default(),
    };
    // fail before a window exists if there is nothing to draw into
    let container = Container::from_config(&config.container)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(container.window("Space Droid")),
            ..default()
        }))
        .add_plugins(SpaceDroidPlugin::new(config, container))
        .run();

    Ok(())
}
