use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::ui::IsDefaultUiCamera;

use crate::config::DroidConfig;
use crate::container::Container;
use crate::{MainCamera, TurboButton};

// bevy lights are photometric, the config keeps 0..1 intensities
const KEY_LUX_PER_UNIT: f32 = 10_000.0;
const FILL_BRIGHTNESS_PER_UNIT: f32 = 1_000.0;

const BUTTON_IDLE: Color = Color::srgba(0.1, 0.1, 0.12, 0.8);
const BUTTON_PRESSED: Color = Color::srgba(0.0, 0.6, 0.45, 0.9);

/// 0xRRGGBB as used in the config
pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub fn setup_scene(mut commands: Commands, config: Res<DroidConfig>, container: Res<Container>) {
    let camera = &config.camera;
    let [x, y, _] = camera.position;

    // main camera, starts pulled back for the intro fly-in
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            aspect_ratio: container.aspect_ratio(),
            ..default()
        }),
        Transform::from_xyz(x, y, camera.intro_from_z).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // overlay for the meteorite sprites and the button
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    // key light at a 3/4 angle
    let lights = &config.lights;
    let [lx, ly, lz] = lights.key_position;
    commands.spawn((
        DirectionalLight {
            color: hex_color(lights.key_color),
            illuminance: lights.key_intensity * KEY_LUX_PER_UNIT,
            ..default()
        },
        Transform::from_xyz(lx, ly, lz).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // fill light
    commands.insert_resource(AmbientLight {
        color: hex_color(lights.fill_color),
        brightness: lights.fill_intensity * FILL_BRIGHTNESS_PER_UNIT,
        ..default()
    });
}

pub fn spawn_turbo_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(16.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            TurboButton::default(),
        ))
        .with_children(|parent| {
            parent.spawn((Text::new("Turbo"), TextColor(Color::WHITE)));
        });
}

pub fn paint_turbo_button(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<TurboButton>),
    >,
) {
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            _ => BUTTON_IDLE,
        };
    }
}
