use bevy::prelude::*;
use constants::palette::ACCENT_LIGHT_COLOR;

pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let [r, g, b] = ACCENT_LIGHT_COLOR;
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(r, g, b),
            intensity: 500_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));
}
