use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;

// Crate engine modules
use crate::engine::camera::scroll_rig::{drive_scroll_camera, spawn_scroll_camera};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::progress::{
    LoadingSimulation, advance_loading, dismiss_loading_overlay, reveal_after_delay,
};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::sections::spawn_section_groups;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::oscillation::{
    animate_boxes, animate_cylinder, animate_icosahedron, animate_sphere, animate_torus,
    float_section_groups,
};

// Crate bridge modules
use crate::bridge::dom_events::DomEventsPlugin;
use crate::bridge::page_rpc::PageBridgePlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{FpsText, fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .add_plugins(PageBridgePlugin)
        .add_plugins(DomEventsPlugin);

    app.init_resource::<LoadingSimulation>();

    app.add_systems(
        Startup,
        (setup, spawn_lighting, spawn_section_groups, spawn_scroll_camera),
    );

    // Loading phase: accumulate simulated progress, then hold the finished
    // overlay briefly before revealing the scene.
    app.add_systems(
        Update,
        advance_loading.run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        Update,
        reveal_after_delay.run_if(in_state(AppState::Revealing)),
    )
    .add_systems(OnEnter(AppState::Running), dismiss_loading_overlay);

    // Runtime systems - only run once the reveal is done. Until then the
    // scene renders as a static first frame.
    let runtime_systems = (
        drive_scroll_camera,
        animate_sphere,
        animate_torus,
        animate_boxes,
        animate_cylinder,
        animate_icosahedron,
        float_section_groups,
        fps_notification_system,
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // FPS overlay only exists in native builds; the page shows its own.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn setup() {
    info!("=== SCROLL SHOWCASE RENDER ENGINE ===");
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}
