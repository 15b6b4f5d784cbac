use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#scene-canvas".into()),
            // The page bridge applies viewport sizes explicitly; the canvas
            // must not be resized behind its back.
            fit_canvas_to_parent: false,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Scroll Showcase".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
