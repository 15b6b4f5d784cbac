use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::bridge::page_rpc::PageBridge;

/// Seconds between `fps_update` notifications to the page.
const NOTIFY_INTERVAL_SECS: f32 = 0.5;

#[derive(Component)]
pub struct FpsText;

/// Smoothed frame rate from the diagnostics store, if a sample exists yet.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f32> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .map(|value| value as f32)
}

/// Push the smoothed frame rate to the page on a fixed cadence.
pub fn fps_notification_system(
    mut bridge: ResMut<PageBridge>,
    diagnostics: Res<DiagnosticsStore>,
    time: Res<Time>,
    mut last_sent: Local<f32>,
) {
    let now = time.elapsed_secs();
    if now - *last_sent < NOTIFY_INTERVAL_SECS {
        return;
    }
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    bridge.send_notification("fps_update", serde_json::json!({ "fps": fps }));
    *last_sent = now;
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.1}");
    }
}
