use bevy::prelude::*;
use rand::Rng;

use constants::loading::{
    COMPLETE_PROGRESS, MAX_TICK_INCREMENT, REVEAL_DELAY_SECS, TICK_INTERVAL_SECS,
};

use crate::bridge::indicators::{hide_loading_screen, set_loading_bar};
use crate::bridge::page_rpc::PageBridge;
use crate::engine::core::app_state::AppState;

#[derive(Resource)]
pub struct LoadingSimulation {
    pub progress: f32,
    tick: Timer,
    reveal: Timer,
}

impl Default for LoadingSimulation {
    fn default() -> Self {
        Self {
            progress: 0.0,
            tick: Timer::from_seconds(TICK_INTERVAL_SECS, TimerMode::Repeating),
            reveal: Timer::from_seconds(REVEAL_DELAY_SECS, TimerMode::Once),
        }
    }
}

/// One accumulation step. Increments are always non-negative, so progress is
/// monotone and terminates at exactly the completion value.
pub fn apply_increment(progress: f32, increment: f32) -> f32 {
    (progress + increment.max(0.0)).min(COMPLETE_PROGRESS)
}

/// Accumulate random progress every tick and mirror it into the overlay.
pub fn advance_loading(
    time: Res<Time>,
    mut simulation: ResMut<LoadingSimulation>,
    mut next_state: ResMut<NextState<AppState>>,
    mut bridge: ResMut<PageBridge>,
) {
    if !simulation.tick.tick(time.delta()).just_finished() {
        return;
    }

    let increment = rand::thread_rng().gen_range(0.0..MAX_TICK_INCREMENT);
    simulation.progress = apply_increment(simulation.progress, increment);

    set_loading_bar(simulation.progress);
    bridge.send_notification(
        "loading_progress",
        serde_json::json!({ "progress": simulation.progress.round() }),
    );

    if simulation.progress >= COMPLETE_PROGRESS {
        next_state.set(AppState::Revealing);
    }
}

/// Hold the finished overlay on screen briefly before revealing the scene.
pub fn reveal_after_delay(
    time: Res<Time>,
    mut simulation: ResMut<LoadingSimulation>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if simulation.reveal.tick(time.delta()).finished() {
        next_state.set(AppState::Running);
    }
}

pub fn dismiss_loading_overlay(mut bridge: ResMut<PageBridge>) {
    hide_loading_screen();
    bridge.send_notification("loading_complete", serde_json::json!({}));
    info!("loading simulation complete, scene running");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotone() {
        let mut progress = 0.0;
        for step in 0..200 {
            let next = apply_increment(progress, (step % 16) as f32);
            assert!(next >= progress);
            progress = next;
        }
    }

    #[test]
    fn progress_clamps_at_completion() {
        assert_eq!(apply_increment(95.0, 14.9), COMPLETE_PROGRESS);
        assert_eq!(apply_increment(COMPLETE_PROGRESS, 14.9), COMPLETE_PROGRESS);
    }

    #[test]
    fn negative_increments_are_ignored() {
        assert_eq!(apply_increment(40.0, -5.0), 40.0);
    }

    #[test]
    fn bounded_increments_always_terminate() {
        let mut progress = 0.0;
        let mut ticks = 0;
        while progress < COMPLETE_PROGRESS {
            progress = apply_increment(progress, 0.5);
            ticks += 1;
            assert!(ticks <= 200);
        }
        assert_eq!(progress, COMPLETE_PROGRESS);
    }
}
