//! Shared scroll state and the systems that fold bridge events into it.
//!
//! `current_section` has exactly one writer: the scroll sample path. The
//! intersection watcher only corroborates (see `record_observed_sections`).

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::sections::{SECTION_COUNT, section_info};

use crate::bridge::indicators::refresh_section_indicators;
use crate::bridge::page_rpc::PageBridge;
use crate::engine::core::app_state::AppState;

#[cfg(not(target_arch = "wasm32"))]
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};

/// Raw page scroll metrics sampled by the DOM bridge (or the native
/// mouse-wheel emulation).
#[derive(Event, Debug, Clone, Copy)]
pub struct ScrollSample {
    pub scroll_y: f32,
    pub max_scroll: f32,
}

/// Viewport dimensions reported by the DOM resize listener.
#[derive(Event, Debug, Clone, Copy)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
}

/// A page section crossed the visibility threshold of the intersection
/// watcher.
#[derive(Event, Debug, Clone, Copy)]
pub struct SectionObserved {
    pub index: usize,
}

#[derive(Resource, Default)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub max_scroll: f32,
    pub current_section: usize,
    /// Last section reported by the intersection watcher. Corroboration
    /// only; never drives the camera or the indicators.
    pub observed_section: Option<usize>,
}

impl ScrollState {
    pub fn progress(&self) -> f32 {
        scroll_progress(self.scroll_y, self.max_scroll)
    }
}

/// Normalised scroll fraction. A page no taller than the viewport has no
/// scroll range; that case resolves to zero progress.
pub fn scroll_progress(scroll_y: f32, max_scroll: f32) -> f32 {
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

pub fn section_for_progress(progress: f32) -> usize {
    ((progress * SECTION_COUNT as f32).floor() as usize).min(SECTION_COUNT - 1)
}

/// Fold scroll samples into the shared state. Samples arriving while the
/// loading overlay is still up are drained and dropped, matching the page
/// behaviour of ignoring scroll input during the load simulation.
pub fn apply_scroll_samples(
    mut samples: EventReader<ScrollSample>,
    mut scroll_state: ResMut<ScrollState>,
    app_state: Res<State<AppState>>,
    mut bridge: ResMut<PageBridge>,
) {
    if *app_state.get() != AppState::Running {
        samples.clear();
        return;
    }

    let Some(sample) = samples.read().last().copied() else {
        return;
    };

    scroll_state.scroll_y = sample.scroll_y;
    scroll_state.max_scroll = sample.max_scroll;

    let new_section = section_for_progress(scroll_state.progress());
    if new_section != scroll_state.current_section {
        scroll_state.current_section = new_section;
        refresh_section_indicators(new_section);
        bridge.send_notification(
            "section_changed",
            serde_json::json!({
                "section": new_section,
                "label": section_info(new_section).map(|info| info.label),
            }),
        );
    }
}

/// Apply a viewport resize: render surface to (W, H), camera aspect to W/H.
/// Idempotent when the size is unchanged.
pub fn apply_viewport_resize(
    mut resizes: EventReader<ViewportResized>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(size) = resizes.read().last().copied() else {
        return;
    };
    if size.width <= 0.0 || size.height <= 0.0 {
        warn!("ignoring degenerate viewport size {}x{}", size.width, size.height);
        return;
    }

    if let Ok(mut window) = windows.single_mut() {
        if window.resolution.width() != size.width || window.resolution.height() != size.height {
            window.resolution.set(size.width, size.height);
        }
    }

    let aspect = size.width / size.height;
    if let Ok(mut projection) = projections.single_mut() {
        if let Projection::Perspective(perspective) = &mut *projection {
            if perspective.aspect_ratio != aspect {
                perspective.aspect_ratio = aspect;
            }
        }
    }
}

/// Record what the intersection watcher saw and flag disagreements with the
/// scroll-derived section. Deliberately not a second writer of
/// `current_section`.
pub fn record_observed_sections(
    mut observed: EventReader<SectionObserved>,
    mut scroll_state: ResMut<ScrollState>,
) {
    for event in observed.read() {
        if scroll_state.observed_section == Some(event.index) {
            continue;
        }
        scroll_state.observed_section = Some(event.index);
        if event.index != scroll_state.current_section {
            warn!(
                "intersection watcher saw section {} while scroll state is at {}",
                event.index, scroll_state.current_section
            );
        }
    }
}

/// Native stand-in for the page scroll: the mouse wheel moves a virtual
/// scroll offset across a page of one viewport height per section.
#[cfg(not(target_arch = "wasm32"))]
pub fn native_scroll_input(
    mut wheel_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut samples: EventWriter<ScrollSample>,
    mut virtual_scroll: Local<f32>,
) {
    let mut delta = 0.0;
    for event in wheel_events.read() {
        delta += match event.unit {
            MouseScrollUnit::Line => event.y * 120.0,
            MouseScrollUnit::Pixel => event.y,
        };
    }
    if delta.abs() <= f32::EPSILON {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let max_scroll = window.height() * (SECTION_COUNT as f32 - 1.0);
    *virtual_scroll = (*virtual_scroll - delta).clamp(0.0, max_scroll);
    samples.write(ScrollSample {
        scroll_y: *virtual_scroll,
        max_scroll,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_stays_normalised() {
        let max_scroll = 3200.0;
        for step in 0..=32 {
            let scroll_y = max_scroll * step as f32 / 32.0;
            let progress = scroll_progress(scroll_y, max_scroll);
            assert!((0.0..=1.0).contains(&progress));
            assert!(section_for_progress(progress) < SECTION_COUNT);
        }
    }

    #[test]
    fn zero_scroll_range_resolves_to_zero_progress() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(480.0, 0.0), 0.0);
        assert_eq!(scroll_progress(480.0, -1.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1500.0, 1000.0), 1.0);
    }

    #[test]
    fn sections_split_the_scroll_range_evenly() {
        assert_eq!(section_for_progress(0.0), 0);
        assert_eq!(section_for_progress(0.19), 0);
        assert_eq!(section_for_progress(0.2), 1);
        assert_eq!(section_for_progress(0.5), 2);
        assert_eq!(section_for_progress(0.79), 3);
        assert_eq!(section_for_progress(0.8), 4);
        assert_eq!(section_for_progress(1.0), 4);
    }

    #[test]
    fn state_progress_uses_stored_metrics() {
        let state = ScrollState {
            scroll_y: 600.0,
            max_scroll: 1200.0,
            current_section: 0,
            observed_section: None,
        };
        assert_eq!(state.progress(), 0.5);
    }

    fn resize_app() -> App {
        let mut app = App::new();
        app.add_event::<ViewportResized>()
            .add_systems(Update, apply_viewport_resize);
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app.world_mut().spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection::default()),
        ));
        app
    }

    fn window_size(app: &mut App) -> (f32, f32) {
        let mut query = app
            .world_mut()
            .query_filtered::<&Window, With<PrimaryWindow>>();
        let window = query.single(app.world()).unwrap();
        (window.resolution.width(), window.resolution.height())
    }

    fn camera_aspect(app: &mut App) -> f32 {
        let mut query = app.world_mut().query::<&Projection>();
        match query.single(app.world()).unwrap() {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("camera projection is perspective"),
        }
    }

    #[test]
    fn resize_updates_surface_and_aspect() {
        let mut app = resize_app();
        app.world_mut().send_event(ViewportResized {
            width: 1600.0,
            height: 800.0,
        });
        app.update();

        assert_eq!(window_size(&mut app), (1600.0, 800.0));
        assert_eq!(camera_aspect(&mut app), 2.0);
    }

    #[test]
    fn resize_to_the_same_size_changes_nothing() {
        let mut app = resize_app();
        for _ in 0..3 {
            app.world_mut().send_event(ViewportResized {
                width: 1280.0,
                height: 720.0,
            });
            app.update();
            assert_eq!(window_size(&mut app), (1280.0, 720.0));
            assert_eq!(camera_aspect(&mut app), 1280.0 / 720.0);
        }
    }

    #[test]
    fn degenerate_viewport_sizes_are_ignored() {
        let mut app = resize_app();
        let before = window_size(&mut app);
        app.world_mut().send_event(ViewportResized {
            width: 1024.0,
            height: 0.0,
        });
        app.update();
        assert_eq!(window_size(&mut app), before);
    }

    fn scroll_app(initial: AppState) -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin)
            .insert_state(initial)
            .init_resource::<ScrollState>()
            .init_resource::<crate::bridge::page_rpc::PageBridge>()
            .add_event::<ScrollSample>()
            .add_event::<SectionObserved>()
            .add_systems(Update, (apply_scroll_samples, record_observed_sections));
        app
    }

    #[test]
    fn samples_fold_into_shared_state_once_running() {
        let mut app = scroll_app(AppState::Running);
        app.world_mut().send_event(ScrollSample {
            scroll_y: 1600.0,
            max_scroll: 3200.0,
        });
        app.update();

        let state = app.world().resource::<ScrollState>();
        assert_eq!(state.scroll_y, 1600.0);
        assert_eq!(state.current_section, 2);
    }

    #[test]
    fn samples_are_dropped_while_loading() {
        let mut app = scroll_app(AppState::Loading);
        app.world_mut().send_event(ScrollSample {
            scroll_y: 3200.0,
            max_scroll: 3200.0,
        });
        app.update();

        let state = app.world().resource::<ScrollState>();
        assert_eq!(state.scroll_y, 0.0);
        assert_eq!(state.current_section, 0);
    }

    #[test]
    fn observations_corroborate_without_writing_the_section() {
        let mut app = scroll_app(AppState::Running);
        app.world_mut().send_event(SectionObserved { index: 3 });
        app.update();

        let state = app.world().resource::<ScrollState>();
        assert_eq!(state.observed_section, Some(3));
        assert_eq!(state.current_section, 0);
    }
}
