use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use crate::engine::systems::scroll_state::{
    ScrollSample, ScrollState, SectionObserved, ViewportResized, apply_scroll_samples,
    apply_viewport_resize, record_observed_sections,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::scroll_state::native_scroll_input;

/// One DOM observation, queued by a listener callback until the next frame.
#[derive(Debug, Clone, Copy)]
pub enum DomEvent {
    Scroll { scroll_y: f32, max_scroll: f32 },
    Resize { width: f32, height: f32 },
    SectionVisible { index: usize },
}

/// Thread-safe handoff between DOM callbacks and the Bevy schedule.
#[derive(Resource, Clone)]
pub struct DomEventQueue(pub Arc<Mutex<Vec<DomEvent>>>);

/// Plugin wiring page events into the scroll/resize/section systems.
pub struct DomEventsPlugin;

impl Plugin for DomEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollState>()
            .add_event::<ScrollSample>()
            .add_event::<ViewportResized>()
            .add_event::<SectionObserved>()
            .add_systems(
                Update,
                (
                    pump_dom_events,
                    apply_scroll_samples,
                    apply_viewport_resize,
                    record_observed_sections,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_dom_listeners);

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Update, native_scroll_input.before(apply_scroll_samples));
    }
}

/// Drain queued DOM observations into Bevy events.
pub fn pump_dom_events(
    queue: Option<Res<DomEventQueue>>,
    mut scroll_events: EventWriter<ScrollSample>,
    mut resize_events: EventWriter<ViewportResized>,
    mut section_events: EventWriter<SectionObserved>,
) {
    let Some(queue) = queue else {
        return;
    };

    let drained = match queue.0.lock() {
        Ok(mut queue) => std::mem::take(&mut *queue),
        Err(_) => Vec::new(),
    };

    for event in drained {
        match event {
            DomEvent::Scroll {
                scroll_y,
                max_scroll,
            } => {
                scroll_events.write(ScrollSample {
                    scroll_y,
                    max_scroll,
                });
            }
            DomEvent::Resize { width, height } => {
                resize_events.write(ViewportResized { width, height });
            }
            DomEvent::SectionVisible { index } => {
                section_events.write(SectionObserved { index });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_dom_listeners(mut commands: Commands) {
    let queue: Arc<Mutex<Vec<DomEvent>>> = Arc::new(Mutex::new(Vec::new()));

    let Some(window) = web_sys::window() else {
        error!("window object unavailable, DOM bridge disabled");
        return;
    };

    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(sample) = read_scroll_metrics() {
                if let Ok(mut queue) = queue.lock() {
                    queue.push(sample);
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .expect("failed to register scroll listener");
        // Ownership moves to JS for the page lifetime.
        closure.forget();
    }

    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(size) = read_viewport_metrics() {
                if let Ok(mut queue) = queue.lock() {
                    queue.push(size);
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .expect("failed to register resize listener");
        closure.forget();
    }

    crate::bridge::intersection::setup_section_observer(&queue);
    crate::bridge::nav_menu::setup_nav_listeners();

    commands.insert_resource(DomEventQueue(queue));
}

#[cfg(target_arch = "wasm32")]
fn read_scroll_metrics() -> Option<DomEvent> {
    let window = web_sys::window()?;
    let body = window.document()?.body()?;
    let scroll_y = window.scroll_y().ok()? as f32;
    let inner_height = window.inner_height().ok()?.as_f64()? as f32;
    let max_scroll = body.scroll_height() as f32 - inner_height;
    Some(DomEvent::Scroll {
        scroll_y,
        max_scroll,
    })
}

#[cfg(target_arch = "wasm32")]
fn read_viewport_metrics() -> Option<DomEvent> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    Some(DomEvent::Resize { width, height })
}
