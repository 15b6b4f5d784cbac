//! Page indicator updates: progress dots, the scroll cue, and the loading
//! overlay. Missing elements degrade to a logged warning; the scene itself
//! never depends on them.

use constants::sections::SECTION_COUNT;

#[cfg(target_arch = "wasm32")]
use bevy::prelude::warn;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// The scroll cue disappears once the final section is reached.
pub fn scroll_cue_hidden(current_section: usize) -> bool {
    current_section >= SECTION_COUNT - 1
}

pub fn refresh_section_indicators(active_section: usize) {
    refresh_progress_dots(active_section);
    refresh_scroll_cue(active_section);
}

#[cfg(target_arch = "wasm32")]
pub fn refresh_progress_dots(active_section: usize) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(dots) = document.query_selector_all(".progress-dot") else {
        return;
    };
    if dots.length() == 0 {
        warn!("no .progress-dot elements to refresh");
        return;
    }
    for i in 0..dots.length() {
        let Some(node) = dots.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let _ = element
            .class_list()
            .toggle_with_force("active", i as usize == active_section);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn refresh_scroll_cue(current_section: usize) {
    let Some(indicator) = element_by_id("scrollIndicator") else {
        return;
    };
    let _ = indicator
        .class_list()
        .toggle_with_force("hidden", scroll_cue_hidden(current_section));
}

#[cfg(target_arch = "wasm32")]
pub fn set_loading_bar(progress: f32) {
    if let Some(fill) = element_by_id("progressFill") {
        if let Some(fill) = fill.dyn_ref::<web_sys::HtmlElement>() {
            let _ = fill.style().set_property("width", &format!("{progress}%"));
        }
    }
    if let Some(text) = element_by_id("progressText") {
        text.set_text_content(Some(&format!("{}%", progress.round() as i32)));
    }
}

#[cfg(target_arch = "wasm32")]
pub fn hide_loading_screen() {
    if let Some(screen) = element_by_id("loadingScreen") {
        let _ = screen.class_list().add_1("hidden");
    }
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    let element = web_sys::window()?.document()?.get_element_by_id(id);
    if element.is_none() {
        warn!("missing DOM element: #{id}");
    }
    element
}

#[cfg(not(target_arch = "wasm32"))]
pub fn refresh_progress_dots(_active_section: usize) {
    // Page indicators only exist in the browser build.
}

#[cfg(not(target_arch = "wasm32"))]
pub fn refresh_scroll_cue(_current_section: usize) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_loading_bar(_progress: f32) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn hide_loading_screen() {}
