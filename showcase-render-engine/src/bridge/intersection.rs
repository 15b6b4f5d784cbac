//! Section visibility watcher.
//!
//! An IntersectionObserver reports page sections crossing half visibility.
//! Observations corroborate the scroll-derived section index; they never
//! write it (see `record_observed_sections`).

use constants::sections::SECTION_COUNT;

#[cfg(target_arch = "wasm32")]
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::bridge::dom_events::DomEvent;

/// Fraction of a section element that must be visible before it counts.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Derive a zero-based section index from an element id such as `section3`.
pub fn parse_section_id(id: &str) -> Option<usize> {
    let digits = id.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.len() == id.len() || digits.is_empty() {
        // No prefix or no numeral at all; not a section element.
        return None;
    }
    let ordinal: usize = digits.parse().ok()?;
    let index = ordinal.checked_sub(1)?;
    (index < SECTION_COUNT).then_some(index)
}

#[cfg(target_arch = "wasm32")]
pub fn setup_section_observer(queue: &Arc<Mutex<Vec<DomEvent>>>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let queue = queue.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                match parse_section_id(&id) {
                    Some(index) => {
                        if let Ok(mut queue) = queue.lock() {
                            queue.push(DomEvent::SectionVisible { index });
                        }
                    }
                    None => {
                        web_sys::console::warn_1(
                            &format!("section element with unparseable id: {id}").into(),
                        );
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(error) => {
            web_sys::console::warn_1(
                &format!("section observer unavailable: {error:?}").into(),
            );
            return;
        }
    };
    callback.forget();

    let Ok(sections) = document.query_selector_all(".section") else {
        return;
    };
    for i in 0..sections.length() {
        let Some(node) = sections.item(i) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
            observer.observe(&element);
        }
    }
}
