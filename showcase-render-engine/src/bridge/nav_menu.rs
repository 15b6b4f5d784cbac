//! Navigation chrome wiring: the menu toggle and the clickable progress
//! dots. These interactions never touch engine state; they only drive the
//! page itself, so the handlers live entirely in DOM callbacks.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::bridge::page_rpc::scroll_page_to_section;

#[cfg(target_arch = "wasm32")]
pub fn setup_nav_listeners() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Menu toggle button.
    if let Some(toggle) = document.get_element_by_id("menuToggle") {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(menu) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("navMenu"))
            {
                let _ = menu.class_list().toggle("active");
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = toggle
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Close the menu when clicking anywhere outside it or its toggle.
    {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let (Some(menu), Some(toggle)) = (
                document.get_element_by_id("navMenu"),
                document.get_element_by_id("menuToggle"),
            ) else {
                return;
            };
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = menu.contains(target.as_ref()) || toggle.contains(target.as_ref());
            if !inside {
                let _ = menu.class_list().remove_1("active");
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Progress dots scroll the page to their section.
    if let Ok(dots) = document.query_selector_all(".progress-dot") {
        for index in 0..dots.length() {
            let Some(node) = dots.item(index) else {
                continue;
            };
            let Ok(dot) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let section = index as usize;
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let _ = scroll_page_to_section(section);
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
