//! Glue between the Bevy world and the hosting page.
//!
//! DOM callbacks run outside the Bevy tick; everything crossing that line
//! goes through thread-safe queues drained once per frame.

/// Scroll, resize, and section-visibility listeners feeding event queues.
pub mod dom_events;

/// Progress dots, scroll cue, and loading overlay element updates.
pub mod indicators;

/// IntersectionObserver wiring and section-id parsing.
pub mod intersection;

/// Menu toggle and progress-dot click handlers.
pub mod nav_menu;

/// JSON messaging with the hosting page over `window.postMessage`.
pub mod page_rpc;
