//! Static scene construction for the five showcase sections.
//!
//! Everything here is spawned once at startup from compile-time constants;
//! the per-frame systems only ever mutate transforms.

/// Scene lighting: ambient fill, shadow-casting key light, palette accent.
pub mod lighting;

/// Section group spawning: one themed primary mesh plus a label placeholder
/// per vertical slot.
pub mod sections;
