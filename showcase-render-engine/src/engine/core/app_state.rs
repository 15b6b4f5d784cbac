use bevy::prelude::*;

/// Top-level application lifecycle. Transitions are one-way: once the
/// loading simulation finishes and the overlay delay elapses, the app stays
/// in `Running` until page teardown.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Revealing,
    Running,
}
