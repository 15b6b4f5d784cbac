/// Interval between loading-simulation ticks (seconds).
pub const TICK_INTERVAL_SECS: f32 = 0.1;

/// Upper bound of the random progress increment added per tick.
pub const MAX_TICK_INCREMENT: f32 = 15.0;

/// Progress value that completes the simulation.
pub const COMPLETE_PROGRESS: f32 = 100.0;

/// Delay between reaching full progress and revealing the scene (seconds).
pub const REVEAL_DELAY_SECS: f32 = 0.5;
