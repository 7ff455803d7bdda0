use std::time::Duration;

/// Minutes of the day drawn at the surface's native width (the first 20 hours)
pub const VISIBLE_RANGE_MINUTES: f64 = 1200.0;

/// Right edge of the time axis (24 hours)
pub const MAX_TIME_MINUTES: f64 = 1440.0;

/// Hour ticks on the time axis, `00:00` through `24:00` inclusive
pub const HOUR_TICK_COUNT: u32 = 25;

/// Each hour past the visible range adds `base_width / WIDTH_DIVISOR` pixels
pub const WIDTH_DIVISOR: f64 = 20.0;

/// Smallest forward step applied when a scheduled time would move backwards
pub const TIME_NUDGE_MINUTES: f64 = 0.01;

/// Backend used when no configuration overrides it
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the simulation endpoint relative to the API base URL
pub const SIMULATE_PATH: &str = "simulate";

/// Re-poll cadence while a simulation is live
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1500;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(DEFAULT_POLL_INTERVAL_MS);

/// Nominal length of one automatic block when estimating section length
pub const ESTIMATED_BLOCK_LENGTH_KM: f64 = 1.5;

pub const DEFAULT_TRAIN_COLOR: &str = "#000";

pub const NO_DATA_MESSAGE: &str = "No graph data — run the simulation.";
