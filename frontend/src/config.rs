use log::Level;

pub const SITE_NAME: &str = "STUDIO";

// Navigation switches to its glass background past this many pixels.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_STEPS: u32 = 60;

// Per-item entrance delays for staggered grids.
pub const STAGGER_MS: u32 = 100;
pub const STAGGER_WIDE_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty locally, every reveal and counter transition
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
