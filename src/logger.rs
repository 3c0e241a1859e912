//! Console Logger
//!
//! Routes `log` records to the browser console.

use log::LevelFilter;

/// Default level when the page doesn't set one
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the console logger. `Off` installs nothing.
pub fn init(level: LevelFilter) {
    if let Some(level) = level.to_level() {
        console_log::init_with_level(level).ok();
    }
}
