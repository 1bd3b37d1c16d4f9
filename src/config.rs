//! App Configuration
//!
//! Compile-time defaults, provided to components via context.

use log::Level;
use todo_core::DEFAULT_STORAGE_KEY;

/// Delay between checking an item off and the list redraw
pub const REFRESH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// `localStorage` key holding the list
    pub storage_key: &'static str,
    pub refresh_delay_ms: u32,
    /// Most verbose level sent to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            refresh_delay_ms: REFRESH_DELAY_MS,
            log_level: if cfg!(debug_assertions) { Level::Debug } else { Level::Info },
        }
    }
}
