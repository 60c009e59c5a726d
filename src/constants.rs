//! UI Constants
//!
//! Hover-intent timings and tooltip layout values.

/// Pointer dwell on the trigger before the tooltip is shown
pub const SHOW_DELAY_MS: u64 = 500;

/// Grace period after the pointer leaves the trigger
pub const HIDE_DELAY_MS: u64 = 300;

/// Delay before hiding once the pointer leaves an interactive tooltip
pub const POPOVER_HIDE_DELAY_MS: u64 = 0;

/// Upper bound accepted for any configured delay
pub const MAX_DELAY_MS: u64 = 60_000;

/// Gap between the trigger and the tooltip, in pixels
pub const TOOLTIP_OFFSET: f32 = 6.0;

/// Maximum tooltip width, in pixels
pub const TOOLTIP_MAX_WIDTH: f32 = 280.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 420.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "hover-button.toml";
