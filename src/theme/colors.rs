//! Colors - Component Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0xf5c518) }
    /// Primary button hover background
    pub fn button_primary_hover() -> Rgba { rgba(0xd4a817ff) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0x1f2937) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgba(0xe5e7ebff) }
    /// Secondary button hover background
    pub fn button_secondary_hover() -> Rgba { rgba(0xd1d5dbff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    /// Ghost button hover background
    pub fn button_ghost_hover() -> Rgba { rgba(0xf3f4f6ff) }

    // Tooltip colors
    /// Tooltip background - Dark blue
    pub fn tooltip_bg() -> Rgba { rgb(0x1a2332) }
    /// Tooltip border
    pub fn tooltip_border() -> Rgba { rgba(0xffffff22) }
}
