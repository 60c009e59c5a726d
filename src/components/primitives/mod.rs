//! Primitive Components
//!
//! Buttons and the tooltip they can carry.

pub mod button;
pub mod tooltip;
pub mod tooltip_button;
