//! Hover Button Component Library
//!
//! A plain clickable button and a button with a hover-intent tooltip for
//! GPUI applications. The visibility logic lives in
//! [`state::hover_intent::HoverIntentController`] and does not depend on GPUI.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;
