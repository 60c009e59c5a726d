//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI.

pub mod config;
