//! Application Layer
//!
//! Demo app initialization, window management and workspace.

pub mod application;
pub mod workspace;
