//! State - Component State Machines

pub mod hover_intent;
