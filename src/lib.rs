//! Granary Simulation Library
//!
//! A grain delivery simulation library that can run independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
