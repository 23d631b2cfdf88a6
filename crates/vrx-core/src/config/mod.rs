//! Configuration sources for answers

pub mod preset;

pub use preset::{Preset, PRESET_ENV};
