//! Entrance animation presets
//!
//! Presets are plain data evaluated against the time elapsed since a section
//! revealed. Nothing here reads a clock, so the same elapsed time always
//! yields the same pose.

pub mod easing;
pub mod presets;
pub mod spring;

pub use easing::Easing;
pub use presets::{Curve, Pose, Preset, Stagger};
pub use spring::Spring;
