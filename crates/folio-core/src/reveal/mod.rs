//! Scroll-triggered, single-fire section reveals
//!
//! Each section owns one [`RevealController`]. The controller registers an
//! [`IntersectionObserver`] on mount, flips its [`VisibilityFlag`] the first
//! time at least [`REVEAL_THRESHOLD`] of the section is on screen, and then
//! drops the observer. Nothing is shared between sections.

pub mod controller;
pub mod geometry;
pub mod observer;

pub use controller::{RevealController, VisibilityFlag, REVEAL_THRESHOLD};
pub use geometry::{intersection_ratio, RegionLookup, Span};
pub use observer::{IntersectionEntry, IntersectionObserver};
