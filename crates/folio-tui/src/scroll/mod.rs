//! Smooth page scrolling
//!
//! Key presses accumulate into a pending delta that the animator folds into
//! one eased glide on the next frame. With smooth scrolling disabled every
//! request lands immediately.

pub mod animator;
pub mod easing;

pub use animator::PageScroller;
pub use easing::EasingTypeExt;
