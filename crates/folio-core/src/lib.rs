pub mod backdrop;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod motion;
pub mod reveal;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
