//! Platform-agnostic building blocks: time arithmetic, validation, configuration
//! and the small amount of glue that differs between web and desktop.

pub mod config;
pub mod countdown;
pub mod error;
pub mod format;
pub mod platform;
pub mod timing;
pub mod validate;
