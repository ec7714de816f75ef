//! One handler per known target file.
//!
//! Handlers run in a fixed order (package manifest, builder configuration,
//! then source patches) and are independent: an earlier handler's write is
//! never rolled back when a later one fails.

pub mod app_banner;
pub mod browser_launcher;
pub mod builder_config;
pub mod manifest;
