//! Configuration management for omnidraft.
//!
//! This module handles loading and saving configuration from `~/.omnidraft/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{CaptureConfig, Config, GeneralConfig, OmniFocusConfig};
