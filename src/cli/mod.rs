//! Command-line interface for omnidraft.

pub mod args;
pub mod commands;
