//! omnidraft - bulk task capture for OmniFocus
//!
//! This crate converts a line-oriented shorthand into TaskPaper text and
//! pastes it into OmniFocus through its x-callback-url scheme.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod omnifocus;
pub mod output;
pub mod shorthand;
pub mod taskpaper;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::OmnidraftError;
pub use omnifocus::{Deliverer, OmniFocusClient};
pub use shorthand::{parse_document, parse_document_with, Task};
