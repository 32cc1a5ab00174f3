//! OmniFocus integration.
//!
//! The handoff is a single x-callback-url paste; everything upstream of it
//! is pure text transformation, so the delivery seam is the one trait in
//! the crate.

pub mod client;

pub use client::{Deliverer, OmniFocusClient, PASTE_URL_BASE};
