//! # Model Sample
//!
//! Demonstrates the `model-framework` recipe end to end:
//!
//! - [`model`] - concrete model definitions (`User`, `Product`) built with
//!   descriptors, type constraints, and custom validators.
//! - [`plugins`] - everything the core deliberately does *not* do,
//!   implemented on the extension-point surface: JSON conversion and an
//!   in-memory key-value store.
//! - [`logging`] - `tracing` subscriber setup for the demo binary.
//!
//! Run the demo with `RUST_LOG=debug cargo run -p model-sample`.

pub mod logging;
pub mod model;
pub mod plugins;
