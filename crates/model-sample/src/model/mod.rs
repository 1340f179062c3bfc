//! Concrete model definitions used by the demo and the plugin tests.

pub mod product;
pub mod user;
