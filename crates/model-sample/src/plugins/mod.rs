//! Plugins built on the framework's extension points.
//!
//! The core model knows nothing about persistence or serialization; these
//! modules attach both through [`ModelType::use_plugin`],
//! [`ModelType::extend`], and [`ModelType::extend_instances`].
//!
//! [`ModelType::use_plugin`]: model_framework::ModelType::use_plugin
//! [`ModelType::extend`]: model_framework::ModelType::extend
//! [`ModelType::extend_instances`]: model_framework::ModelType::extend_instances

pub mod json;
pub mod store;
