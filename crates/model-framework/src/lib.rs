//! # Model Framework
//!
//! A small runtime library for defining **model** constructors: factory
//! functions that produce named object types with typed, validated,
//! observable properties. Declare a model by name and a list of property
//! registrations; instances fire change notifications on every assignment,
//! at both the model (class) scope and the individual instance scope.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into small, composable layers:
//!
//! 1. **Validator Compiler** ([`validator`]) - turns one descriptor's
//!    constraints into a single decision function.
//! 2. **Property Compiler** ([`ModelType::set_property`]) - turns a name or
//!    descriptor into a live getter/setter pair on the model's shared
//!    accessor table.
//! 3. **Storage** - the per-instance value table, allocated inside the
//!    constructor so instances are strictly isolated from each other.
//! 4. **Notification** ([`events`]) - a synchronous pub/sub capability
//!    owned by every model type and every instance.
//! 5. **Model Factory** ([`create_model`]) - wires the above into a
//!    constructible [`ModelType`].
//!
//! Everything is single-threaded and fully synchronous: every validator and
//! every listener returns before the triggering assignment completes.
//!
//! ## Example
//!
//! ```rust
//! use model_framework::{
//!     create_model, PropertyDescriptor, PropertyKey, PropertyType, Topic, Value,
//! };
//!
//! # fn main() -> Result<(), model_framework::ModelError> {
//! let user = create_model(
//!     "User",
//!     [
//!         PropertyKey::from("name"),
//!         PropertyDescriptor::new("email")
//!             .required()
//!             .typed(PropertyType::String)
//!             .validator(
//!                 |v| v.as_str().map_or(false, |s| s.contains('@')),
//!                 "email must contain '@'",
//!             )
//!             .into(),
//!     ],
//! )?;
//!
//! // Class-level listener: fires for every instance of the model.
//! user.on(Topic::change_of("email"), |event| {
//!     if let model_framework::Event::Change { value, .. } = event {
//!         println!("email is now {value}");
//!     }
//! });
//!
//! let alice = user.create();
//! alice.set("email", "alice@example.com")?;
//! assert_eq!(alice.get("email"), Value::from("alice@example.com"));
//!
//! // Validation failures reject the assignment and keep the old value.
//! assert!(alice.set("email", "not-an-email").is_err());
//! assert_eq!(alice.get("email"), Value::from("alice@example.com"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Extension Points
//!
//! The core implements no persistence and no serialization. Instead,
//! [`ModelType::use_plugin`] hands the model to a plugin function, which
//! can attach named extensions at model scope ([`ModelType::extend`]) or
//! instance scope ([`ModelType::extend_instances`]). The companion sample
//! crate ships a JSON conversion plugin and an in-memory key-value store
//! plugin built entirely on this surface.

pub mod descriptor;
pub mod error;
pub mod events;
pub mod model;
pub mod validator;
pub mod value;

mod property;
mod storage;

// Re-export core types for convenience
pub use descriptor::{CustomValidator, PropertyDescriptor, PropertyKey};
pub use error::ModelError;
pub use events::{Emitter, Event, Topic};
pub use model::{create_model, Attributes, Instance, ModelType};
pub use value::{PropertyType, Value};
