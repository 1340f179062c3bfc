//! # Property Compiler
//!
//! Turns a property registration (bare name or descriptor) into a live
//! getter/setter pair on the model's shared accessor table. The compiled
//! setter wires together the three runtime concerns: the decision function
//! from the validator compiler, the instance's value table, and change
//! notification at both scopes.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::descriptor::PropertyKey;
use crate::error::ModelError;
use crate::events::{Event, Topic};
use crate::model::{Accessor, GetFn, Instance, ModelType, SetFn};
use crate::validator;
use crate::value::Value;

/// Compile and install one property on `model`.
///
/// Re-registering an existing name replaces the previous accessor.
pub(crate) fn install_property(model: &ModelType, key: PropertyKey) -> Result<(), ModelError> {
    let descriptor = key.into_descriptor()?;
    let name = descriptor.name.clone();
    let decision = validator::compile(&descriptor);

    debug!(
        model = %model.name(),
        property = %name,
        constrained = decision.is_some(),
        "Property installed"
    );

    let get: GetFn = {
        let name = name.clone();
        Rc::new(move |instance: &Instance| instance.stored(&name))
    };

    let set: SetFn = {
        let name = name.clone();
        let descriptor = descriptor.clone();
        Rc::new(move |instance: &Instance, value: Value| {
            if let Some(decision) = &decision {
                if !decision(&value) {
                    let message = validator::diagnose(&descriptor, &value);
                    warn!(
                        model = %instance.model().name(),
                        property = %name,
                        %message,
                        "Assignment rejected"
                    );
                    return Err(ModelError::Validation {
                        property: name.clone(),
                        message,
                    });
                }
            }

            instance.store(&name, value.clone());

            // All four notifications fire synchronously before the
            // assignment returns: model-general, instance-general, then the
            // property-narrowed topic at both scopes.
            let event = Event::Change {
                instance: instance.clone(),
                property: name.clone(),
                value,
            };
            let narrowed = Topic::ChangeOf(name.clone());
            instance.model().emit(&Topic::Change, &event);
            instance.emit(&Topic::Change, &event);
            instance.model().emit(&narrowed, &event);
            instance.emit(&narrowed, &event);
            Ok(())
        })
    };

    model.register_accessor(descriptor, Accessor { get, set });
    Ok(())
}

/// Install a whole property list in order.
pub(crate) fn install_properties(
    model: &ModelType,
    keys: impl IntoIterator<Item = PropertyKey>,
) -> Result<(), ModelError> {
    for key in keys {
        install_property(model, key)?;
    }
    Ok(())
}
