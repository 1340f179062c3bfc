//! # Property Descriptors
//!
//! A property is declared either by bare name (no constraints) or by a
//! [`PropertyDescriptor`] carrying a `required` flag, a primitive-type
//! constraint, and an ordered list of custom validators. [`PropertyKey`]
//! lets call sites mix both forms freely in one list.

use std::fmt;
use std::rc::Rc;

use crate::error::ModelError;
use crate::value::{PropertyType, Value};

/// Predicate over a candidate value.
pub type ValidatorFn = Rc<dyn Fn(&Value) -> bool>;

/// A user-supplied validation rule: a predicate plus the message reported
/// when the predicate rejects a value.
///
/// Only the predicate participates in the accept/reject decision; the
/// message is metadata surfaced in the resulting
/// [`ModelError::Validation`](crate::ModelError::Validation).
#[derive(Clone)]
pub struct CustomValidator {
    pub(crate) check: ValidatorFn,
    pub(crate) message: String,
}

impl CustomValidator {
    pub fn new(check: impl Fn(&Value) -> bool + 'static, message: impl Into<String>) -> Self {
        Self {
            check: Rc::new(check),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Declarative specification of one property.
///
/// Construct with the builder methods, or as a struct literal; all fields
/// are public.
///
/// ```
/// use model_framework::{PropertyDescriptor, PropertyType};
///
/// let age = PropertyDescriptor::new("age")
///     .typed(PropertyType::Number)
///     .validator(|v| v.as_f64().map_or(false, |n| n >= 0.0), "age must not be negative");
/// assert_eq!(age.name, "age");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyDescriptor {
    /// Property name, unique within a model. Re-registering a name replaces
    /// the earlier registration (last write wins).
    pub name: String,
    /// Reject the absent sentinel on assignment.
    pub required: bool,
    /// Built-in primitive-type constraint, applied to present values only.
    pub ty: Option<PropertyType>,
    /// Custom validators, evaluated in declaration order after the type
    /// check.
    pub validators: Vec<CustomValidator>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark the property required: assigning [`Value::Null`] fails.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrain the property to one primitive type.
    pub fn typed(mut self, ty: PropertyType) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Append a custom validator. Validators run in the order they were
    /// added, after the required and type checks.
    pub fn validator(
        mut self,
        check: impl Fn(&Value) -> bool + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.validators.push(CustomValidator::new(check, message));
        self
    }

    /// Whether any constraint is declared. Unconstrained descriptors compile
    /// to no decision function at all; assignment always succeeds.
    pub fn is_constrained(&self) -> bool {
        self.required || self.ty.is_some() || !self.validators.is_empty()
    }
}

/// A property registration: a bare name or a full descriptor.
#[derive(Debug, Clone)]
pub enum PropertyKey {
    Name(String),
    Descriptor(PropertyDescriptor),
}

impl PropertyKey {
    /// Resolve to a descriptor, rejecting empty names.
    pub(crate) fn into_descriptor(self) -> Result<PropertyDescriptor, ModelError> {
        let descriptor = match self {
            Self::Name(name) => PropertyDescriptor::new(name),
            Self::Descriptor(descriptor) => descriptor,
        };
        if descriptor.name.is_empty() {
            return Err(ModelError::MissingPropertyName);
        }
        Ok(descriptor)
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PropertyDescriptor> for PropertyKey {
    fn from(descriptor: PropertyDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}
