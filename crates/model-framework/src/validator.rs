//! # Validator Compiler
//!
//! Compiles a property descriptor's constraints (required flag, primitive
//! type, custom validators) into a single decision function consulted on
//! every assignment.
//!
//! The evaluation order is fixed and load-bearing:
//!
//! 1. `required` and the value is [`Value::Null`] → invalid. Nothing else
//!    runs.
//! 2. optional and the value is [`Value::Null`] → valid. Constraints only
//!    apply to present values.
//! 3. The built-in type check, then each custom validator in declaration
//!    order, stopping at the first failure. All checks are pure, so the
//!    short-circuit is an optimization, not a behavior difference.

use std::rc::Rc;

use crate::descriptor::{PropertyDescriptor, ValidatorFn};
use crate::value::Value;

/// Compiled decision function: pass/fail for a candidate value.
pub type Decision = Rc<dyn Fn(&Value) -> bool>;

/// Compile `descriptor`'s constraints into one decision function.
///
/// Returns `None` when the descriptor carries no constraints at all; the
/// property compiler then skips validation entirely for that property.
pub fn compile(descriptor: &PropertyDescriptor) -> Option<Decision> {
    if !descriptor.is_constrained() {
        return None;
    }

    let required = descriptor.required;
    let ty = descriptor.ty;
    let checks: Vec<ValidatorFn> = descriptor.validators.iter().map(|v| v.check.clone()).collect();

    Some(Rc::new(move |value: &Value| {
        if value.is_null() {
            return !required;
        }
        if let Some(ty) = ty {
            if !ty.check(value) {
                return false;
            }
        }
        checks.iter().all(|check| check(value))
    }))
}

/// Human-readable reason for a rejected value, walking the same order the
/// compiled decision uses. Only called on the failure path.
pub(crate) fn diagnose(descriptor: &PropertyDescriptor, value: &Value) -> String {
    if value.is_null() {
        return "a value is required".to_string();
    }
    if let Some(ty) = descriptor.ty {
        if !ty.check(value) {
            return format!("expected a {ty}, got {}", value.type_name());
        }
    }
    for validator in &descriptor.validators {
        if !(validator.check)(value) {
            return validator.message.clone();
        }
    }
    "value rejected".to_string()
}
