//! # Instance Storage
//!
//! The private value table backing one instance. Each table is allocated
//! inside the instance constructor and owned by that instance alone, so two
//! instances can never observe each other's values.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::value::Value;

/// Per-instance value table keyed by property name.
#[derive(Debug, Default)]
pub(crate) struct ValueTable {
    values: RefCell<HashMap<String, Value>>,
}

impl ValueTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The stored value, or [`Value::Null`] when the name was never written.
    pub(crate) fn get(&self, name: &str) -> Value {
        self.values
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub(crate) fn set(&self, name: &str, value: Value) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }
}
