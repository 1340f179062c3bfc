//! In-memory key-value store plugin.
//!
//! Persists instances as JSON strings under the value of a designated key
//! property. Attaches `save` at instance scope and `fetch`/`del` at model
//! scope. `save` serializes through the JSON plugin's `to_json` extension,
//! so apply [`json_plugin`](crate::plugins::json::json_plugin) first.
//!
//! Every plugin application owns its own private store; applying the plugin
//! to two models gives each model an independent keyspace.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use model_framework::{ModelError, ModelType, Value};

/// Store-specific failures, wrapped into
/// [`ModelError::Extension`] on the way out.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("store keys must be strings, got {0}")]
    BadKey(&'static str),
    #[error("key property `{0}` is unset")]
    MissingKey(String),
}

impl From<StoreError> for ModelError {
    fn from(e: StoreError) -> Self {
        Self::Extension(Box::new(e))
    }
}

/// Build a store plugin keyed by `key_property`.
pub fn store_plugin(key_property: &str) -> impl Fn(&ModelType) {
    let key_property = key_property.to_string();
    move |model: &ModelType| {
        let db: Rc<RefCell<HashMap<String, String>>> = Rc::new(RefCell::new(HashMap::new()));

        {
            let db = db.clone();
            let key_property = key_property.clone();
            model.extend_instances("save", move |instance, _| {
                let key = match instance.get(&key_property) {
                    Value::String(key) => key,
                    Value::Null => {
                        return Err(StoreError::MissingKey(key_property.clone()).into())
                    }
                    other => return Err(StoreError::BadKey(other.type_name()).into()),
                };
                let json = match instance.call("to_json", Value::Null)? {
                    Value::String(json) => json,
                    _ => return Err(ModelError::Extension("to_json must return a string".into())),
                };
                db.borrow_mut().insert(key.clone(), json);
                Ok(Value::String(key))
            });
        }

        {
            let db = db.clone();
            model.extend("fetch", move |_, key| {
                let key = match key {
                    Value::String(key) => key,
                    other => return Err(StoreError::BadKey(other.type_name()).into()),
                };
                db.borrow()
                    .get(&key)
                    .cloned()
                    .map(Value::String)
                    .ok_or_else(|| StoreError::NotFound(key).into())
            });
        }

        {
            let db = db.clone();
            model.extend("del", move |_, key| {
                let key = match key {
                    Value::String(key) => key,
                    other => return Err(StoreError::BadKey(other.type_name()).into()),
                };
                db.borrow_mut()
                    .remove(&key)
                    .map(|_| Value::Bool(true))
                    .ok_or_else(|| StoreError::NotFound(key).into())
            });
        }
    }
}
