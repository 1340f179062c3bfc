//! JSON conversion plugin.
//!
//! Attaches `to_json` at instance scope: serialize every declared property
//! into a JSON object and return it as a string value. The reverse
//! direction, [`instance_from_json`], is a plain function because it
//! produces an [`Instance`] rather than a property value; it assigns only
//! declared properties, so unknown JSON keys are ignored.

use std::collections::HashSet;

use model_framework::{Attributes, Instance, ModelError, ModelType, PropertyType, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Attach JSON conversion extensions. Use with
/// [`ModelType::use_plugin`](model_framework::ModelType::use_plugin).
pub fn json_plugin(model: &ModelType) {
    model.extend_instances("to_json", |instance, _| {
        let mut object = serde_json::Map::new();
        for name in instance.model().property_names() {
            object.insert(name.clone(), to_json_value(&instance.get(&name))?);
        }
        Ok(Value::String(serde_json::Value::Object(object).to_string()))
    });
}

/// Build an instance of `model` from a JSON object, assigning declared
/// properties in the model's declaration order. Validation and change
/// notification replay in full, and `construct` fires.
pub fn instance_from_json(model: &ModelType, text: &str) -> Result<Instance, ModelError> {
    let parsed: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ModelError::Extension(Box::new(e)))?;
    let serde_json::Value::Object(object) = parsed else {
        return Err(ModelError::Extension("expected a JSON object".into()));
    };

    // Date-typed properties arrive as RFC 3339 strings and need parsing.
    let date_properties: HashSet<String> = model
        .descriptors()
        .iter()
        .filter(|d| d.ty == Some(PropertyType::Date))
        .map(|d| d.name.clone())
        .collect();

    let mut attributes = Attributes::new();
    for name in model.property_names() {
        if let Some(raw) = object.get(&name) {
            attributes.insert(
                name.clone(),
                from_json_value(raw, date_properties.contains(&name))?,
            );
        }
    }
    model.create_with(attributes)
}

fn to_json_value(value: &Value) -> Result<serde_json::Value, ModelError> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Date(d) => serde_json::Value::String(
            d.format(&Rfc3339)
                .map_err(|e| ModelError::Extension(Box::new(e)))?,
        ),
    })
}

fn from_json_value(raw: &serde_json::Value, as_date: bool) -> Result<Value, ModelError> {
    Ok(match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) if as_date => Value::Date(
            OffsetDateTime::parse(s, &Rfc3339).map_err(|e| ModelError::Extension(Box::new(e)))?,
        ),
        serde_json::Value::String(s) => Value::String(s.clone()),
        other => {
            return Err(ModelError::Extension(
                format!("unsupported JSON value: {other}").into(),
            ))
        }
    })
}
