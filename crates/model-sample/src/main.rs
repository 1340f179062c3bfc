//! Demo binary: build models, subscribe at both scopes, exercise the JSON
//! and store plugins.
//!
//! ```bash
//! RUST_LOG=info cargo run -p model-sample
//! ```

use std::error::Error;

use model_framework::{Attributes, Event, Topic, Value};
use model_sample::logging::setup_tracing;
use model_sample::model::product::product_model;
use model_sample::model::user::user_model;
use model_sample::plugins::json::{instance_from_json, json_plugin};
use model_sample::plugins::store::store_plugin;
use tracing::info;

fn attrs<const N: usize>(pairs: [(&str, Value); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let user = user_model()?;
    user.on(Topic::Construct, |event| {
        if let Event::Construct { attributes, .. } = event {
            info!(attributes = attributes.len(), "user constructed");
        }
    });
    user.on(Topic::change_of("email"), |event| {
        if let Event::Change { value, .. } = event {
            info!(%value, "email changed");
        }
    });

    user.use_plugin(json_plugin)
        .use_plugin(store_plugin("username"));

    let alice = user.create_with(attrs([
        ("username", Value::from("alice")),
        ("email", Value::from("alice@example.com")),
        ("age", Value::from(30)),
    ]))?;

    alice.on(Topic::Change, |event| {
        if let Event::Change {
            property, value, ..
        } = event
        {
            info!(%property, %value, "instance change");
        }
    });

    alice.set("age", 31)?;

    let key = alice.call("save", Value::Null)?;
    info!(%key, "saved");

    let json = user.call("fetch", Value::from("alice"))?;
    let copy = instance_from_json(&user, json.as_str().unwrap_or_default())?;
    info!(email = %copy.get("email"), "fetched copy");

    user.call("del", Value::from("alice"))?;
    if let Err(err) = user.call("fetch", Value::from("alice")) {
        info!(%err, "alice is gone");
    }

    let product = product_model()?;
    let book = product.create_with(attrs([
        ("name", Value::from("book")),
        ("price", Value::from(12.5)),
    ]))?;
    if let Err(err) = book.set("price", -1) {
        info!(%err, "price rejected");
    }
    info!(price = %book.get("price"), "price unchanged");

    Ok(())
}
