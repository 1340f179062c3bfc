use model_framework::{Attributes, ModelError, Value};
use model_sample::model::user::user_model;
use model_sample::plugins::json::{instance_from_json, json_plugin};
use model_sample::plugins::store::store_plugin;
use time::OffsetDateTime;

fn attrs<const N: usize>(pairs: [(&str, Value); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn alice_attrs() -> Attributes {
    attrs([
        ("username", Value::from("alice")),
        ("email", Value::from("alice@example.com")),
        ("age", Value::from(30)),
    ])
}

#[test]
fn to_json_serializes_only_declared_properties() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin);

    let alice = user.create_with(alice_attrs()).unwrap();
    let json = alice.call("to_json", Value::Null).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(json.as_str().unwrap()).unwrap();

    assert_eq!(parsed["username"], "alice");
    assert_eq!(parsed["email"], "alice@example.com");
    assert_eq!(parsed["age"], 30.0);
    // Unset declared properties serialize as null; undeclared keys do not
    // exist at all.
    assert!(parsed["signed_up"].is_null());
    assert!(parsed.get("password").is_none());
}

#[test]
fn save_fetch_round_trips_through_the_store() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin)
        .use_plugin(store_plugin("username"));

    let alice = user.create_with(alice_attrs()).unwrap();
    let key = alice.call("save", Value::Null).unwrap();
    assert_eq!(key, Value::from("alice"));

    let json = user.call("fetch", Value::from("alice")).unwrap();
    let copy = instance_from_json(&user, json.as_str().unwrap()).unwrap();
    assert_eq!(copy.get("email"), alice.get("email"));
    assert_eq!(copy.get("age"), alice.get("age"));
}

#[test]
fn dates_survive_the_json_round_trip() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin);

    let signed_up = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let alice = user
        .create_with(attrs([
            ("username", Value::from("alice")),
            ("email", Value::from("alice@example.com")),
            ("signed_up", Value::from(signed_up)),
        ]))
        .unwrap();

    let json = alice.call("to_json", Value::Null).unwrap();
    let copy = instance_from_json(&user, json.as_str().unwrap()).unwrap();
    assert_eq!(copy.get("signed_up"), Value::Date(signed_up));
}

#[test]
fn from_json_replays_validation() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin);

    let err = instance_from_json(
        &user,
        r#"{"username": "alice", "email": "not-an-email"}"#,
    )
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn from_json_ignores_undeclared_keys() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin);

    let copy = instance_from_json(
        &user,
        r#"{"username": "alice", "email": "a@b.com", "ghost": 1}"#,
    )
    .unwrap();
    assert_eq!(copy.get("ghost"), Value::Null);
}

#[test]
fn deleted_keys_cannot_be_fetched() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin)
        .use_plugin(store_plugin("username"));

    let alice = user.create_with(alice_attrs()).unwrap();
    alice.call("save", Value::Null).unwrap();

    user.call("del", Value::from("alice")).unwrap();
    let err = user.call("fetch", Value::from("alice")).unwrap_err();
    assert!(matches!(err, ModelError::Extension(_)));
}

#[test]
fn save_requires_the_key_property() {
    let user = user_model().unwrap();
    user.use_plugin(json_plugin)
        .use_plugin(store_plugin("username"));

    // `username` is declared required but nothing was assigned yet; saving
    // an instance with the key property unset must fail.
    let nobody = user.create();
    let err = nobody.call("save", Value::Null).unwrap_err();
    assert!(matches!(err, ModelError::Extension(_)));
}
