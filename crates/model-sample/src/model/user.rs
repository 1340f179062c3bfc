use model_framework::{
    create_model, ModelError, ModelType, PropertyDescriptor, PropertyKey, PropertyType,
};

/// Build the `User` model.
///
/// - `username`: required string, also the store plugin's key property
/// - `email`: required string with a minimal shape check
/// - `age`: optional number, capped at 130
/// - `signed_up`: optional date
pub fn user_model() -> Result<ModelType, ModelError> {
    let properties: [PropertyKey; 4] = [
        PropertyDescriptor::new("username")
            .required()
            .typed(PropertyType::String)
            .into(),
        PropertyDescriptor::new("email")
            .required()
            .typed(PropertyType::String)
            .validator(
                |v| v.as_str().map_or(false, |s| s.contains('@')),
                "email must contain '@'",
            )
            .into(),
        PropertyDescriptor::new("age")
            .typed(PropertyType::Number)
            .validator(
                |v| v.as_f64().map_or(false, |n| (0.0..=130.0).contains(&n)),
                "age must be between 0 and 130",
            )
            .into(),
        PropertyDescriptor::new("signed_up")
            .typed(PropertyType::Date)
            .into(),
    ];
    create_model("User", properties)
}
