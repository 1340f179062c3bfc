use model_framework::{
    create_model, ModelError, ModelType, PropertyDescriptor, PropertyKey, PropertyType,
};

/// Build the `Product` model: a required name, a non-negative price, and an
/// optional stock flag.
pub fn product_model() -> Result<ModelType, ModelError> {
    let properties: [PropertyKey; 3] = [
        PropertyDescriptor::new("name")
            .required()
            .typed(PropertyType::String)
            .into(),
        PropertyDescriptor::new("price")
            .required()
            .typed(PropertyType::Number)
            .validator(
                |v| v.as_f64().map_or(false, |n| n >= 0.0),
                "price must not be negative",
            )
            .into(),
        PropertyDescriptor::new("in_stock")
            .typed(PropertyType::Boolean)
            .into(),
    ];
    create_model("Product", properties)
}
