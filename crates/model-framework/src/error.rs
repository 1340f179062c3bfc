//! # Framework Errors
//!
//! One error enum covers the whole framework, split into two families:
//!
//! - **Configuration errors** are raised at model- or property-definition
//!   time for malformed input (missing model name, descriptor without a
//!   name, assignment to an undeclared property, call to an unknown
//!   extension). They are fatal to the call that triggered them.
//! - **Validation errors** are raised at assignment time when a value fails
//!   its compiled decision function. The rejected value is never stored.
//!
//! There are no retries and nothing is swallowed; every error propagates to
//! the immediate caller.

/// Errors raised by the model framework.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model name required")]
    MissingModelName,
    #[error("Property descriptor requires a `name`")]
    MissingPropertyName,
    #[error("Unknown property `{0}`")]
    UnknownProperty(String),
    #[error("Unknown extension `{0}`")]
    UnknownExtension(String),
    #[error("Invalid value for `{property}`: {message}")]
    Validation { property: String, message: String },
    #[error("Extension error: {0}")]
    Extension(Box<dyn std::error::Error + Send + Sync>),
}

impl ModelError {
    /// Whether this is an assignment-time validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
