//! # Property Values
//!
//! Models are dynamically typed: every property holds a [`Value`]. The enum
//! covers the four primitive types a descriptor can constrain (`number`,
//! `string`, `boolean`, `date`) plus [`Value::Null`], the absent sentinel.
//!
//! Reading a property that was never assigned yields `Value::Null`, and it
//! is the one value a `required` constraint rejects. Optional properties
//! accept it without consulting any other constraint.

use std::fmt;

use time::OffsetDateTime;

/// A dynamically typed property value.
///
/// `Null` is the absent sentinel: it marks "no value present" and is
/// distinguished from every real value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(OffsetDateTime),
}

impl Value {
    /// Whether this is the absent sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(d: OffsetDateTime) -> Self {
        Self::Date(d)
    }
}

/// Built-in type constraint a property descriptor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Number,
    String,
    Boolean,
    Date,
}

impl PropertyType {
    /// Runtime check against a candidate value.
    ///
    /// Only called for present values; the validator short-circuits on
    /// [`Value::Null`] before type checks run.
    pub fn check(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Number, Value::Number(_))
                | (Self::String, Value::String(_))
                | (Self::Boolean, Value::Bool(_))
                | (Self::Date, Value::Date(_))
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Date => "date",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_checks_match_runtime_types() {
        assert!(PropertyType::Number.check(&Value::Number(1.0)));
        assert!(!PropertyType::Number.check(&Value::String("1".into())));
        assert!(PropertyType::String.check(&Value::String("a".into())));
        assert!(!PropertyType::String.check(&Value::Bool(true)));
        assert!(PropertyType::Boolean.check(&Value::Bool(false)));
        assert!(!PropertyType::Boolean.check(&Value::Number(1.0)));
        assert!(PropertyType::Date.check(&Value::Date(OffsetDateTime::now_utc())));
        assert!(!PropertyType::Date.check(&Value::Bool(true)));
    }

    #[test]
    fn null_is_the_absent_sentinel() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());
        assert!(!Value::Number(0.0).is_null());
        assert!(!Value::String(String::new()).is_null());
    }
}
