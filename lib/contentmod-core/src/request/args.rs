use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::body::RequestBody;
use crate::descriptor::ValueKind;
use crate::error::InvokeError;

/// A parameter value supplied by the caller.
///
/// Plain Rust values convert with [`From`]:
///
/// ```rust
/// use contentmod_core::ParamValue;
///
/// assert_eq!(ParamValue::from("eng"), ParamValue::String("eng".to_string()));
/// assert_eq!(ParamValue::from(42), ParamValue::Integer(42));
/// assert_eq!(ParamValue::from(true).to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
    /// Any JSON value, `null` counts as absent.
    Opaque(serde_json::Value),
}

impl ParamValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Integer(_) => ValueKind::Integer,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// True for an opaque `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Opaque(serde_json::Value::Null))
    }

    /// Whether this value can be sent for a parameter of the given kind.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        use serde_json::Value;

        match (kind, self) {
            (ValueKind::Opaque, _)
            | (ValueKind::String, Self::String(_) | Self::Opaque(Value::String(_)))
            | (ValueKind::Boolean, Self::Boolean(_) | Self::Opaque(Value::Bool(_))) => true,
            (ValueKind::Integer, Self::Integer(_)) => true,
            (ValueKind::Integer, Self::Opaque(Value::Number(number))) => {
                number.is_i64() || number.is_u64()
            }
            _ => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Opaque(serde_json::Value::String(value)) => write!(f, "{value}"),
            Self::Opaque(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Opaque(value)
    }
}

/// The arguments of one invocation: parameter values by wire name, an optional body
/// and per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    values: IndexMap<String, ParamValue>,
    body: Option<RequestBody>,
    accept_language: Option<String>,
}

impl CallArgs {
    /// Creates empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a parameter value when present, leaves it unset otherwise.
    #[must_use]
    pub fn with_opt<V>(mut self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<ParamValue>,
    {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes a DTO as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Serialization`] when the DTO cannot be serialized.
    pub fn with_json<B>(self, body: &B) -> Result<Self, InvokeError>
    where
        B: Serialize + ?Sized,
    {
        let body = RequestBody::json(body)?;
        Ok(self.with_body(body))
    }

    /// Overrides the configured `accept-language` for this call.
    #[must_use]
    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    /// Sets a parameter value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Sets the request body in place.
    pub fn set_body(&mut self, body: impl Into<RequestBody>) {
        self.body = Some(body.into());
    }

    /// Sets the `accept-language` override in place.
    pub fn set_accept_language(&mut self, language: impl Into<String>) {
        self.accept_language = Some(language.into());
    }

    /// The value of a parameter; an opaque `null` reads as absent.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// The `accept-language` override, if any.
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }

    /// Iterates over the supplied parameter names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
